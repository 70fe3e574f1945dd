//! Unconfined-vertex reduction, with the diamond extension.
//!
//! Grow `S = {v}` by repeatedly looking for a vertex `u` outside `S` with
//! exactly one neighbor inside `S`. If `u`'s remaining neighborhood
//! (outside `S`) is empty, `v` is unconfined: some minimum cover contains
//! `v`. If it's a single vertex, absorb it into `S` and retry. Otherwise
//! the base rule alone can't decide, and the diamond extension gets a
//! second look: among the vertices just outside `S` (the ones with no
//! single-neighbor witness left to exploit), look for two, `u_i` and
//! `u_j`, that aren't adjacent to each other but share the exact same
//! pair of neighbors outside `S`. That shared pair forms a diamond with
//! `S` that forces `v` unconfined the same way a one-vertex witness would.

use super::Step;
use crate::solver::Solver;
use crate::types::IN_COVER;

enum Reason {
    /// Proved via the base rule: a witness with an empty remainder.
    Base,
    /// Proved via the diamond extension.
    Diamond,
}

fn diamond_extends(solver: &Solver, s_set: &[usize], outer_shell: &[usize]) -> bool {
    let mut pairs: Vec<(usize, usize, usize)> = Vec::new();
    for &u in outer_shell {
        let mut outer_nb: Vec<usize> = solver.graph.adj[u]
            .iter()
            .copied()
            .filter(|&x| solver.active.contains(x) && !s_set.contains(&x) && x != u)
            .collect();
        if outer_nb.len() != 2 {
            continue;
        }
        outer_nb.sort_unstable();
        pairs.push((u, outer_nb[0], outer_nb[1]));
    }

    for i in 0..pairs.len() {
        for j in (i + 1)..pairs.len() {
            let (ui, ai, bi) = pairs[i];
            let (uj, aj, bj) = pairs[j];
            if ai == aj && bi == bj && !solver.graph.has_edge(ui, uj) {
                return true;
            }
        }
    }
    false
}

fn is_unconfined(solver: &Solver, v: usize) -> Option<Reason> {
    let mut s_set = vec![v];
    loop {
        let mut ns: Vec<usize> = Vec::new();
        for &x in &s_set {
            for &u in &solver.graph.adj[x] {
                if solver.active.contains(u) && !s_set.contains(&u) && !ns.contains(&u) {
                    ns.push(u);
                }
            }
        }

        let witness = ns.iter().copied().find(|&u| {
            solver.graph.adj[u]
                .iter()
                .filter(|&&w| s_set.contains(&w))
                .count()
                == 1
        });

        match witness {
            None => {
                return if diamond_extends(solver, &s_set, &ns) {
                    Some(Reason::Diamond)
                } else {
                    None
                };
            }
            Some(u) => {
                let remainder: Vec<usize> = solver.graph.adj[u]
                    .iter()
                    .copied()
                    .filter(|&x| solver.active.contains(x) && !s_set.contains(&x))
                    .collect();
                match remainder.len() {
                    0 => return Some(Reason::Base),
                    1 => s_set.push(remainder[0]),
                    _ => {
                        return if diamond_extends(solver, &s_set, &ns) {
                            Some(Reason::Diamond)
                        } else {
                            None
                        };
                    }
                }
            }
        }
    }
}

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        if let Some(reason) = is_unconfined(solver, v) {
            if matches!(reason, Reason::Base) {
                let nv: Vec<usize> = solver.graph.adj[v]
                    .iter()
                    .copied()
                    .filter(|&u| solver.active.contains(u))
                    .collect();
                solver.push_packing(1, nv);
            }
            solver.fix(v, IN_COVER);
            return Step::Progress;
        }
    }
    Step::NoProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::types::Config;

    #[test]
    fn pendant_vertex_is_unconfined_via_empty_remainder() {
        // v=0's only neighbor u=1 has no neighbor outside S={0}, so the
        // witness's remainder is empty on the first pass.
        let mut g = Graph::with_n(2);
        g.add_edge(0, 1);
        let solver = Solver::new(g, Config::default());
        assert!(matches!(is_unconfined(&solver, 0), Some(Reason::Base)));
    }

    #[test]
    fn isolated_vertex_is_not_unconfined() {
        let g = Graph::with_n(1);
        let solver = Solver::new(g, Config::default());
        assert!(is_unconfined(&solver, 0).is_none());
    }

    #[test]
    fn diamond_pair_in_the_outer_shell_proves_unconfined() {
        // S={0}; outer shell {1,2} both have two outer-neighbors {3,4}
        // and aren't adjacent to each other, forming a diamond with v.
        let mut g = Graph::with_n(5);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(1, 4);
        g.add_edge(2, 3);
        g.add_edge(2, 4);
        let solver = Solver::new(g, Config::default());
        assert!(matches!(is_unconfined(&solver, 0), Some(Reason::Diamond)));
    }
}
