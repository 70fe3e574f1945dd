//! Neighborhood-domination reduction.
//!
//! For an edge `(u, v)`: if every neighbor of `u` other than `v` is also a
//! neighbor of `v` (i.e. `N[u] ⊆ N[v]`), any cover containing `u` can swap
//! it for `v` without growing — `v` covers the shared edge and everything
//! `u` covered. So there is always a minimum cover containing `v`.

use super::Step;
use crate::solver::Solver;
use crate::types::IN_COVER;

fn dominates(solver: &Solver, u: usize, v: usize) -> bool {
    solver.graph.adj[u].iter().all(|&w| {
        w == v || !solver.active.contains(w) || solver.graph.adj[v].contains(&w)
    })
}

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        let neighbors: Vec<usize> = solver.graph.adj[v]
            .iter()
            .copied()
            .filter(|&u| solver.active.contains(u))
            .collect();
        for &u in &neighbors {
            if dominates(solver, u, v) {
                solver.fix(v, IN_COVER);
                return Step::Progress;
            }
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
    fn star_center_dominates_every_leaf() {
        // center 0 adjacent to 1,2,3; leaf 1 is also adjacent to 0 only,
        // so N[1] = {0,1} ⊆ N[0] = {0,1,2,3}: 0 dominates every leaf.
        let mut g = Graph::with_n(4);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.s[0], IN_COVER);
    }

    #[test]
    fn triangle_has_no_dominance() {
        let mut g = Graph::with_n(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        let mut solver = Solver::new(g, Config::default());
        // every vertex dominates its neighbors in a triangle (closed
        // neighborhoods are all equal), so this *does* make progress.
        assert!(matches!(apply(&mut solver), Step::Progress));
    }
}
