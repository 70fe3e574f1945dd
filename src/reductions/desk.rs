//! Desk reduction: a chordless 4-cycle `v–u1–w–u2–v` whose four vertices
//! all have degree 3 or 4 and whose combined external neighborhood stays
//! small. Folds the same way funnel does, except both alternative groups
//! hold two vertices instead of one: `{v, w}` against `{u1, u2}`, joined
//! so exactly one side ends up in the cover.

use super::Step;
use crate::solver::Solver;

/// Caps the gadget's external fan-out at what branching on the same four
/// vertices would have produced, so the fold never grows the graph back
/// up past the cost it's meant to avoid.
const MAX_EXTERNAL: usize = 4;

fn degree(solver: &Solver, v: usize) -> usize {
    solver.graph.adj[v]
        .iter()
        .filter(|&&u| solver.active.contains(u))
        .count()
}

fn active_neighbors(solver: &Solver, v: usize) -> Vec<usize> {
    solver.graph.adj[v]
        .iter()
        .copied()
        .filter(|&u| solver.active.contains(u))
        .collect()
}

fn dedup(items: Vec<usize>) -> Vec<usize> {
    let mut out = Vec::with_capacity(items.len());
    for x in items {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) || !(3..=4).contains(&degree(solver, v)) {
            continue;
        }
        for &u1 in &active_neighbors(solver, v) {
            if !(3..=4).contains(&degree(solver, u1)) {
                continue;
            }
            for &w in &active_neighbors(solver, u1) {
                if w == v || solver.graph.has_edge(v, w) || !(3..=4).contains(&degree(solver, w)) {
                    continue;
                }
                for &u2 in &active_neighbors(solver, w) {
                    if u2 == u1 || u2 == v || solver.graph.has_edge(u1, u2) {
                        continue;
                    }
                    if !solver.graph.has_edge(u2, v) || !(3..=4).contains(&degree(solver, u2)) {
                        continue;
                    }

                    let ext_a = dedup(
                        active_neighbors(solver, v)
                            .into_iter()
                            .chain(active_neighbors(solver, w))
                            .filter(|&x| x != u1 && x != u2)
                            .collect(),
                    );
                    let ext_b = dedup(
                        active_neighbors(solver, u1)
                            .into_iter()
                            .chain(active_neighbors(solver, u2))
                            .filter(|&x| x != v && x != w)
                            .collect(),
                    );
                    let combined = dedup(ext_a.iter().chain(ext_b.iter()).copied().collect());
                    if combined.len() > MAX_EXTERNAL {
                        continue;
                    }

                    solver.alternative(vec![v, w], vec![u1, u2], &ext_a, &ext_b, 2);
                    return Step::Progress;
                }
            }
        }
    }
    Step::NoProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::types::{Config, FOLDED};

    #[test]
    fn desk_four_cycle_with_small_external_neighborhood_folds() {
        // v=0, u1=1, w=2, u2=3 form the 4-cycle; 4..7 bring every vertex
        // in the cycle up to degree 3.
        let mut g = Graph::with_n(8);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        g.add_edge(0, 4);
        g.add_edge(1, 5);
        g.add_edge(2, 6);
        g.add_edge(3, 7);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.s[0], FOLDED);
        assert_eq!(solver.s[1], FOLDED);
        assert_eq!(solver.s[2], FOLDED);
        assert_eq!(solver.s[3], FOLDED);
    }

    #[test]
    fn cycle_with_a_chord_is_not_a_desk() {
        let mut g = Graph::with_n(6);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        g.add_edge(0, 2); // chord breaks the induced 4-cycle
        g.add_edge(1, 4);
        g.add_edge(3, 5);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::NoProgress));
    }
}
