//! Degree-2 folding.
//!
//! `v` has exactly two active neighbors `a`, `b` that are not themselves
//! adjacent. There's always a minimum cover where either `v` is in and
//! `a`, `b` are both out, or `v` is out and `a`, `b` are both in — the
//! first costs 1, the second costs 2, so folding `{v, a, b}` into one
//! representative whose IN_COVER value means "pattern two" (`a`, `b` in,
//! `v` out) and IN_SET means "pattern one" (`v` in, `a`, `b` out) keeps a
//! constant `add = 1` regardless of which pattern the solver picks.

use super::Step;
use crate::solver::Solver;

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        let nbrs: Vec<usize> = solver.graph.adj[v]
            .iter()
            .copied()
            .filter(|&u| solver.active.contains(u))
            .collect();
        if nbrs.len() != 2 {
            continue;
        }
        let (a, b) = (nbrs[0], nbrs[1]);
        if solver.graph.has_edge(a, b) {
            continue;
        }
        let mut new_neighbors: Vec<usize> = solver.graph.adj[a]
            .iter()
            .chain(solver.graph.adj[b].iter())
            .copied()
            .filter(|&x| x != v && solver.active.contains(x))
            .collect();
        new_neighbors.sort_unstable();
        new_neighbors.dedup();
        solver.fold(vec![v, a, b], vec![a, b], vec![v], &new_neighbors, 1);
        return Step::Progress;
    }
    Step::NoProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::types::Config;

    #[test]
    fn path_of_three_folds_into_one_representative() {
        // a - v - b, a and b not adjacent, a and b each have an extra edge
        // so they aren't simultaneously degree-0 after the fold.
        let mut g = Graph::with_n(5);
        g.add_edge(0, 1); // a=0, v=1
        g.add_edge(1, 2); // b=2
        g.add_edge(0, 3);
        g.add_edge(2, 4);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.remaining_vertices, 3); // 3,4, and the new rep
        assert_eq!(solver.current_value, 1);
    }
}
