//! Funnel reduction: a vertex `v` with a neighbor `u` such that `N(v)\{u}`
//! is a clique `C`. Whichever of `v` or `u` ends up excluded, the other
//! side's assignment is forced along with it, so the pattern is exactly a
//! size-one `Alternative`: `rep_a` stands in for `{v}` wired to `C`,
//! `rep_b` stands in for `{u}` wired to `u`'s other neighbors, joined by
//! an edge so at least one of the two is in the cover.

use super::Step;
use crate::solver::Solver;

fn is_clique(solver: &Solver, members: &[usize]) -> bool {
    (0..members.len()).all(|i| {
        (i + 1..members.len()).all(|j| solver.graph.has_edge(members[i], members[j]))
    })
}

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        let nv: Vec<usize> = solver.graph.adj[v]
            .iter()
            .copied()
            .filter(|&u| solver.active.contains(u))
            .collect();
        if nv.len() < 2 {
            continue;
        }
        for &u in &nv {
            let clique: Vec<usize> = nv.iter().copied().filter(|&x| x != u).collect();
            if !is_clique(solver, &clique) {
                continue;
            }
            let ext_b: Vec<usize> = solver.graph.adj[u]
                .iter()
                .copied()
                .filter(|&x| solver.active.contains(x) && x != v)
                .collect();
            solver.alternative(vec![v], vec![u], &clique, &ext_b, 1);
            return Step::Progress;
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
    fn funnel_vertex_with_clique_minus_one_neighbor_folds() {
        // v=0 with neighbors {1,2,3}; 3 is the funnel hinge, {1,2} a clique.
        let mut g = Graph::with_n(4);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        g.add_edge(1, 2);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.s[0], FOLDED);
        assert_eq!(solver.s[3], FOLDED);
    }

    #[test]
    fn vertex_without_a_clique_hinge_is_left_alone() {
        // v=0 with neighbors {1,2,3} forming a path, no single hinge vertex
        // whose removal leaves the rest a clique.
        let mut g = Graph::with_n(4);
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(0, 3);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::NoProgress));
    }
}
