//! Degree-0/degree-1 vertex reduction.
//!
//! An isolated active vertex covers nothing and can be placed outside the
//! cover for free. A degree-1 vertex's sole neighbor always dominates it:
//! putting the neighbor in the cover covers the shared edge at no worse a
//! cost, so the neighbor is fixed in and the leaf fixed out.

use super::Step;
use crate::solver::Solver;
use crate::types::{IN_COVER, IN_SET};

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    let mut progressed = false;
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        let active_neighbors: Vec<usize> = solver.graph.adj[v]
            .iter()
            .copied()
            .filter(|&u| solver.active.contains(u))
            .collect();
        match active_neighbors.len() {
            0 => {
                solver.fix(v, IN_SET);
                progressed = true;
            }
            1 => {
                let u = active_neighbors[0];
                solver.fix(u, IN_COVER);
                if solver.active.contains(v) {
                    solver.fix(v, IN_SET);
                }
                progressed = true;
            }
            _ => {}
        }
    }
    if progressed {
        Step::Progress
    } else {
        Step::NoProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::types::Config;

    #[test]
    fn isolated_vertex_goes_to_independent_set() {
        let g = Graph::with_n(1);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.s[0], IN_SET);
    }

    #[test]
    fn pendant_forces_its_neighbor_into_cover() {
        let mut g = Graph::with_n(2);
        g.add_edge(0, 1);
        let mut solver = Solver::new(g, Config::default());
        assert!(matches!(apply(&mut solver), Step::Progress));
        assert_eq!(solver.s[1], IN_COVER);
        assert_eq!(solver.s[0], IN_SET);
        assert_eq!(solver.current_value, 1);
    }
}
