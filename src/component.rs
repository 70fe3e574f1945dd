//! Connected-component decomposition.
//!
//! Vertex cover is additive across connected components: once the
//! residual graph splits, each piece can be solved to optimality on its
//! own and the results summed. Rescanning for components costs `O(n)`, so
//! on instances that started large it's gated behind the same shrink
//! ratio the reduction suite uses elsewhere, to keep it from
//! dominating runtime on graphs that never actually disconnect.

use crate::graph::Graph;
use crate::solver::Solver;
use crate::types::{Status, SHRINK, SHRINK_MIN_N};

fn find_components(solver: &Solver) -> Vec<Vec<usize>> {
    let n = solver.n();
    let mut comp_id = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for start in 0..n {
        if !solver.active.contains(start) || comp_id[start] != usize::MAX {
            continue;
        }
        let id = components.len();
        let mut members = vec![start];
        comp_id[start] = id;
        let mut stack = vec![start];
        while let Some(x) = stack.pop() {
            for &y in &solver.graph.adj[x] {
                if solver.active.contains(y) && comp_id[y] == usize::MAX {
                    comp_id[y] = id;
                    members.push(y);
                    stack.push(y);
                }
            }
        }
        components.push(members);
    }
    components
}

/// If the residual graph has split into independent pieces, solve each to
/// optimality and return `(total_cover_size, full_assignment)` for every
/// currently active vertex. Returns `None` if there's only one component
/// (nothing to split) or the shrink gate says it isn't worth scanning yet.
pub fn decompose(solver: &mut Solver) -> Option<(usize, Vec<i8>)> {
    if solver.start_n >= SHRINK_MIN_N {
        let ratio = solver.remaining_vertices as f64 / solver.start_n as f64;
        if ratio > SHRINK {
            return None;
        }
    }

    let components = find_components(solver);
    if components.len() <= 1 {
        return None;
    }

    let n = solver.n();
    let mut snapshot = solver.s.clone();
    let mut extra = 0usize;

    for members in &components {
        let mut local_index = vec![usize::MAX; n];
        for (i, &v) in members.iter().enumerate() {
            local_index[v] = i;
        }
        let mut sub_graph = Graph::with_n(members.len());
        for &v in members {
            for &u in &solver.graph.adj[v] {
                if solver.active.contains(u) && local_index[u] != usize::MAX {
                    sub_graph.add_edge(local_index[v], local_index[u]);
                }
            }
        }

        let mut sub_solver = Solver::new(sub_graph, solver.config.clone());
        sub_solver.deadline = solver.deadline;
        let (status, value, assignment, stats) = sub_solver.solve();

        solver.stats.merge(&stats);
        if status != Status::Normal {
            solver.status = status;
        }
        extra += value;
        for (i, &v) in members.iter().enumerate() {
            snapshot[v] = assignment[i];
        }
    }

    Some((extra, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Config;

    #[test]
    fn two_disjoint_edges_decompose_into_two_components() {
        let mut g = Graph::with_n(4);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        let mut solver = Solver::new(g, Config::default());
        let (extra, snapshot) = decompose(&mut solver).expect("should split");
        assert_eq!(extra, 2);
        assert_eq!(snapshot.len(), 4);
    }

    #[test]
    fn single_component_does_not_decompose() {
        let mut g = Graph::with_n(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        let mut solver = Solver::new(g, Config::default());
        assert!(decompose(&mut solver).is_none());
    }
}
