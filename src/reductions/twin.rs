//! Twin reduction: `v` and `w` are twins if they're non-adjacent, both
//! have exactly three active neighbors, and those neighborhoods are
//! identical: `N(v) = N(w) = {a, b, c}`.
//!
//! When `{a, b, c}` contains at least one edge, covering that edge
//! already forces at least one of them into the cover regardless of
//! `v`/`w`, and it's always at least as good to put all three in the
//! cover and exclude `v`, `w` for free as it is to route either through
//! `v` or `w` — so this case fixes `a, b, c` in and `v, w` out directly,
//! no fold needed.
//!
//! When `{a, b, c}` is independent, the local optimum is 2 (either `v, w`
//! in, or two of `a, b, c` in) regardless of which case it turns out to
//! be, so the whole five-vertex gadget folds into a single representative
//! wired to `a, b, c`'s external neighbors: the representative's value
//! propagates to `a, b, c` directly and to `v, w` inverted, with `add = 2`
//! covering the fixed part of the cost either way.

use super::Step;
use crate::solver::Solver;
use crate::types::{IN_COVER, IN_SET};

fn has_internal_edge(solver: &Solver, members: &[usize]) -> bool {
    (0..members.len()).any(|i| {
        (i + 1..members.len()).any(|j| solver.graph.has_edge(members[i], members[j]))
    })
}

fn fold_independent_twins(solver: &mut Solver, v: usize, w: usize, members: &[usize]) {
    let removed = vec![v, w, members[0], members[1], members[2]];
    let same = members.to_vec();
    let opposite = vec![v, w];

    let mut new_neighbors = Vec::new();
    for &x in members {
        for &y in &solver.graph.adj[x] {
            if solver.active.contains(y) && y != v && y != w && !members.contains(&y) && !new_neighbors.contains(&y) {
                new_neighbors.push(y);
            }
        }
    }

    solver.fold(removed, same, opposite, &new_neighbors, 2);
}

pub(crate) fn apply(solver: &mut Solver) -> Step {
    let n = solver.n();
    for v in 0..n {
        if !solver.active.contains(v) {
            continue;
        }
        let mut nv: Vec<usize> = solver.graph.adj[v]
            .iter()
            .copied()
            .filter(|&u| solver.active.contains(u))
            .collect();
        if nv.len() != 3 {
            continue;
        }
        nv.sort_unstable();

        for w in (v + 1)..n {
            if !solver.active.contains(w) || solver.graph.has_edge(v, w) {
                continue;
            }
            let mut nw: Vec<usize> = solver.graph.adj[w]
                .iter()
                .copied()
                .filter(|&u| solver.active.contains(u))
                .collect();
            if nw.len() != 3 {
                continue;
            }
            nw.sort_unstable();
            if nv != nw {
                continue;
            }
            if has_internal_edge(solver, &nv) {
                for &x in &nv {
                    solver.fix(x, IN_COVER);
                }
                solver.fix(v, IN_SET);
                solver.fix(w, IN_SET);
            } else {
                fold_independent_twins(solver, v, w, &nv);
            }
            return Step::Progress;
        }
    }
    Step::NoProgress
}
