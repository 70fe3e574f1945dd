//! Branching on a chosen vertex: a two-child exhaustive recursion.
//!
//! Pick a vertex `v` by the configured rule and recurse on two
//! exhaustive, disjoint cases: `v` is in the cover, or `v` is excluded (in
//! which case every neighbor of `v`, and every *mirror* of `v`, must be in
//! the cover to cover `v`'s edges and the near-edges mirrors stand in
//! for). Mirrors of `v` are non-neighbors `u` for which `N(v) \ N(u)`
//! forms a clique — a standard strengthening of the exclude branch that
//! never discards the true optimum.
//!
//! Each child also derives a packing constraint before recursing. In the
//! cover child, at most one neighbor of `v` can end up outside the cover
//! (two, if a mirror was found, since the mirror already covers one of
//! those near-edges on its own). In the exclude child, once every
//! neighbor of `v` is already forced into the cover, each of them `u` has
//! its own external neighborhood `N(u) \ N[v]` bounded the same way —
//! widened to 2 when some other neighbor of `v` dominates that whole
//! external set, the same "dominates" pattern mirror detection looks for.

use rand::Rng;

use crate::solver::Solver;
use crate::types::{BranchRule, IN_COVER, IN_SET};

fn degree(solver: &Solver, v: usize) -> usize {
    solver.graph.adj[v]
        .iter()
        .filter(|&&u| solver.active.contains(u))
        .count()
}

fn pick_branch_vertex(solver: &mut Solver) -> Option<usize> {
    let n = solver.n();
    let mut candidates: Vec<usize> = (0..n).filter(|&v| solver.active.contains(v)).collect();
    if candidates.is_empty() {
        return None;
    }
    match solver.config.branch_rule {
        BranchRule::Random => {
            let idx = solver.rng.gen_range(0..candidates.len());
            Some(candidates[idx])
        }
        BranchRule::MinDegree => {
            candidates.sort_by_key(|&v| (degree(solver, v), v));
            Some(candidates[0])
        }
        BranchRule::MaxDegree => {
            candidates.sort_by(|&a, &b| degree(solver, b).cmp(&degree(solver, a)).then(a.cmp(&b)));
            Some(candidates[0])
        }
    }
}

/// Non-neighbors `u` of `v` such that `N(v) \ N(u)` induces a clique.
fn mirrors_of(solver: &Solver, v: usize, nv: &[usize]) -> Vec<usize> {
    let mut candidates: Vec<usize> = Vec::new();
    for &u in nv {
        for &w in &solver.graph.adj[u] {
            if w != v
                && solver.active.contains(w)
                && !solver.graph.has_edge(v, w)
                && !candidates.contains(&w)
            {
                candidates.push(w);
            }
        }
    }

    let mut out = Vec::new();
    for u in candidates {
        let diff: Vec<usize> = nv
            .iter()
            .copied()
            .filter(|&x| x != u && !solver.graph.has_edge(u, x))
            .collect();
        let is_clique =
            (0..diff.len()).all(|i| (i + 1..diff.len()).all(|j| solver.graph.has_edge(diff[i], diff[j])));
        if is_clique {
            out.push(u);
        }
    }
    out
}

/// A neighbor `w` of `v` (other than `u`) that alone covers all of `u`'s
/// external neighborhood `external`, making it safe to allow one more
/// exclusion than the plain bound of 1 would.
fn strong_witness(solver: &Solver, u: usize, nv: &[usize], external: &[usize]) -> bool {
    nv.iter()
        .any(|&w| w != u && external.iter().all(|&x| solver.graph.has_edge(w, x)))
}

pub fn branch(solver: &mut Solver) {
    let v = match pick_branch_vertex(solver) {
        Some(v) => v,
        None => return,
    };
    let nv: Vec<usize> = solver.graph.adj[v]
        .iter()
        .copied()
        .filter(|&u| solver.active.contains(u))
        .collect();
    let mirrors = mirrors_of(solver, v, &nv);

    let mark = solver.checkpoint();
    let packing_mark = solver.packing.len();
    solver.fix(v, IN_COVER);
    let bound_a = if mirrors.is_empty() { 1 } else { 2 };
    solver.push_packing(bound_a, nv.clone());
    solver.stats.num_branches += 1;
    solver.rec();
    solver.restore_to(mark);
    solver.packing.truncate(packing_mark);

    if solver.timed_out() {
        return;
    }

    let mark = solver.checkpoint();
    let packing_mark = solver.packing.len();
    solver.fix(v, IN_SET);
    for &u in nv.iter().chain(mirrors.iter()) {
        if solver.active.contains(u) {
            solver.fix(u, IN_COVER);
        }
    }
    if mirrors.is_empty() {
        for &u in &nv {
            let external: Vec<usize> = solver.graph.adj[u]
                .iter()
                .copied()
                .filter(|&x| solver.active.contains(x) && x != v && !nv.contains(&x))
                .collect();
            if external.is_empty() {
                continue;
            }
            let bound = if strong_witness(solver, u, &nv, &external) { 2 } else { 1 };
            solver.push_packing(bound, external);
        }
    }
    solver.stats.num_branches += 1;
    solver.rec();
    solver.restore_to(mark);
    solver.packing.truncate(packing_mark);
}
