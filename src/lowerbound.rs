//! Lower bounds used to prune branches before recursing further.
//!
//! Four bounds are combined, cheapest first, each only as tight as the
//! last: a greedy-matching trivial bound, a greedy clique-cover bound, the
//! Nemhauser–Trotter LP bound (half-integral relaxation via the bipartite
//! matching in `matching.rs`), and a cycle-cover refinement of the LP
//! bound that accounts for odd cycles among the fractional vertices. Each
//! call records which bound type won, for the final report.

use std::time::Instant;

use crate::solver::Solver;
use crate::types::LbType;

pub fn best(solver: &mut Solver) -> usize {
    let mut bound = trivial(solver);
    solver.stats.record_lb(LbType::Trivial);

    if solver.config.enable_clique_lb {
        let start = Instant::now();
        let lb = clique_cover(solver);
        solver.stats.clique_lb_nanos += start.elapsed().as_nanos() as u64;
        solver.stats.record_lb(LbType::Clique);
        bound = bound.max(lb);
    }

    if solver.config.enable_lp_lb {
        solver.matching.recompute(&solver.graph, &solver.active);
        let classes = solver.matching.classify(&solver.graph, &solver.active);
        let lp_lb = lp_bound(&classes);
        solver.stats.record_lb(LbType::Lp);
        bound = bound.max(lp_lb);

        if solver.config.enable_cycle_lb {
            let start = Instant::now();
            let lb = lp_lb + odd_half_cycles(solver, &classes);
            solver.stats.cycle_lb_nanos += start.elapsed().as_nanos() as u64;
            solver.stats.record_lb(LbType::Cycle);
            bound = bound.max(lb);
        }
    }

    bound
}

fn trivial(solver: &Solver) -> usize {
    let n = solver.n();
    let mut matched = vec![false; n];
    let mut count = 0usize;
    for v in 0..n {
        if !solver.active.contains(v) || matched[v] {
            continue;
        }
        for &u in &solver.graph.adj[v] {
            if solver.active.contains(u) && !matched[u] {
                matched[v] = true;
                matched[u] = true;
                count += 1;
                break;
            }
        }
    }
    count
}

fn clique_cover(solver: &Solver) -> usize {
    let n = solver.n();
    let mut assigned = vec![false; n];
    let mut bound = 0usize;
    for v in 0..n {
        if !solver.active.contains(v) || assigned[v] {
            continue;
        }
        let mut clique = vec![v];
        assigned[v] = true;
        for &u in &solver.graph.adj[v] {
            if !solver.active.contains(u) || assigned[u] {
                continue;
            }
            if clique.iter().all(|&c| solver.graph.has_edge(c, u)) {
                clique.push(u);
                assigned[u] = true;
            }
        }
        bound += clique.len() - 1;
    }
    bound
}

fn lp_bound(classes: &[(usize, Option<i8>)]) -> usize {
    let mut forced = 0usize;
    let mut half = 0usize;
    for &(_, x) in classes {
        match x {
            Some(1) => forced += 1,
            Some(0) => {}
            None => half += 1,
        }
    }
    forced + (half + 1) / 2
}

/// Count odd-length cycles in the functional graph formed by `out_flow`
/// restricted to the fractional (`None`) vertices. Each odd cycle needs
/// one more cover vertex than the half-integral LP value already counts
/// for it, so it tightens the LP bound by exactly that many.
fn odd_half_cycles(solver: &Solver, classes: &[(usize, Option<i8>)]) -> usize {
    let n = solver.n();
    let mut is_half = vec![false; n];
    for &(v, x) in classes {
        if x.is_none() {
            is_half[v] = true;
        }
    }

    let mut visited = vec![false; n];
    let mut odd_cycles = 0usize;
    for &(start, x) in classes {
        if x.is_some() || visited[start] {
            continue;
        }
        let mut path = Vec::new();
        let mut cur = start;
        loop {
            if visited[cur] {
                break;
            }
            visited[cur] = true;
            path.push(cur);
            match solver.matching.out_flow(cur) {
                Some(next) if is_half[next] => cur = next,
                _ => break,
            }
        }
        if let Some(&last) = path.last() {
            if let Some(next) = solver.matching.out_flow(last) {
                if is_half[next] {
                    if let Some(cycle_start) = path.iter().position(|&x| x == next) {
                        let cycle_len = path.len() - cycle_start;
                        if cycle_len % 2 == 1 {
                            odd_cycles += 1;
                        }
                    }
                }
            }
        }
    }
    odd_cycles
}
