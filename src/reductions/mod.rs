//! The fixed-point reduction suite.
//!
//! `run()` applies every enabled reduction in order, restarting from the
//! top whenever any reduction makes progress, until a full pass finds
//! nothing left to do or a reduction (or the packing store) reports the
//! branch infeasible. Order follows a cheapest-first-then-rescan
//! discipline: local degree-based reductions before the matching-based LP
//! pass, which in turn runs before the pricier structural ones.
//!
//! Every reduction mutates the solver exclusively through `Solver::fix`,
//! `Solver::fold`, and `Solver::alternative`, never by poking `s[]`
//! directly, so the undo stack and active-vertex bookkeeping always agree
//! with the assignment.

mod deg1;
mod desk;
mod dominance;
mod fold2;
mod funnel;
mod lp;
mod twin;
mod unconfined;

use std::time::Instant;

use crate::solver::Solver;
use crate::types::{ReductionKind, RunMode, IN_COVER, UNDECIDED};

/// Outcome of a single reduction attempt.
pub(crate) enum Step {
    NoProgress,
    Progress,
    Infeasible,
}

fn timed<F: FnOnce(&mut Solver) -> Step>(solver: &mut Solver, kind: ReductionKind, f: F) -> Step {
    let start = Instant::now();
    let step = f(solver);
    let counters = solver.stats.reduction_mut(kind);
    counters.all_calls += 1;
    counters.nanos += start.elapsed().as_nanos() as u64;
    if matches!(step, Step::Progress) {
        counters.calls += 1;
    }
    step
}

fn propagate_packing(solver: &mut Solver) -> Step {
    if !solver.config.enable_packing || solver.packing.is_empty() {
        return Step::NoProgress;
    }
    let forced = match solver.packing.find_forced(&solver.s) {
        Err(()) => return Step::Infeasible,
        Ok(forced) => forced,
    };
    let mut progressed = false;
    for v in forced {
        if solver.s[v] == UNDECIDED {
            solver.fix(v, IN_COVER);
            progressed = true;
        }
    }
    if progressed {
        Step::Progress
    } else {
        Step::NoProgress
    }
}

/// Run the reduction suite to a fixed point. Returns `false` if the branch
/// was proved infeasible (caller must backtrack), `true` otherwise.
///
/// Under `RunMode::OnlyRoot`, every reduction still runs at the root call
/// (`is_root`); recursive calls below it only get the reductions cheap
/// enough to run every node without dominating runtime on large,
/// deeply-branching instances: degree-1, fold2, and packing propagation.
pub fn run(solver: &mut Solver, is_root: bool) -> bool {
    let full_suite = is_root || solver.config.mode == RunMode::All;

    loop {
        match timed(solver, ReductionKind::Packing, propagate_packing) {
            Step::Infeasible => return false,
            Step::Progress => continue,
            Step::NoProgress => {}
        }

        macro_rules! try_reduction {
            ($enable:ident, $kind:expr, $module:ident) => {
                if solver.config.$enable {
                    match timed(solver, $kind, $module::apply) {
                        Step::Infeasible => return false,
                        Step::Progress => continue,
                        Step::NoProgress => {}
                    }
                }
            };
        }

        try_reduction!(enable_deg1, ReductionKind::Deg1, deg1);
        try_reduction!(enable_fold2, ReductionKind::Fold2, fold2);
        if full_suite {
            try_reduction!(enable_dominance, ReductionKind::Dominance, dominance);
            try_reduction!(enable_lp, ReductionKind::Lp, lp);
            try_reduction!(enable_unconfined, ReductionKind::Unconfined, unconfined);
            try_reduction!(enable_twin, ReductionKind::Twin, twin);
            try_reduction!(enable_funnel, ReductionKind::Funnel, funnel);
            try_reduction!(enable_desk, ReductionKind::Desk, desk);
        }

        return true;
    }
}
