//! Nemhauser–Trotter LP reduction.
//!
//! The half-integral LP relaxation of vertex cover always has an optimal
//! solution with every variable in `{0, 1/2, 1}`, and there's a minimum
//! integral cover agreeing with it on every non-half-integral vertex. The
//! matching-based König cover (`Matching::classify`) computes exactly that
//! partition, so every vertex it calls forced-1 or forced-0 can be fixed.

use super::Step;
use crate::solver::Solver;
use crate::types::{IN_COVER, IN_SET};

pub(crate) fn apply(solver: &mut Solver) -> Step {
    solver.matching.recompute(&solver.graph, &solver.active);
    let classes = solver.matching.classify(&solver.graph, &solver.active);
    let mut progressed = false;
    for (v, x) in classes {
        match x {
            Some(1) => {
                solver.fix(v, IN_COVER);
                progressed = true;
            }
            Some(0) => {
                solver.fix(v, IN_SET);
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
