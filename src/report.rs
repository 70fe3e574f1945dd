//! Renders a `Solution` to stdout in the same tab-aligned key/value style
//! the delta CLI prints its command stats in: fixed-width labels, one
//! fact per line, numbers left as plain `{}`/`{:.3}` with no thousands
//! separators or boxes.

use crate::types::{Solution, Stats, FOLDED, IN_COVER, IN_SET, UNDECIDED};

pub fn print(solution: &Solution, verbose: bool, want_solution: bool) {
    println!("Status:       {}", solution.status);
    println!("Cover size:   {}", solution.value);
    println!("Root LB:      {}", solution.root_lb);
    println!("Time:         {:.3}s", solution.runtime.as_secs_f64());

    if verbose {
        print_stats(&solution.stats);
    }

    if want_solution {
        println!("Solution:     {}", render_solution(&solution.assignment));
    }
}

fn print_stats(stats: &Stats) {
    println!("Branches:     {}", stats.num_branches);
    println!("Leaf cuts:    {}", stats.num_leftcuts);
    println!(
        "Trivial LB:   {} calls",
        stats.trivial_lb_count
    );
    println!(
        "Clique LB:    {} calls, {:.3}ms",
        stats.clique_lb_count,
        stats.clique_lb_nanos as f64 / 1_000_000.0
    );
    println!(
        "LP LB:        {} calls",
        stats.lp_lb_count
    );
    println!(
        "Cycle LB:     {} calls, {:.3}ms",
        stats.cycle_lb_count,
        stats.cycle_lb_nanos as f64 / 1_000_000.0
    );
    println!("Reductions:");
    for kind in crate::types::ReductionKind::ALL {
        let c = stats.reduction(kind);
        println!(
            "  {:<12}{} removed, {}/{} calls progressed, {:.3}ms",
            kind.name(),
            c.count,
            c.calls,
            c.all_calls,
            c.nanos as f64 / 1_000_000.0
        );
    }
}

/// One character per original vertex id: `1` in the cover, `0` outside
/// it, `_` for ids absent from the input graph (sparse external ids),
/// `x` for anything left unresolved (should never happen on a
/// completed, non-timed-out run).
pub fn render_solution(assignment: &[Option<i8>]) -> String {
    assignment
        .iter()
        .map(|slot| match slot {
            None => '_',
            Some(IN_COVER) => '1',
            Some(IN_SET) => '0',
            Some(FOLDED) | Some(UNDECIDED) => 'x',
            Some(_) => 'x',
        })
        .collect()
}

/// Same rendering, but restricted to a single connected component: any
/// vertex outside `component` is rendered `-` rather than its real
/// value, so a per-component solution line reads at a glance which ids
/// belong to the piece being reported.
pub fn render_component_solution(assignment: &[Option<i8>], component: &[usize]) -> String {
    let mut in_component = vec![false; assignment.len()];
    for &v in component {
        if v < in_component.len() {
            in_component[v] = true;
        }
    }
    assignment
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            if !in_component[i] {
                return '-';
            }
            match slot {
                None => '_',
                Some(IN_COVER) => '1',
                Some(IN_SET) => '0',
                Some(FOLDED) | Some(UNDECIDED) => 'x',
                Some(_) => 'x',
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_solution_maps_each_value() {
        let assignment = vec![Some(IN_COVER), Some(IN_SET), None, Some(UNDECIDED)];
        assert_eq!(render_solution(&assignment), "10_x");
    }

    #[test]
    fn component_mask_marks_outsiders() {
        let assignment = vec![Some(IN_COVER), Some(IN_SET), Some(IN_COVER)];
        let component = vec![0, 2];
        assert_eq!(render_component_solution(&assignment, &component), "1-1");
    }
}
