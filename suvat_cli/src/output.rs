//! Result formatting for the terminal.

use suvat_core::{Quantity, Solution, SuvatError};

fn status_icon(known: bool) -> &'static str {
    if known {
        "[given]"
    } else {
        "[solved]"
    }
}

/// Human-readable report of a solution
pub fn format_solution(solution: &Solution) -> String {
    let known = solution.combination.known();
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════\n");
    out.push_str(&format!("  SUVAT: {}\n", solution.combination));
    out.push_str("═══════════════════════════════════════\n\n");

    for q in Quantity::ALL {
        out.push_str(&format!(
            "  {} = {:>14.6}  {:<18} {}\n",
            q.symbol(),
            solution.motion.get(q),
            q.name(),
            status_icon(known.contains(q))
        ));
    }

    if !solution.equations.is_empty() {
        out.push_str("\nSteps:\n");
        for usage in &solution.equations {
            out.push_str(&format!(
                "  {:<26} ({})\n",
                usage.step,
                usage.equation.metadata().formula_plain
            ));
        }
    }
    out
}

/// Human-readable error report
pub fn format_error(error: &SuvatError) -> String {
    let heading = if error.is_degenerate() {
        "Cannot solve!"
    } else if error.is_contradiction() {
        "Invalid input!"
    } else {
        "Wrong number of values!"
    };
    format!("{}\n  {} [{}]", heading, error, error.error_code())
}
