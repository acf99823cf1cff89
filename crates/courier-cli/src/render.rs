//! Human-readable outcome rendering.

use console::style;
use courier_channels::DispatchOutcome;

/// Print a dispatch outcome.
pub fn print_outcome(outcome: &DispatchOutcome) {
    println!("--- Sending via {} ({}) ---", outcome.channel, outcome.recipient);
    println!("  Format:  {}", outcome.format);
    println!("  Content: '{}'", outcome.preview);

    for warning in &outcome.warnings {
        println!("  {} {}", style("Warning:").yellow(), warning);
    }

    match (outcome.note(), outcome.failure()) {
        (Some(note), _) => println!("  Status:  {} {}", style("ok").green(), note),
        (None, Some(failure)) => println!("  Status:  {} {}", style("failed").red(), failure),
        (None, None) => {}
    }
}
