//! Quick-start example queries.

use colored::Colorize;

/// Canned queries offered as starting points
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Will the patient survive? Analyze the prognosis",
    "What are the risk factors for this patient?",
    "Analyze the patient's current health status",
    "What clinical considerations should be noted?",
];

pub fn execute() {
    println!("{}", "Quick start:".bold());
    for query in EXAMPLE_QUERIES {
        println!("  {} {query}", "-".dimmed());
    }
}
