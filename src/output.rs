//! CLI output formatting for build and check runs.
//!
//! Output is information-centric: each topic leads with its positional index
//! and title, with the written file path as secondary context.
//!
//! ## Build
//!
//! ```text
//! Topics
//! 001 Charity → pages/charity.html (17 questions)
//! 002 Women → pages/women.html (18 questions)
//!
//! Generated 2 topic pages
//! ```
//!
//! ## Check
//!
//! ```text
//! Topics
//! 001 Charity (17 questions, 4 explore links)
//! 002 Women (18 questions, 4 explore links)
//!
//! Carousel: 9 cards
//! ```
//!
//! Each mode has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::content::Registry;
use crate::generate::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format build output: one line per written page plus a summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Topics".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {} ({})",
            format_index(i + 1),
            page.title,
            page.path.display(),
            plural(page.qa_count, "question"),
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        plural(report.pages.len(), "topic page")
    ));
    lines
}

/// Format check output: validated content inventory, nothing written.
pub fn format_check_output(registry: &Registry) -> Vec<String> {
    let mut lines = vec!["Topics".to_string()];
    for (i, topic) in registry.topics.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            topic.title,
            plural(topic.qa.len(), "question"),
            plural(topic.explore.len(), "explore link"),
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Carousel: {}",
        plural(registry.carousel.len(), "card")
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{line}");
    }
}

pub fn print_check_output(registry: &Registry) {
    for line in format_check_output(registry) {
        println!("{line}");
    }
}
