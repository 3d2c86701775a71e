//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Pack
//!
//! ```text
//! Page 1: 12 results → 2 groups, 8 placed
//! Page 2: 23 results → 5 groups, 23 placed (end of stream)
//! Stopped: end of stream
//!
//! 001 left (5/5)
//!     recipe-001
//!     ...
//! 002 row3 (3/3)
//!     recipe-006
//!     ...
//!
//! Packed 23 of 23 results into 5 groups
//! ```
//!
//! ## Shapes
//!
//! ```text
//! left    5  → row3
//! row4    4  (terminal)
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use std::fmt::Display;

use crate::session::{FeedEvent, NextStep};
use crate::shape::GroupShape;
use crate::types::{Group, placed_items};

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

fn describe_stop(step: NextStep) -> &'static str {
    match step {
        NextStep::Done => "end of stream",
        NextStep::Full => "group limit reached",
        NextStep::FetchMore => "more results requested",
        NextStep::Idle => "waiting for scroll",
    }
}

/// Format the group list: a header per group with fill level, then its items.
pub fn format_groups<T: Display>(groups: &[Group<T>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}/{})",
            format_index(i + 1),
            group.shape,
            group.len(),
            group.capacity
        ));
        for item in &group.items {
            lines.push(format!("    {item}"));
        }
    }
    lines
}

/// Format a single feed progress event.
pub fn format_feed_event(event: &FeedEvent) -> String {
    match event {
        FeedEvent::PageArrived {
            page,
            results,
            groups,
            placed,
            end_reached,
        } => {
            let end = if *end_reached { " (end of stream)" } else { "" };
            format!(
                "Page {}: {} \u{2192} {}, {} placed{}",
                page,
                plural(*results, "result"),
                plural(*groups, "group"),
                placed,
                end
            )
        }
        FeedEvent::Stopped(step) => format!("Stopped: {}", describe_stop(*step)),
    }
}

/// One-line totals, noting results still waiting for a group.
pub fn format_summary<T>(groups: &[Group<T>], total_results: usize) -> String {
    let placed = placed_items(groups);
    let mut line = format!(
        "Packed {} of {} into {}",
        placed,
        plural(total_results, "result"),
        plural(groups.len(), "group")
    );
    let pending = total_results.saturating_sub(placed);
    if pending > 0 {
        line.push_str(&format!(" ({pending} pending)"));
    }
    line
}

/// Capacity and masonry successor for every shape.
pub fn format_shape_table() -> Vec<String> {
    GroupShape::ALL
        .iter()
        .map(|shape| {
            let next = match shape.successor() {
                Some(next) => format!("\u{2192} {next}"),
                None => "(terminal)".to_string(),
            };
            format!("{:<7} {}  {}", shape.name(), shape.capacity(), next)
        })
        .collect()
}

/// Print the pack result to stdout.
pub fn print_pack_output<T: Display>(groups: &[Group<T>], total_results: usize) {
    println!();
    for line in format_groups(groups) {
        println!("{}", line);
    }
    println!();
    println!("{}", format_summary(groups, total_results));
}

pub fn print_shape_table() {
    for line in format_shape_table() {
        println!("{}", line);
    }
}
