//! CLI progress display utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar style with percentage
///
/// Format: `Extracting [████████░░░░░░░░] 50% (50/100)`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style_with_percent() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {percent}% ({pos}/{len})")
        .expect("valid template")
}

/// Create a simple progress bar
#[must_use]
pub fn simple_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style_with_percent());
    pb.set_message(msg.to_string());
    pb
}

/// Print a per-item result line: `  ok  mylib.dll.compressed`
pub fn print_item(ok: bool, line: &str) {
    if ok {
        println!("  {} {line}", style("ok").green().bold());
    } else {
        println!("  {} {line}", style("!!").red().bold());
    }
}
