/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Difference color (approved − requested):
/// \>0 → green (under budget)
/// \<0 → red (over budget)
/// 0 → reset
pub fn color_for_difference(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Blank cells are shown as a grey dash.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
