//! Formatting utilities used for CLI and export outputs.

use crate::models::cell::Cell;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `1234567.5` → `1,234,567.50`
pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{dec_part}")
}

/// Same as `format_amount` with an explicit `+` on positive values.
pub fn format_signed_amount(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_amount(value))
    } else {
        format_amount(value)
    }
}

/// Display text of a table cell: amounts grouped, text as-is.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(n) => format_amount(*n),
        Cell::Formula { cached, .. } => format_cell(cached),
        other => other.to_string(),
    }
}
