use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

const MS_PER_DAY: f64 = 86_400_000.0;

/// A single spreadsheet value.
///
/// Serialized as plain JSON: `null`, a number, a string, a bool, an ISO
/// date-time, or (for formulas) the last computed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Elapsed time in days, as Excel stores it.
    Duration(f64),
    /// Formula text (without the leading `=`) and its cached result.
    Formula {
        formula: String,
        cached: Box<Cell>,
    },
}

impl Cell {
    /// Interpret user input: blank → Empty, numeric → Number, anything else → Text.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match coerce_number(trimmed) {
            Some(n) => Cell::Number(n),
            None => Cell::Text(trimmed.to_string()),
        }
    }

    /// Numeric view of the cell. Text is coerced; unparseable text is missing.
    /// Dates, durations and booleans are not amounts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => coerce_number(s),
            Cell::Formula { cached, .. } => cached.as_number(),
            _ => None,
        }
    }

    /// Textual view of the cell, `None` when blank.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) if s.trim().is_empty() => None,
            Cell::Formula { cached, .. } => cached.as_text(),
            other => Some(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Stored as a number, directly or as a formula result.
    pub fn is_number(&self) -> bool {
        match self {
            Cell::Number(_) => true,
            Cell::Formula { cached, .. } => cached.is_number(),
            _ => false,
        }
    }

    /// Excel serial number (1900 date system) of a date-time.
    pub fn excel_serial(dt: &NaiveDateTime) -> f64 {
        let days = (*dt - excel_epoch()).num_milliseconds() as f64 / MS_PER_DAY;
        // serials below 61 sit before Excel's phantom 1900-02-29
        if days < 61.0 { days - 1.0 } else { days }
    }
}

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            Cell::DateTime(dt) if dt.time() == NaiveTime::MIN => write!(f, "{}", dt.date()),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Duration(days) => {
                let secs = (days * 86_400.0).round() as i64;
                write!(f, "{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
            }
            Cell::Formula { cached, .. } => write!(f, "{cached}"),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_none(),
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Bool(b) => serializer.serialize_bool(*b),
            Cell::DateTime(_) | Cell::Duration(_) => serializer.collect_str(self),
            Cell::Formula { cached, .. } => cached.serialize(serializer),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Parse a numeric string as typed into a sheet (`" 1200 "`, `"1200.50"`).
fn coerce_number(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
