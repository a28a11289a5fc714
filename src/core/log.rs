use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "register" => Colour::Cyan,
        "set" | "replace" => Colour::Yellow,
        "sync" => Colour::Purple,
        "export" => Colour::Green,
        "backup" => Colour::Blue,
        _ => Colour::White,
    }
}

struct Entry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let entries = stmt
            .query_map([], |row| {
                let raw_date: String = row.get(1)?;
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                Ok(Entry {
                    id: row.get(0)?,
                    date,
                    operation: row.get(2)?,
                    target: row.get(3)?,
                    message: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| plain_op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);

        println!("Internal log:\n");

        for entry in &entries {
            let colored = colored_op_target(entry);
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, entry.date, colored, padding, entry.message
            );
        }

        Ok(())
    }
}

fn plain_op_target(entry: &Entry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// `op (target)` truncated to `OP_TARGET_MAX` visible chars, only `op` coloured.
fn colored_op_target(entry: &Entry) -> String {
    let plain = plain_op_target(entry);
    let visible = if plain.chars().count() > OP_TARGET_MAX {
        let mut s: String = plain.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}
