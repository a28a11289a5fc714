// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Make sure `path` may receive a new download or backup.
///
/// An existing file is only replaced with `force` or after the user confirms.
/// `what` names the file in the prompt ("download", "backup").
pub(crate) fn ensure_writable(path: &Path, what: &str, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("A previous {what} is already at '{}'.", path.display()));
    print!("Replace it with the current workbook data? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Replacing the previous {what}."));
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "{what} cancelled, '{}' left unchanged (use --force to replace it)",
            path.display()
        ))),
    }
}
