use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook to `dest`, optionally replacing the copy with a zip.
    /// Returns the path of the final backup file.
    pub fn backup(cfg: &Config, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = cfg.workbook_path();
        if !src.exists() {
            return Err(AppError::Workbook(format!(
                "workbook not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, "backup", force)?;
            compress_into(&src, &zip_path)?;
            info(format!("Compressed: {}", zip_path.display()));
            zip_path
        } else {
            ensure_writable(dest, "backup", force)?;
            fs::copy(&src, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        audit(
            &cfg.database_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Workbook backup created and compressed"
            } else {
                "Workbook backup created"
            },
        );

        Ok(final_path)
    }
}

/// Write `src` as the single entry of a deflated zip archive.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook.xlsx".to_string());

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options).map_err(io::Error::other)?;
    io::copy(&mut f, &mut zip)?;

    if let Err(e) = zip.finish() {
        warning(format!("Failed to finalize archive: {e}"));
        let _ = fs::remove_file(zip_path);
        return Err(io::Error::other(e).into());
    }
    Ok(())
}
