//! # File Output
//!
//! Writes exported documents to disk with atomic-save semantics: write to a
//! `.tmp` sibling, sync, then rename over the target. An interrupted export
//! never leaves a half-written report behind.
//!
//! Nothing is ever read back; plans live only in memory for the session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use course_core::file_io::write_export;
//! use course_core::pdf::render_plan_pdf;
//! use course_core::plan::PlanConfig;
//! use course_core::report::ReportMeta;
//! use std::path::Path;
//!
//! let bytes = render_plan_pdf(&PlanConfig::default(), ReportMeta::default())?;
//! write_export(&bytes, Path::new("projection.pdf"))?;
//! # Ok::<(), course_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};

/// Temporary path used while writing `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = tmp
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp.set_extension(extension);
    tmp
}

/// Write export bytes to `path` atomically.
///
/// The write process:
/// 1. Write to a temporary file (`.pdf.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the final path
pub fn write_export(bytes: &[u8], path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_export_path(name: &str) -> PathBuf {
        temp_dir().join(format!("coursebook_test_{}_{}.pdf", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/report.pdf"));
        assert_eq!(tmp, Path::new("/path/to/report.pdf.tmp"));

        let tmp = tmp_path_for(Path::new("/path/to/report"));
        assert_eq!(tmp, Path::new("/path/to/report.tmp"));
    }

    #[test]
    fn test_write_export_roundtrip() {
        let path = temp_export_path("roundtrip");
        write_export(b"%PDF-1.7 test", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7 test");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_export_leaves_no_tmp_file() {
        let path = temp_export_path("atomic");
        write_export(b"data", &path).unwrap();
        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_export_overwrites() {
        let path = temp_export_path("overwrite");
        write_export(b"first", &path).unwrap();
        write_export(b"second", &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_export_missing_directory() {
        let path = temp_dir()
            .join("coursebook_no_such_dir_for_tests")
            .join("report.pdf");
        let err = write_export(b"data", &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
