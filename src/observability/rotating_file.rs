//! Append-only line writer that rotates by size.
//!
//! When the live file grows past its limit it is renamed to
//! `<file>.<UTC timestamp>` and a fresh file is started. Only the newest
//! backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotation threshold for trace files.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
pub const DEFAULT_BACKUPS: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures and reports a poisoned lock as [`io::ErrorKind::Other`].
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes);
        if oversized {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));
        fs::rename(&self.path, PathBuf::from(backup))?;
        self.prune()
    }

    /// Deletes all but the newest `backups` rotated files.
    fn prune(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(prefix) = self.path.file_name().and_then(|n| n.to_str()).map(|n| format!("{n}.")) else {
            return Ok(());
        };

        let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically, newest last.
        rotated.sort();
        let excess = rotated.len().saturating_sub(self.backups);
        for old in rotated.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn rotated_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"), DEFAULT_MAX_BYTES, 3);
        file.append_line("one").unwrap();
        file.append_line("two").unwrap();
        assert_eq!(fs::read_to_string(&file.path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_when_oversized() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"), 4, 3);
        file.append_line("first line").unwrap();
        file.append_line("second").unwrap();

        assert_eq!(fs::read_to_string(&file.path).unwrap(), "second\n");
        assert_eq!(rotated_count(dir.path()), 1);
    }

    #[test]
    fn keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["20240101T000000.000Z", "20240102T000000.000Z", "20240103T000000.000Z"] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "old").unwrap();
        }
        let file = RotatingFile::new(dir.path().join("trace.json"), 4, 2);
        file.append_line("oversized").unwrap();
        file.append_line("next").unwrap();

        assert_eq!(rotated_count(dir.path()), 2);
        assert!(!dir.path().join("trace.json.20240101T000000.000Z").exists());
        assert!(!dir.path().join("trace.json.20240102T000000.000Z").exists());
    }
}
