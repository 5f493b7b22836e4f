// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only log store with size-bounded rotation.
//!
//! Every record is appended to the current file and synced before `write`
//! returns. Once the current file reaches `max_size` bytes it is renamed
//! over the archive slot and a fresh current file is opened. Only one
//! archived generation is ever retained.
//!
//! Every operation that touches the files holds the writer lock, so a
//! reader never sees the archive removed before current has been renamed
//! over it. `export_copy` releases the lock once the text is gathered.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use lf_core::{
    DirectoryError, DirectoryProvider, SystemTimestamp, TempPathGenerator, TimestampFormatter,
    UuidTempPaths,
};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::export::write_atomic;
use crate::paths;

/// File name of the current log inside the resolved directory.
pub const DEFAULT_BASE_NAME: &str = "logfile.txt";

/// Rotation threshold in bytes (100 MiB).
pub const DEFAULT_MAX_LOG_SIZE: u64 = 100 * 1024 * 1024;

/// Prefix handed to the temp-path generator for exported copies.
const EXPORT_PREFIX: &str = "logfile";

/// Errors that can occur in LogStore operations
#[derive(Debug, Error)]
pub enum LogStoreError {
    #[error("storage unavailable: {0}")]
    Directory(#[from] DirectoryError),
    #[error("storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to export log to {}: {source}", .path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogStoreError {
    /// True when the store cannot reach its files at all.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(
            self,
            LogStoreError::Directory(_) | LogStoreError::StorageUnavailable { .. }
        )
    }
}

fn unavailable(path: &Path) -> impl FnOnce(io::Error) -> LogStoreError + '_ {
    move |source| LogStoreError::StorageUnavailable {
        path: path.to_owned(),
        source,
    }
}

/// Initial configuration for a [`LogStore`].
#[derive(Debug, Clone)]
pub struct LogStoreConfig {
    /// File name of the current log; the archive is `<base_name>.old`
    pub base_name: String,
    /// Rotate once the current file holds at least this many bytes
    pub max_size: u64,
    /// Prefix each record with a timestamp and a space
    pub include_timestamp: bool,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            max_size: DEFAULT_MAX_LOG_SIZE,
            include_timestamp: false,
        }
    }
}

impl LogStoreConfig {
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.include_timestamp = enabled;
        self
    }
}

/// Writer lifecycle: `Open -> Rotating -> Open`.
///
/// `Rotating` is only observable under the writer lock, or after a rotation
/// could not reopen the current file. In the latter case the next mutation
/// reopens before doing anything else.
enum WriterState {
    Open(File),
    Rotating,
}

/// Size-bounded append-only log with a single archived generation.
///
/// Construct one per process at the composition root and pass it (or an
/// `Arc` of it) to whatever needs to log.
pub struct LogStore<T = SystemTimestamp, G = UuidTempPaths> {
    current_path: PathBuf,
    archive_path: PathBuf,
    writer: Mutex<WriterState>,
    max_size: AtomicU64,
    include_timestamp: AtomicBool,
    timestamps: T,
    temp_paths: G,
}

impl LogStore {
    /// Open the store with wall-clock timestamps and system temp paths.
    pub fn open<D>(dirs: &D, config: LogStoreConfig) -> Result<Self, LogStoreError>
    where
        D: DirectoryProvider + ?Sized,
    {
        Self::open_with(dirs, config, SystemTimestamp, UuidTempPaths::default())
    }
}

impl<T: TimestampFormatter, G: TempPathGenerator> LogStore<T, G> {
    /// Open the store with explicit collaborators.
    ///
    /// Creates the directory and an empty current file if either is missing.
    /// Existing content is never truncated, so opening is idempotent.
    pub fn open_with<D>(
        dirs: &D,
        config: LogStoreConfig,
        timestamps: T,
        temp_paths: G,
    ) -> Result<Self, LogStoreError>
    where
        D: DirectoryProvider + ?Sized,
    {
        let dir = dirs.resolve()?;
        fs::create_dir_all(&dir).map_err(unavailable(&dir))?;

        let current_path = paths::current_path(&dir, &config.base_name);
        let archive_path = paths::archive_path(&dir, &config.base_name);
        let file = open_current(&current_path)?;

        debug!(
            path = %current_path.display(),
            max_size = config.max_size,
            "opened log store",
        );

        Ok(Self {
            current_path,
            archive_path,
            writer: Mutex::new(WriterState::Open(file)),
            max_size: AtomicU64::new(config.max_size),
            include_timestamp: AtomicBool::new(config.include_timestamp),
            timestamps,
            temp_paths,
        })
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Whether an archived generation currently exists.
    pub fn has_archive(&self) -> bool {
        let _writer = self.writer.lock();
        self.archive_path.is_file()
    }

    pub fn max_size(&self) -> u64 {
        self.max_size.load(Ordering::SeqCst)
    }

    /// Change the rotation threshold. Takes effect on the next write.
    pub fn set_max_size(&self, bytes: u64) {
        self.max_size.store(bytes, Ordering::SeqCst);
    }

    pub fn include_timestamp(&self) -> bool {
        self.include_timestamp.load(Ordering::SeqCst)
    }

    pub fn set_include_timestamp(&self, enabled: bool) {
        self.include_timestamp.store(enabled, Ordering::SeqCst);
    }

    /// Append one record and sync it to storage.
    ///
    /// A trailing newline is added if `line` lacks one. With timestamps
    /// enabled the record is `<timestamp> <line>`. The rotation check runs
    /// afterwards, so the record that crosses the threshold is archived
    /// together with everything before it.
    pub fn write(&self, line: &str) -> Result<(), LogStoreError> {
        let record = self.format_record(line);

        let mut writer = self.writer.lock();
        let file = self.ensure_open(&mut writer)?;
        file.write_all(record.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(unavailable(&self.current_path))?;

        self.rotate_if_needed(&mut writer)
    }

    /// Size of the current file in bytes, as reported by the filesystem.
    pub fn size(&self) -> Result<u64, LogStoreError> {
        let _writer = self.writer.lock();
        self.current_len()
    }

    fn current_len(&self) -> Result<u64, LogStoreError> {
        fs::metadata(&self.current_path)
            .map(|meta| meta.len())
            .map_err(unavailable(&self.current_path))
    }

    /// Truncate the current file and delete the archive.
    ///
    /// The write handle stays open on the same file. Threshold and timestamp
    /// settings are left as they are.
    pub fn clear(&self) -> Result<(), LogStoreError> {
        let mut writer = self.writer.lock();
        let file = self.ensure_open(&mut writer)?;
        file.set_len(0)
            .and_then(|()| file.sync_all())
            .map_err(unavailable(&self.current_path))?;

        remove_if_exists(&self.archive_path).map_err(unavailable(&self.archive_path))?;

        debug!(path = %self.current_path.display(), "cleared log");
        Ok(())
    }

    /// Archive content followed by current content, oldest first.
    ///
    /// Best effort: a missing or unreadable file contributes nothing.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn gather(&self) -> String {
        let _writer = self.writer.lock();
        let mut text = read_lossy(&self.archive_path);
        text.push_str(&read_lossy(&self.current_path));
        text
    }

    /// Write [`gather`](Self::gather) into a fresh temp file and return its path.
    ///
    /// The caller owns the returned file and is responsible for deleting it.
    pub fn export_copy(&self) -> Result<PathBuf, LogStoreError> {
        let path = self.temp_paths.new_path(EXPORT_PREFIX);
        let text = self.gather();

        if let Err(source) = write_atomic(&path, text.as_bytes()) {
            warn!(
                path = %path.display(),
                error = %source,
                "failed to export log copy",
            );
            return Err(LogStoreError::ExportFailed { path, source });
        }

        debug!(path = %path.display(), bytes = text.len(), "exported log copy");
        Ok(path)
    }

    fn format_record(&self, line: &str) -> String {
        let mut record = String::with_capacity(line.len() + 32);
        if self.include_timestamp() {
            record.push_str(&self.timestamps.now());
            record.push(' ');
        }
        record.push_str(line);
        if !line.ends_with('\n') {
            record.push('\n');
        }
        record
    }

    /// Return the open handle, re-running initialization if a previous
    /// rotation left the writer closed.
    fn ensure_open<'a>(&self, state: &'a mut WriterState) -> Result<&'a mut File, LogStoreError> {
        if let WriterState::Rotating = state {
            debug!(path = %self.current_path.display(), "reopening current log");
            *state = WriterState::Open(open_current(&self.current_path)?);
        }
        match state {
            WriterState::Open(file) => Ok(file),
            WriterState::Rotating => Err(LogStoreError::StorageUnavailable {
                path: self.current_path.clone(),
                source: io::Error::other("log writer is not open"),
            }),
        }
    }

    /// Swap current into the archive slot once it reaches the threshold.
    ///
    /// A failed delete or rename is logged and skipped; the oversized
    /// current file stays in place and the swap is retried on the next
    /// write. Only a failure to reopen current is an error.
    fn rotate_if_needed(&self, state: &mut WriterState) -> Result<(), LogStoreError> {
        let size = self.current_len()?;
        let max_size = self.max_size();
        if size < max_size {
            return Ok(());
        }

        // Close the handle before the file moves
        *state = WriterState::Rotating;

        match self.archive_current() {
            Ok(()) => debug!(
                path = %self.current_path.display(),
                archive = %self.archive_path.display(),
                size,
                max_size,
                "rotated log",
            ),
            Err(e) => warn!(
                path = %self.current_path.display(),
                archive = %self.archive_path.display(),
                error = %e,
                "log rotation failed, keeping current file",
            ),
        }

        *state = WriterState::Open(open_current(&self.current_path)?);
        Ok(())
    }

    fn archive_current(&self) -> io::Result<()> {
        remove_if_exists(&self.archive_path)?;
        fs::rename(&self.current_path, &self.archive_path)
    }
}

impl<T, G> fmt::Debug for LogStore<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStore")
            .field("current_path", &self.current_path)
            .field("archive_path", &self.archive_path)
            .field("max_size", &self.max_size.load(Ordering::SeqCst))
            .field(
                "include_timestamp",
                &self.include_timestamp.load(Ordering::SeqCst),
            )
            .finish_non_exhaustive()
    }
}

/// Open (creating if needed) the current file for appending.
fn open_current(path: &Path) -> Result<File, LogStoreError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(unavailable(path))
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn read_lossy(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                debug!(
                    path = %path.display(),
                    error = %e,
                    "unreadable log file, treating as empty",
                );
            }
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
