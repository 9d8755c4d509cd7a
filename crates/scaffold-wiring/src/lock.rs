//! Advisory lock on the target file
//!
//! Augmentations of the same file serialize on an OS advisory lock taken on
//! a sidecar `<file>.lock`. The kernel drops the lock with the holding
//! process, so a sidecar left behind by a crashed or aborted run never
//! blocks the next one. The sidecar itself stays on disk: removing it would
//! let a waiter holding the old inode and a new creator lock at once.

use crate::error::{WiringError, WiringResult};
use std::fs::{File, OpenOptions, TryLockError};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between acquisition attempts
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Held lock on one path
#[derive(Debug)]
pub struct PathLock {
    path: PathBuf,
    file: File,
}

impl PathLock {
    /// Lock `target`, waiting at most `timeout`
    ///
    /// # Errors
    /// - `WiringError::LockTimeout` if another holder keeps the lock
    /// - `WiringError::Io` if the lock file cannot be opened or locked
    pub fn acquire(target: &Path, timeout: Duration) -> WiringResult<Self> {
        let path = lock_path(target);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| WiringError::io(&path, e))?;
        let started = Instant::now();

        loop {
            match file.try_lock() {
                Ok(()) => {
                    tracing::debug!(lock = %path.display(), "acquired lock");
                    return Ok(Self { path, file });
                }
                Err(TryLockError::WouldBlock) => {
                    let waited = started.elapsed();
                    if waited >= timeout {
                        return Err(WiringError::LockTimeout { path, waited });
                    }
                    thread::sleep(POLL_INTERVAL.min(timeout - waited));
                }
                Err(TryLockError::Error(e)) => return Err(WiringError::io(path, e)),
            }
        }
    }

    /// Lock file location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PathLock {
    fn drop(&mut self) {
        // closing the handle releases the lock too
        if let Err(e) = self.file.unlock() {
            tracing::warn!(lock = %self.path.display(), error = %e, "failed to release lock");
        } else {
            tracing::debug!(lock = %self.path.display(), "released lock");
        }
    }
}

fn lock_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".lock");
    target.with_file_name(name)
}
