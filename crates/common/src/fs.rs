//! Reading and updating file modification times.
//!
//! Every function here talks to the filesystem directly: there is no caching and no locking, so
//! concurrent writers to the same path race and the last metadata write wins.

use crate::{errors::FsPathError, time};
use chrono::TimeDelta;
use filetime::FileTime;
use std::{fs::OpenOptions, io, path::Path, time::SystemTime};

type Result<T> = std::result::Result<T, FsPathError>;

/// Returns the instant the filesystem records as the last modification of `path`.
///
/// The resolution is whatever the platform provides.
pub fn modification_time(path: impl AsRef<Path>) -> Result<SystemTime> {
    let path = path.as_ref();
    check_path(path)
        .and_then(|()| std::fs::metadata(path))
        .and_then(|metadata| metadata.modified())
        .map_err(|err| FsPathError::metadata(err, path))
}

/// Sets the modification time of the existing file at `path` to `instant`.
///
/// `instant` may lie in the past or the future. The filesystem may truncate it to its own
/// resolution. Access time and content are left untouched, and nothing is created if `path` does
/// not exist.
pub fn set_modification_time(path: impl AsRef<Path>, instant: SystemTime) -> Result<()> {
    let path = path.as_ref();
    trace!(?path, ?instant, "setting modification time");
    check_path(path)
        .and_then(|()| filetime::set_file_mtime(path, FileTime::from_system_time(instant)))
        .map_err(|err| FsPathError::set_modified(err, path))
}

/// Creates an empty file at `path` if none exists, then sets its modification time to now.
///
/// Existing content is never truncated. If the file is created but the timestamp can't be
/// updated, the file is left in place and the error is returned.
///
/// The new time is written as an explicit instant, not as the kernel's "now". On unix that needs
/// ownership of the file, so a caller who may write to someone else's file but does not own it
/// gets [`ErrorKind::PermissionDenied`](crate::errors::ErrorKind::PermissionDenied) where
/// `touch(1)` would succeed.
pub fn touch(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    check_path(path).map_err(|err| FsPathError::create_file(err, path))?;

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => debug!(?path, "created empty file"),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
        Err(err) => return Err(FsPathError::create_file(err, path)),
    }

    filetime::set_file_mtime(path, FileTime::now())
        .map_err(|err| FsPathError::set_modified(err, path))
}

/// Moves the modification time of `path` by `delta` and returns the new instant.
///
/// A negative `delta` moves it into the past.
pub fn shift_modification_time(path: impl AsRef<Path>, delta: TimeDelta) -> Result<SystemTime> {
    let path = path.as_ref();
    let current = modification_time(path)?;
    let shifted = time::offset(current, delta).ok_or_else(|| FsPathError::out_of_range(path))?;
    set_modification_time(path, shifted)?;
    Ok(shifted)
}

/// Rejects paths that no filesystem accepts before they reach a syscall.
fn check_path(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty path"));
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "path contains a nul byte"));
    }
    Ok(())
}
