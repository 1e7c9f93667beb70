//! Errors raised by filestamp and helpers for rendering them.

use std::error::Error;

mod fs;
pub use fs::{ErrorKind, FsPathError};

/// Returns the messages of `error` and its sources, skipping any message already contained in the
/// one before it.
///
/// [`FsPathError`] embeds its io source in its own message, so without this the io error would be
/// printed twice.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut messages = eyre::Chain::new(error)
        .map(|cause| cause.to_string().trim().to_string())
        .collect::<Vec<_>>();
    messages.dedup_by(|next, prev| prev.contains(next.as_str()));
    messages
}

/// Returns the first [`FsPathError`] in the source chain of `error`.
pub fn find_fs_error<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a FsPathError> {
    eyre::Chain::new(error).find_map(|cause| cause.downcast_ref::<FsPathError>())
}
