use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// Various error variants for `fs` operations that serve as an addition to the io::Error which
/// does not provide any information about the path.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    /// Provides additional path context for [`std::fs::metadata`].
    #[error("failed to read modification time of {path:?}: {source}")]
    Metadata { source: io::Error, path: PathBuf },
    /// Provides additional path context for [`filetime::set_file_mtime`].
    #[error("failed to set modification time of {path:?}: {source}")]
    SetModified { source: io::Error, path: PathBuf },
    /// Provides additional path context for [`std::fs::File::create_new`].
    #[error("failed to create file {path:?}: {source}")]
    CreateFile { source: io::Error, path: PathBuf },
    /// The modification time can't be moved by the requested amount.
    #[error("modification time of {path:?} would be out of range")]
    OutOfRange { path: PathBuf },
}

/// Coarse classification of an [`FsPathError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No file exists at the path.
    NotFound,
    /// The operating environment denied the metadata or creation operation.
    PermissionDenied,
    /// The path is malformed for the host filesystem.
    InvalidPath,
    /// Anything else.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::InvalidPath => "invalid path",
            Self::Other => "other",
        })
    }
}

impl FsPathError {
    /// Returns the complementary error variant for [`std::fs::metadata`].
    pub fn metadata(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Metadata { source, path: path.into() }
    }

    /// Returns the complementary error variant for [`filetime::set_file_mtime`].
    pub fn set_modified(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::SetModified { source, path: path.into() }
    }

    /// Returns the complementary error variant for [`std::fs::File::create_new`].
    pub fn create_file(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::CreateFile { source, path: path.into() }
    }

    /// Returns the error for an unrepresentable modification time.
    pub fn out_of_range(path: impl Into<PathBuf>) -> Self {
        Self::OutOfRange { path: path.into() }
    }

    /// Returns the underlying io error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Metadata { source, .. }
            | Self::SetModified { source, .. }
            | Self::CreateFile { source, .. } => Some(source),
            Self::OutOfRange { .. } => None,
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        let Some(err) = self.io_error() else { return ErrorKind::Other };
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                ErrorKind::PermissionDenied
            }
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidFilename
            | io::ErrorKind::NotADirectory => ErrorKind::InvalidPath,
            _ => ErrorKind::Other,
        }
    }

    /// Returns `true` if no file exists at the path.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Returns `true` if the operation was denied.
    pub fn is_permission_denied(&self) -> bool {
        self.kind() == ErrorKind::PermissionDenied
    }

    /// Returns `true` if the path itself is malformed.
    pub fn is_invalid_path(&self) -> bool {
        self.kind() == ErrorKind::InvalidPath
    }
}

impl AsRef<Path> for FsPathError {
    fn as_ref(&self) -> &Path {
        match self {
            Self::Metadata { path, .. }
            | Self::SetModified { path, .. }
            | Self::CreateFile { path, .. }
            | Self::OutOfRange { path } => path,
        }
    }
}

impl From<FsPathError> for io::Error {
    fn from(value: FsPathError) -> Self {
        match value {
            FsPathError::Metadata { source, .. }
            | FsPathError::SetModified { source, .. }
            | FsPathError::CreateFile { source, .. } => source,
            FsPathError::OutOfRange { .. } => Self::new(io::ErrorKind::InvalidInput, value),
        }
    }
}
