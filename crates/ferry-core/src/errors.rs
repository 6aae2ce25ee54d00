//! Typed copy failures with errno-style message prefixes.
//!
//! The rendered message always begins with the platform error code
//! (`"ENOENT: no such file or directory, stat '/missing'"`). Callers pattern
//! match on that prefix, so it is part of the public contract; `ErrorKind`
//! carries the coarser taxonomy for programmatic matching.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure class of a copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source, or the destination's parent directory, does not exist.
    NotFound,
    /// The operation is not valid for the path's type (e.g. a directory
    /// source without the recursive flag).
    InvalidOperation,
    /// The OS denied access to a path.
    PermissionDenied,
    /// Any other wrapped I/O failure.
    Io,
}

/// A failed copy operation, annotated with the errno-style code and the
/// operation and path that produced it.
#[derive(Debug)]
pub struct CopyError {
    kind: ErrorKind,
    code: &'static str,
    detail: &'static str,
    op: &'static str,
    path: PathBuf,
    dest: Option<PathBuf>,
    source: Option<io::Error>,
}

impl CopyError {
    /// A path that should exist but does not.
    pub fn not_found(op: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            code: "ENOENT",
            detail: "no such file or directory",
            op,
            path: path.into(),
            dest: None,
            source: None,
        }
    }

    /// A directory source handed to a non-recursive copy.
    pub fn is_directory(op: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ErrorKind::InvalidOperation,
            code: "EISDIR",
            detail: "illegal operation on a directory",
            op,
            path: path.into(),
            dest: None,
            source: None,
        }
    }

    /// An operation rejected up front as structurally invalid, such as
    /// copying a directory into itself.
    pub fn invalid(op: &'static str, detail: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ErrorKind::InvalidOperation,
            code: "EINVAL",
            detail,
            op,
            path: path.into(),
            dest: None,
            source: None,
        }
    }

    /// Wrap an I/O failure, choosing the code prefix from its kind.
    pub fn from_io(op: &'static str, path: impl Into<PathBuf>, err: io::Error) -> Self {
        let (kind, code, detail) = match err.kind() {
            io::ErrorKind::NotFound => (ErrorKind::NotFound, "ENOENT", "no such file or directory"),
            io::ErrorKind::PermissionDenied => {
                (ErrorKind::PermissionDenied, "EACCES", "permission denied")
            }
            io::ErrorKind::IsADirectory => (
                ErrorKind::InvalidOperation,
                "EISDIR",
                "illegal operation on a directory",
            ),
            io::ErrorKind::NotADirectory => (ErrorKind::Io, "ENOTDIR", "not a directory"),
            io::ErrorKind::AlreadyExists => (ErrorKind::Io, "EEXIST", "file already exists"),
            io::ErrorKind::InvalidInput => (ErrorKind::Io, "EINVAL", "invalid argument"),
            _ => (ErrorKind::Io, "EIO", "i/o error"),
        };
        Self {
            kind,
            code,
            detail,
            op,
            path: path.into(),
            dest: None,
            source: Some(err),
        }
    }

    /// Attach the destination half of a two-path operation.
    pub fn with_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The errno-style code this error renders with, e.g. `"ENOENT"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The path the failing operation was applied to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {} '{}'",
            self.code,
            self.detail,
            self.op,
            self.path.display()
        )?;
        if let Some(dest) = &self.dest {
            write!(f, " -> '{}'", dest.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// Result type for copy operations.
pub type CopyResult<T> = std::result::Result<T, CopyError>;
