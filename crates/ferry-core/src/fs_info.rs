//! Link-aware path inspection.

use std::fs;
use std::path::{Path, PathBuf};

/// What a path refers to, determined without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Symlink,
    Missing,
}

/// Snapshot of a single path. Derived on demand and never cached across
/// calls: filesystem state may change between operations, so every decision
/// re-resolves.
#[derive(Debug, Clone)]
pub struct PathInfo {
    pub absolute: PathBuf,
    pub kind: PathKind,
}

impl PathInfo {
    pub fn exists(&self) -> bool {
        self.kind != PathKind::Missing
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Directory
    }
}

/// Inspect `path` without following symlinks, so a link is reported as
/// `Symlink` rather than as its target's type. Never fails: unreadable or
/// empty paths report `Missing`. Special files (FIFOs, sockets) fall under
/// `File`; the copy engine surfaces whatever the byte copy then does.
pub fn resolve(path: &Path) -> PathInfo {
    if path.as_os_str().is_empty() {
        return PathInfo {
            absolute: PathBuf::new(),
            kind: PathKind::Missing,
        };
    }
    let kind = match fs::symlink_metadata(path) {
        Ok(meta) => {
            let file_type = meta.file_type();
            if file_type.is_symlink() {
                PathKind::Symlink
            } else if file_type.is_dir() {
                PathKind::Directory
            } else {
                PathKind::File
            }
        }
        Err(_) => PathKind::Missing,
    };
    PathInfo {
        absolute: absolutize(path),
        kind,
    }
}

#[cfg(not(windows))]
fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(windows)]
fn absolutize(path: &Path) -> PathBuf {
    use normpath::PathExt;

    // Virtual normalization handles drive-relative and verbatim forms
    // without requiring the path to exist yet.
    match path.normalize_virtually() {
        Ok(normalized) => normalized.into_path_buf(),
        Err(_) => std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
    }
}
