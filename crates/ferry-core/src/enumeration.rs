use std::ffi::OsString;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{CopyError, CopyResult};
use crate::fs_info::{self, PathInfo};

// Single-level directory enumeration; the copy engine drives recursion and
// re-resolves each entry itself.

/// One directory entry paired with its link-aware [`PathInfo`].
#[derive(Debug)]
pub struct EnumeratedEntry {
    pub name: OsString,
    pub info: PathInfo,
}

/// Enumerate the direct children of `dir` in lexicographic name order.
///
/// The iterator is lazy and finite. A fresh call re-reads the directory, so
/// nothing is cached between walks, and the ordering is stable within a
/// process run. Per-entry read failures surface as `Err` items so the caller
/// can decide whether to abort or continue.
pub fn entries(dir: &Path) -> impl Iterator<Item = CopyResult<EnumeratedEntry>> + '_ {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(move |next| match next {
            Ok(entry) => Ok(EnumeratedEntry {
                name: entry.file_name().to_os_string(),
                info: fs_info::resolve(entry.path()),
            }),
            Err(err) => Err(enumeration_error(dir, err)),
        })
}

fn enumeration_error(dir: &Path, err: walkdir::Error) -> CopyError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    match err.into_io_error() {
        Some(io_err) => CopyError::from_io("scandir", path, io_err),
        None => CopyError::not_found("scandir", path),
    }
}
