use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::errors::CopyError;

/// What a completed copy call did.
///
/// `copied` holds `(source, target)` pairs in walk order. `skipped` holds
/// targets deliberately left untouched (no-clobber policy or a dry run).
/// `errors` holds rendered per-entry failures recorded when the caller opted
/// to continue past them; otherwise the first failure aborts the call and
/// nothing is recorded here.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CopyOutcome {
    pub copied: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<PathBuf>,
    pub errors: Vec<String>,
}

impl CopyOutcome {
    /// True when every entry either copied or was deliberately skipped.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn add_copied(&mut self, src: &Path, dst: &Path) {
        self.copied.push((src.to_path_buf(), dst.to_path_buf()));
    }

    pub(crate) fn add_skipped(&mut self, dst: &Path) {
        self.skipped.push(dst.to_path_buf());
    }

    pub(crate) fn add_error(&mut self, err: &CopyError) {
        self.errors.push(err.to_string());
    }
}
