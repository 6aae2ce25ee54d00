pub mod copy;
pub mod enumeration;
pub mod errors;
pub mod fs_info;
pub mod logger;

pub use copy::{copy, copy_with_logger, CopyOutcome};
pub use errors::{CopyError, CopyResult, ErrorKind};

/// Overwrite policy for existing destination entries.
///
/// Collapsing the force / no-clobber flag pair into one enum makes the
/// invalid combination unrepresentable; no-clobber wins when both flags are
/// given. An interactive prompt mode is unsupported and maps to `Force`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace existing destination files (truncate and write). The default.
    Force,
    /// Leave existing destination files untouched and report them as skipped.
    NoClobber,
}

impl OverwritePolicy {
    /// Resolve the `-f`/`-n` flag pair; `-n` overrides `-f`, and force is
    /// the default with or without its flag.
    pub fn from_flags(_force: bool, no_clobber: bool) -> Self {
        if no_clobber {
            Self::NoClobber
        } else {
            Self::Force
        }
    }
}

/// Options for a single copy invocation. Parsed once at the call boundary;
/// the engine never re-inspects raw flags.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Recurse into directory sources.
    pub recursive: bool,
    /// What to do when a destination entry already exists.
    pub overwrite: OverwritePolicy,
    /// Mirror source access/modification times onto copied files.
    pub preserve_times: bool,
    /// Log and skip entries that fail during a tree walk instead of
    /// aborting the whole copy.
    pub continue_on_error: bool,
    /// Additional attempts per failed filesystem operation.
    pub retries: u32,
    /// Resolve and report without writing anything.
    pub dry_run: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            overwrite: OverwritePolicy::Force,
            preserve_times: false,
            continue_on_error: false,
            retries: 0,
            dry_run: false,
        }
    }
}
