//! Copy engine: source/destination resolution, overwrite policy, and the
//! recursive tree walk.
//!
//! Dispatch follows `cp`: a file (or symlink) source resolves its target
//! against the destination's type, a directory source requires the recursive
//! option and nests one level inside the destination root. The walk is
//! depth-first in lexicographic entry order; the first failure aborts the
//! remaining work unless the caller opted to continue past per-entry errors.
//! Nothing is rolled back on failure.

mod file_copy;
mod outcome;

pub use outcome::CopyOutcome;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::enumeration::{self, EnumeratedEntry};
use crate::errors::{CopyError, CopyResult};
use crate::fs_info::{self, PathInfo, PathKind};
use crate::logger::{Logger, NoopLogger};
use crate::{CopyOptions, OverwritePolicy};

/// Copy `source` to `destination` per `options`.
///
/// See [`CopyOutcome`] for what a successful call reports; failures carry an
/// errno-style message prefix (`"ENOENT: ..."`) for pattern-matching callers.
pub fn copy<P, Q>(source: P, destination: Q, options: &CopyOptions) -> CopyResult<CopyOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    copy_with_logger(source.as_ref(), destination.as_ref(), options, &NoopLogger)
}

/// [`copy`] with per-entry progress callbacks.
pub fn copy_with_logger(
    source: &Path,
    destination: &Path,
    options: &CopyOptions,
    logger: &dyn Logger,
) -> CopyResult<CopyOutcome> {
    // An empty path is nonexistent, not "the current directory"; reject both
    // ends before touching the filesystem.
    if source.as_os_str().is_empty() {
        return Err(CopyError::not_found("stat", source));
    }
    if destination.as_os_str().is_empty() {
        return Err(CopyError::not_found("stat", destination));
    }

    let src_info = fs_info::resolve(source);
    match src_info.kind {
        PathKind::Missing => Err(CopyError::not_found("stat", source)),
        PathKind::Directory => {
            if !options.recursive {
                return Err(CopyError::is_directory("cp", source));
            }
            copy_tree(source, destination, &src_info, options, logger)
        }
        // An individual symlink is recreated as a link even when it points at
        // a directory; only real directories need the recursive flag.
        PathKind::File | PathKind::Symlink => {
            copy_single(source, destination, src_info.kind, options, logger)
        }
    }
}

fn copy_single(
    source: &Path,
    destination: &Path,
    kind: PathKind,
    options: &CopyOptions,
    logger: &dyn Logger,
) -> CopyResult<CopyOutcome> {
    let target = resolve_target(source, destination)?;
    // Under force policy a self-copy would truncate the source before
    // reading it back; no-clobber skips it anyway.
    if options.overwrite == OverwritePolicy::Force
        && fs_info::resolve(&target).absolute == fs_info::resolve(source).absolute
    {
        return Err(CopyError::invalid(
            "cp",
            "source and destination are the same file",
            source,
        )
        .with_dest(&target));
    }

    let mut outcome = CopyOutcome::default();
    copy_entry(source, &target, kind, options, logger, &mut outcome)?;
    Ok(outcome)
}

/// `cp` target resolution for a non-directory source: an existing directory
/// destination receives `destination/basename(source)`; otherwise the
/// destination is taken as given and its parent must already exist.
///
/// Only the destination side follows symlinks here (a link to a directory is
/// a directory target); source links stay link-aware throughout.
fn resolve_target(source: &Path, destination: &Path) -> CopyResult<PathBuf> {
    let dst_info = fs_info::resolve(destination);
    if dst_info.is_dir() || (dst_info.kind == PathKind::Symlink && destination.is_dir()) {
        let Some(name) = source.file_name() else {
            return Err(CopyError::not_found("stat", source));
        };
        return Ok(destination.join(name));
    }
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() && !fs_info::resolve(parent).exists() {
            return Err(CopyError::not_found("stat", parent));
        }
    }
    Ok(destination.to_path_buf())
}

/// Copy one file or symlink to an exact target path, honoring the overwrite
/// policy, dry-run mode, and the retry budget.
fn copy_entry(
    source: &Path,
    target: &Path,
    kind: PathKind,
    options: &CopyOptions,
    logger: &dyn Logger,
    outcome: &mut CopyOutcome,
) -> CopyResult<()> {
    if fs_info::resolve(target).exists() && options.overwrite == OverwritePolicy::NoClobber {
        log::debug!("no-clobber: leaving {} untouched", target.display());
        logger.skipped(target);
        outcome.add_skipped(target);
        return Ok(());
    }

    if options.dry_run {
        logger.skipped(target);
        outcome.add_skipped(target);
        return Ok(());
    }

    logger.start(source, target);
    let copied = match kind {
        PathKind::Symlink => {
            with_retries(options.retries, || file_copy::copy_symlink(source, target))
                .map(|()| 0)
                .map_err(|err| CopyError::from_io("symlink", source, err).with_dest(target))
        }
        _ => with_retries(options.retries, || {
            file_copy::copy_file_contents(source, target)
        })
        .map_err(|err| CopyError::from_io("copyfile", source, err).with_dest(target)),
    };
    let bytes = match copied {
        Ok(bytes) => bytes,
        Err(err) => {
            logger.error("copy", source, &err.to_string());
            return Err(err);
        }
    };

    if options.preserve_times && kind == PathKind::File {
        with_retries(options.retries, || file_copy::preserve_times(source, target))
            .map_err(|err| CopyError::from_io("utimes", target, err))?;
    }

    logger.copy_done(source, target, bytes);
    outcome.add_copied(source, target);
    Ok(())
}

fn copy_tree(
    source: &Path,
    destination: &Path,
    src_info: &PathInfo,
    options: &CopyOptions,
    logger: &dyn Logger,
) -> CopyResult<CopyOutcome> {
    let target_root = tree_target_root(source, destination);

    // Recursing into our own output never terminates; reject it up front.
    if fs_info::resolve(&target_root)
        .absolute
        .starts_with(&src_info.absolute)
    {
        return Err(CopyError::invalid(
            "cp",
            "cannot copy a directory into itself",
            source,
        )
        .with_dest(&target_root));
    }

    if !options.dry_run {
        with_retries(options.retries, || fs::create_dir_all(&target_root))
            .map_err(|err| CopyError::from_io("mkdir", &target_root, err))?;
    }

    let mut outcome = CopyOutcome::default();
    copy_tree_level(source, &target_root, options, logger, &mut outcome)?;
    Ok(outcome)
}

/// "Nest one level": the source directory's own name is replicated inside the
/// destination, unless the destination itself already names it.
fn tree_target_root(source: &Path, destination: &Path) -> PathBuf {
    // Resolve first so "." and trailing-dot forms still yield a real name.
    let source_abs = fs_info::resolve(source).absolute;
    let Some(name) = source_abs.file_name() else {
        return destination.to_path_buf();
    };
    if destination.file_name() == Some(name) {
        destination.to_path_buf()
    } else {
        destination.join(name)
    }
}

fn copy_tree_level(
    src_dir: &Path,
    dst_dir: &Path,
    options: &CopyOptions,
    logger: &dyn Logger,
    outcome: &mut CopyOutcome,
) -> CopyResult<()> {
    for next in enumeration::entries(src_dir) {
        let result = next
            .and_then(|entry| copy_tree_entry(src_dir, dst_dir, &entry, options, logger, outcome));
        if let Err(err) = result {
            if options.continue_on_error {
                log::warn!("continuing past failed entry: {err}");
                outcome.add_error(&err);
                continue;
            }
            return Err(err);
        }
    }
    Ok(())
}

fn copy_tree_entry(
    src_dir: &Path,
    dst_dir: &Path,
    entry: &EnumeratedEntry,
    options: &CopyOptions,
    logger: &dyn Logger,
    outcome: &mut CopyOutcome,
) -> CopyResult<()> {
    let src_path = src_dir.join(&entry.name);
    let dst_path = dst_dir.join(&entry.name);
    match entry.info.kind {
        PathKind::Directory => {
            if !options.dry_run {
                with_retries(options.retries, || fs::create_dir_all(&dst_path))
                    .map_err(|err| CopyError::from_io("mkdir", &dst_path, err))?;
            }
            copy_tree_level(&src_path, &dst_path, options, logger, outcome)
        }
        PathKind::File | PathKind::Symlink => {
            copy_entry(&src_path, &dst_path, entry.info.kind, options, logger, outcome)
        }
        // The entry vanished between enumeration and the copy.
        PathKind::Missing => Err(CopyError::not_found("stat", &src_path)),
    }
}

/// Re-attempt `op` up to `retries` additional times. The attempt count alone
/// bounds the loop; every failure class is re-attempted.
fn with_retries<T>(retries: u32, mut op: impl FnMut() -> io::Result<T>) -> io::Result<T> {
    let mut attempt = 0u32;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < retries => {
                attempt += 1;
                log::debug!("retry {attempt}/{retries} after: {err}");
            }
            Err(err) => return Err(err),
        }
    }
}
