//! Single-entry copy primitives: file bytes, symlink recreation, timestamps.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use filetime::FileTime;

/// Fixed copy buffer. Build-tool workloads are dominated by small files and
/// the engine never copies concurrently, so one size fits.
const COPY_BUFFER_SIZE: usize = 128 * 1024;

/// Copy `src`'s bytes to `dst`, truncating any existing file at `dst`.
/// Returns the number of bytes written. Both handles are scoped to this
/// function and released on every exit path.
pub(crate) fn copy_file_contents(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, File::open(src)?);
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, File::create(dst)?);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}

/// Recreate the symlink at `src` as `dst`, carrying the identical link text
/// (absolute or relative, exactly as stored — never dereferenced). Symlink
/// creation fails on an existing path, so any file or link already at `dst`
/// is removed first; overwrite policy has been applied by the caller.
pub(crate) fn copy_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    let link_text = fs::read_link(src)?;
    if fs::symlink_metadata(dst).is_ok() {
        fs::remove_file(dst)?;
    }
    create_symlink(src, &link_text, dst)
}

#[cfg(unix)]
fn create_symlink(_src: &Path, link_text: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(link_text, dst)
}

#[cfg(windows)]
fn create_symlink(src: &Path, link_text: &Path, dst: &Path) -> io::Result<()> {
    use std::os::windows::fs::{symlink_dir, symlink_file};

    // Windows links are typed; take the flavor from what the source link
    // resolves to, falling back to a file link for dangling targets.
    let target_is_dir = fs::metadata(src).map(|meta| meta.is_dir()).unwrap_or(false);
    if target_is_dir {
        symlink_dir(link_text, dst)
    } else {
        symlink_file(link_text, dst)
    }
}

/// Mirror `src`'s access and modification times onto `dst`.
pub(crate) fn preserve_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dst, atime, mtime)
}
