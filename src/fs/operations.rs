use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Copy `src` into `target_dir` under its original filename.
///
/// An existing playlist file of the same name is overwritten.
pub fn copy_into(src: &Path, target_dir: &Path) -> Result<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| AppError::InvalidPath(format!("{} has no filename", src.display())))?;
    let dest = target_dir.join(name);
    fs::copy(src, &dest)?;
    Ok(dest)
}

/// Create the playlist directory and any missing parents.
pub fn create_target_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Component-wise containment: true when `boundary` is `path` itself or one
/// of its ancestors. String prefixes do not count (`/a/bc` is not inside
/// `/a/b`). Both sides must already be in canonical form.
pub fn is_within(path: &Path, boundary: &Path) -> bool {
    path.starts_with(boundary)
}

/// Launch the default application for `path`, detached.
///
/// Spawn failures are not surfaced and the exit status is never observed;
/// the browser never blocks on the viewer.
pub fn open_detached(path: &Path) {
    let _ = open::that_detached(path);
}
