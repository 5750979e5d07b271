//! Filesystem utilities.
//!
//! All rewrites in the pipeline read a file to completion before any write
//! begins; `slurp`/`spit` are the only primitives the rewriting crates use.

use huddle_types::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read entire file as string (slurp).
pub fn slurp(path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(path).map_err(Into::into)
}

/// Write a string out as the entire file content.
pub fn spit(path: impl AsRef<Path>, content: &str) -> Result<()> {
    fs::write(path, content).map_err(Into::into)
}

/// Remove a directory tree if it exists, then recreate it empty.
pub fn recreate_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Recursively copy a directory tree into `dst`.
///
/// `dst` itself is created; files are copied byte-for-byte, relative
/// structure preserved. Symlinks are followed.
pub fn copy_tree(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            huddle_types::HuddleError::Bundle(format!(
                "Failed to walk {}: {}",
                src.display(),
                e
            ))
        })?;

        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| huddle_types::HuddleError::Bug(e.to_string()))?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
