//! Filesystem identity: do two paths name the same on-disk entity?
//!
//! String equality is not enough (symlinks, hard links, `./` segments). On
//! Unix the device and inode numbers decide; elsewhere the canonicalized
//! paths are compared.

use std::io;
use std::path::Path;

#[cfg(unix)]
pub fn same_entity(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let left = std::fs::metadata(a)?;
    let right = std::fs::metadata(b)?;
    Ok(left.dev() == right.dev() && left.ino() == right.ino())
}

#[cfg(not(unix))]
pub fn same_entity(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(std::fs::canonicalize(a)? == std::fs::canonicalize(b)?)
}
