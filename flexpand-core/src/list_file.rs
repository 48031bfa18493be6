//! list_file.rs - Parsing of newline-delimited list-files.
//!
//! A line whose very first character is `#` is dropped. On every other line,
//! text from the first space+`#` onward is an inline comment. A `#` glued to
//! non-space text (`/a/#weird.txt`) is part of the address.
//!
//! License: MIT

use log::debug;
use std::path::Path;

use crate::errors::FlexpandError;

/// Marker that opens an inline comment. The leading space is required.
pub const INLINE_COMMENT: &str = " #";

/// Returns `true` when `path` carries the list-file extension `ext`
/// (compared without the leading dot, case-sensitively).
pub fn has_list_extension(path: &Path, ext: &str) -> bool {
    path.to_string_lossy().ends_with(&format!(".{}", ext))
}

/// Splits list-file text into addresses, one per line, in file order.
///
/// Surviving blank lines become empty strings; callers decide what to do with
/// them (input resolution drops them through its existence check).
pub fn parse_addresses(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.starts_with('#'))
        .map(|line| {
            let address = match line.find(INLINE_COMMENT) {
                Some(idx) => &line[..idx],
                None => line,
            };
            address.trim().to_string()
        })
        .collect()
}

/// Reads and parses the list-file at `path`.
///
/// Failing to open or decode the file is fatal for the caller.
pub fn read_addresses(path: &Path) -> Result<Vec<String>, FlexpandError> {
    let content = std::fs::read_to_string(path).map_err(|source| FlexpandError::ListFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let addresses = parse_addresses(&content);
    debug!(
        "Read {} address line(s) from list-file {}",
        addresses.len(),
        path.display()
    );
    Ok(addresses)
}
