//! Filesystem safety checks for candidate filenames.
//!
//! Every candidate, whatever its source, goes through [`is_valid_filename`]
//! before it may become part of a path. Accepted names are then passed
//! through [`sanitize_filename`].

use std::path::MAIN_SEPARATOR;

const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn is_forbidden(c: char) -> bool {
    FORBIDDEN.contains(&c) || ('\u{0}'..='\u{1f}').contains(&c)
}

/// Returns `true` when `name` can be used as a single path component.
///
/// Rejects empty or blank names, names holding a path separator, any of
/// `< > : " / \ | ? *` or a control character in `0x00..=0x1F`, and the
/// relative components `.` and `..`.
pub fn is_valid_filename(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return false;
    }
    if name.contains(MAIN_SEPARATOR) {
        return false;
    }
    !name.chars().any(is_forbidden)
}

/// Trims `name` and replaces every forbidden character with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect()
}
