// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical logical names derived from font file paths.

use alloc::string::String;
use smallvec::SmallVec;

/// Derives a canonical logical name from a font file path.
///
/// Directory components are discarded, a trailing file extension is dropped,
/// and any remaining interior dots are removed, so
/// `"fonts/Open.Sans.Bold.ttf"` becomes `"OpenSansBold"`. Both `/` and `\`
/// are treated as directory separators. An empty path yields an empty name,
/// as does a path whose final segment is empty.
///
/// # Example
/// ```
/// # use fontset::extract_name;
/// assert_eq!(extract_name("assets/fonts/RubikBold.ttf"), "RubikBold");
/// assert_eq!(extract_name("fonts\\ComicSans"), "ComicSans");
/// ```
pub fn extract_name(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let parts: SmallVec<[&str; 4]> = file_name.split('.').collect();
    let stem = match parts.split_last() {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => &parts[..],
    };
    stem.concat()
}
