// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family configuration.

use alloc::string::String;

use crate::style::StyleKind;

/// Default base directory for font files.
pub const DEFAULT_BASE_PATH: &str = "fonts/";

/// File references for the styles of a font family.
///
/// `regular`, `bold` and `italic` are file paths relative to `base_path`.
/// A configuration may be partial: empty `bold` or `italic` entries are
/// filled from `regular` during [resolution](crate::resolve), and an empty
/// `base_path` is back-filled with [`DEFAULT_BASE_PATH`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FamilyConfig {
    /// Relative path of the regular style file, e.g. `"regular.ttf"`.
    ///
    /// This entry is mandatory for resolution.
    pub regular: String,
    /// Relative path of the bold style file.
    pub bold: String,
    /// Relative path of the italic style file.
    pub italic: String,
    /// Base directory prepended to each relative path.
    ///
    /// A trailing separator is not inserted automatically.
    pub base_path: String,
}

impl FamilyConfig {
    /// Creates a configuration with all entries empty.
    ///
    /// This is the usual starting point for partial configurations:
    ///
    /// ```
    /// # use fontset::FamilyConfig;
    /// let config = FamilyConfig {
    ///     regular: "Rubik.ttf".into(),
    ///     ..FamilyConfig::empty()
    /// };
    /// assert!(config.bold.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self {
            regular: String::new(),
            bold: String::new(),
            italic: String::new(),
            base_path: String::new(),
        }
    }

    /// Returns the relative path stored for the given style role.
    pub fn style_path(&self, style: StyleKind) -> &str {
        match style {
            StyleKind::Regular => &self.regular,
            StyleKind::Bold => &self.bold,
            StyleKind::Italic => &self.italic,
        }
    }

    /// Returns the fully qualified path for the given style role.
    ///
    /// This is the plain concatenation of `base_path` and the relative path.
    /// No separator is inserted between the two, so `base_path` should end
    /// with one if a separator is desired.
    ///
    /// # Example
    /// ```
    /// # use fontset::{FamilyConfig, StyleKind};
    /// let config = FamilyConfig::default();
    /// assert_eq!(config.full_path(StyleKind::Bold), "fonts/bold.ttf");
    /// ```
    pub fn full_path(&self, style: StyleKind) -> String {
        let relative = self.style_path(style);
        let mut path = String::with_capacity(self.base_path.len() + relative.len());
        path.push_str(&self.base_path);
        path.push_str(relative);
        path
    }
}

/// The conventional default family: `regular.ttf`, `bold.ttf` and
/// `italic.ttf` under [`DEFAULT_BASE_PATH`].
impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            regular: "regular.ttf".into(),
            bold: "bold.ttf".into(),
            italic: "italic.ttf".into(),
            base_path: DEFAULT_BASE_PATH.into(),
        }
    }
}
