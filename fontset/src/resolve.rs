// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of partial family configurations.

use alloc::format;
use core::fmt;

use crate::config::{FamilyConfig, DEFAULT_BASE_PATH};
use crate::style::StyleKind;

/// Destination for the font files selected during resolution.
///
/// Implementations bind a font file to the style role it fulfills in
/// whatever rendering backend is in use; the resolver itself performs no
/// font I/O. A blanket implementation lets a plain closure serve as a
/// registry.
pub trait FontRegistry {
    /// Error produced when a font file cannot be registered.
    type Error;

    /// Registers the font file at `path` under the given style role.
    fn register(&mut self, style: StyleKind, path: &str) -> Result<(), Self::Error>;
}

impl<F, E> FontRegistry for F
where
    F: FnMut(StyleKind, &str) -> Result<(), E>,
{
    type Error = E;

    fn register(&mut self, style: StyleKind, path: &str) -> Result<(), E> {
        self(style, path)
    }
}

/// Resolves a possibly partial family configuration into a complete one.
///
/// The regular style is mandatory and is always registered first, under the
/// concatenation of the configured base path and its relative path. An empty
/// bold or italic entry inherits the regular file without a registration of
/// its own; a non-empty entry is registered under its role, in the fixed
/// order regular, bold, italic. Finally, an empty base path is back-filled
/// with [`DEFAULT_BASE_PATH`]; registrations already performed keep the base
/// path that was supplied.
///
/// The first registration failure aborts resolution and is returned
/// unchanged. Registrations performed before the failure are not rolled
/// back.
///
/// # Example
/// ```
/// use fontset::{resolve, FamilyConfig, StyleKind};
///
/// let config = FamilyConfig {
///     regular: "Rubik.ttf".into(),
///     bold: "RubikBold.ttf".into(),
///     base_path: "fonts/".into(),
///     ..FamilyConfig::empty()
/// };
///
/// // A real registry would load the file into a font backend here.
/// let resolved =
///     resolve(config, &mut |_style: StyleKind, _path: &str| Ok::<(), &str>(())).unwrap();
///
/// assert_eq!(resolved.bold, "RubikBold.ttf");
/// assert_eq!(resolved.italic, "Rubik.ttf");
/// ```
pub fn resolve<R: FontRegistry>(
    mut config: FamilyConfig,
    registry: &mut R,
) -> Result<FamilyConfig, R::Error> {
    registry.register(StyleKind::Regular, &config.full_path(StyleKind::Regular))?;
    if config.bold.is_empty() {
        config.bold = config.regular.clone();
    } else {
        registry.register(StyleKind::Bold, &config.full_path(StyleKind::Bold))?;
    }
    if config.italic.is_empty() {
        config.italic = config.regular.clone();
    } else {
        registry.register(StyleKind::Italic, &config.full_path(StyleKind::Italic))?;
    }
    if config.base_path.is_empty() {
        config.base_path = DEFAULT_BASE_PATH.into();
    }
    Ok(config)
}

/// Resolves `config`, reporting a failure to `report` instead of returning
/// it.
///
/// On success the resolved configuration is returned and `report` is not
/// invoked. On failure `report` receives a single message consisting of a
/// fixed prefix followed by the registration error, and `None` is returned.
pub fn resolve_reported<R>(
    config: FamilyConfig,
    registry: &mut R,
    report: impl FnOnce(&str),
) -> Option<FamilyConfig>
where
    R: FontRegistry,
    R::Error: fmt::Display,
{
    match resolve(config, registry) {
        Ok(resolved) => Some(resolved),
        Err(err) => {
            report(&format!("Error loading fonts: {err}"));
            None
        }
    }
}
