// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family configuration resolution and naming.
//!
//! This crate turns a possibly partial description of a font family (file
//! references for the regular, bold and italic styles plus a base directory)
//! into a complete configuration. Each explicitly supplied file is registered
//! with a caller-provided [`FontRegistry`], styles that were left out inherit
//! the regular file, and an empty base directory is back-filled with
//! [`DEFAULT_BASE_PATH`]. The crate also derives canonical logical names from
//! font file paths ([`extract_name`]) and can keep a set of resolved families
//! indexed by those names ([`FamilyCollection`]).
//!
//! Font files are never opened or parsed; only file names and paths are
//! examined. Everything that touches an actual font backend sits behind the
//! [`FontRegistry`] seam, which a plain closure can satisfy.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use fontset::{resolve, FamilyConfig, StyleKind};
//!
//! let config = FamilyConfig {
//!     regular: "Rubik.ttf".into(),
//!     base_path: "assets/".into(),
//!     ..FamilyConfig::empty()
//! };
//!
//! let mut registered = Vec::new();
//! let resolved = resolve(config, &mut |style: StyleKind, path: &str| {
//!     registered.push((style, path.to_owned()));
//!     Ok::<(), &str>(())
//! })
//! .unwrap();
//!
//! // Only the regular file was supplied, so it is the only registration
//! // and the remaining styles inherit it.
//! assert_eq!(registered, [(StyleKind::Regular, "assets/Rubik.ttf".to_owned())]);
//! assert_eq!(resolved.bold, "Rubik.ttf");
//! assert_eq!(resolved.italic, "Rubik.ttf");
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod collection;
mod config;
mod family;
mod name;
mod resolve;
mod style;

pub use collection::FamilyCollection;
pub use config::{FamilyConfig, DEFAULT_BASE_PATH};
pub use family::{FamilyId, FamilyInfo, FamilyName};
pub use name::extract_name;
pub use resolve::{resolve, resolve_reported, FontRegistry};
pub use style::StyleKind;
