// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility types shared across tests.

use core::fmt;

use fontset::{FontRegistry, StyleKind};

/// Error returned by [`RecordingRegistry`] for a style it was told to
/// reject.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct RegistrationError {
    style: StyleKind,
    path: String,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no usable {} font file at {}", self.style, self.path)
    }
}

impl std::error::Error for RegistrationError {}

/// Registry test double that records every registration and can be told to
/// fail for a specific style.
#[derive(Default)]
pub(crate) struct RecordingRegistry {
    pub(crate) calls: Vec<(StyleKind, String)>,
    fail_on: Option<StyleKind>,
}

impl RecordingRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_on(style: StyleKind) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(style),
        }
    }

    /// The registered paths, in registration order.
    pub(crate) fn paths(&self) -> Vec<&str> {
        self.calls.iter().map(|(_, path)| path.as_str()).collect()
    }

    /// The registered style roles, in registration order.
    pub(crate) fn styles(&self) -> Vec<StyleKind> {
        self.calls.iter().map(|(style, _)| *style).collect()
    }
}

impl FontRegistry for RecordingRegistry {
    type Error = RegistrationError;

    fn register(&mut self, style: StyleKind, path: &str) -> Result<(), RegistrationError> {
        self.calls.push((style, path.to_owned()));
        if self.fail_on == Some(style) {
            return Err(RegistrationError {
                style,
                path: path.to_owned(),
            });
        }
        Ok(())
    }
}
