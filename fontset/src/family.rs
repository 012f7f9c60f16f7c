// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers and handles for resolved font families.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::config::FamilyConfig;

/// Unique identifier for a resolved font family.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct FamilyId(u64);

impl FamilyId {
    /// Creates a new unique identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying integer value.
    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// Handle for a resolved family that includes both the canonical name and a
/// unique identifier.
#[derive(Clone, Debug)]
pub struct FamilyName {
    id: FamilyId,
    name: Arc<str>,
}

impl FamilyName {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: FamilyId::new(),
            name: name.into(),
        }
    }

    /// Returns the unique identifier for the family.
    pub fn id(&self) -> FamilyId {
        self.id
    }

    /// Returns the canonical name of the family.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&FamilyName> for FamilyId {
    fn from(value: &FamilyName) -> Self {
        value.id
    }
}

/// A resolved family: its handle together with the configuration produced by
/// resolution.
#[derive(Clone, Debug)]
pub struct FamilyInfo(Arc<FamilyInner>);

#[derive(Debug)]
struct FamilyInner {
    name: FamilyName,
    config: FamilyConfig,
}

impl FamilyInfo {
    pub(crate) fn new(name: FamilyName, config: FamilyConfig) -> Self {
        Self(Arc::new(FamilyInner { name, config }))
    }

    /// Returns the unique identifier for the family.
    pub fn id(&self) -> FamilyId {
        self.0.name.id()
    }

    /// Returns the canonical name of the family.
    pub fn name(&self) -> &str {
        self.0.name.name()
    }

    /// Returns the resolved configuration for the family.
    pub fn config(&self) -> &FamilyConfig {
        &self.0.config
    }
}

#[cfg(test)]
mod tests {
    use super::FamilyId;

    #[test]
    fn identifiers_are_unique() {
        let a = FamilyId::new();
        let b = FamilyId::new();
        assert_ne!(a, b);
        assert_ne!(a.to_u64(), b.to_u64());
    }
}
