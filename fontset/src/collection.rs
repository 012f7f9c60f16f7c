// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support for working with collections of resolved families.

use alloc::sync::Arc;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::config::FamilyConfig;
use crate::family::{FamilyId, FamilyInfo, FamilyName};
use crate::name::extract_name;
use crate::resolve::{resolve, FontRegistry};

/// Collection of resolved font families, indexed by canonical name.
///
/// Each added family is resolved with [`resolve`] and stored under the
/// canonical name derived from its regular file with
/// [`extract_name`]. Name lookup is case-insensitive.
#[derive(Clone, Default, Debug)]
pub struct FamilyCollection {
    name_map: HashMap<Arc<[u8]>, FamilyName>,
    families: HashMap<FamilyId, FamilyInfo>,
}

impl FamilyCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `config` and stores the result under the canonical name
    /// derived from its regular file.
    ///
    /// Missing styles inherit the regular file and an empty base path is
    /// back-filled, as described in [`resolve`]. On a registration failure
    /// the error is returned and the collection is left unchanged. Re-adding
    /// a family whose canonical name is already present keeps the existing
    /// identifier and replaces the stored configuration.
    pub fn add_family<R: FontRegistry>(
        &mut self,
        config: FamilyConfig,
        registry: &mut R,
    ) -> Result<FamilyName, R::Error> {
        let resolved = resolve(config, registry)?;
        let name = extract_name(&resolved.regular);
        let key = NameKey::from_str(&name);
        let handle = if let Some(existing) = self.name_map.get(key.as_bytes()) {
            existing.clone()
        } else {
            let handle = FamilyName::new(&name);
            self.name_map.insert(key.as_bytes().into(), handle.clone());
            handle
        };
        self.families
            .insert(handle.id(), FamilyInfo::new(handle.clone(), resolved));
        Ok(handle)
    }

    /// Resolves and stores the conventional default family.
    pub fn add_default_family<R: FontRegistry>(
        &mut self,
        registry: &mut R,
    ) -> Result<FamilyName, R::Error> {
        self.add_family(FamilyConfig::default(), registry)
    }

    /// Returns the family stored under the given name.
    ///
    /// Lookup is case-insensitive.
    pub fn family(&self, name: &str) -> Option<&FamilyInfo> {
        let key = NameKey::from_str(name);
        let id = self.name_map.get(key.as_bytes())?.id();
        self.families.get(&id)
    }

    /// Returns the family with the given identifier.
    pub fn family_by_id(&self, id: FamilyId) -> Option<&FamilyInfo> {
        self.families.get(&id)
    }

    /// Returns an iterator over the canonical names of all stored families.
    pub fn family_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.name_map.values().map(FamilyName::name)
    }

    /// Returns the number of stored families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if the collection holds no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Key for case-insensitive lookup of family names.
#[derive(Default)]
struct NameKey {
    data: SmallVec<[u8; 64]>,
}

impl NameKey {
    fn from_str(s: &str) -> Self {
        let mut key = Self::default();
        let mut buf = [0_u8; 4];
        for ch in s.chars() {
            for ch in ch.to_lowercase() {
                key.data
                    .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        key
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
