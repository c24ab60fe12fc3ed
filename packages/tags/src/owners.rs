// ABOUTME: Polymorphic owner references for tags
// ABOUTME: OwnerRef pair and the caller-side discriminator lookup table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{TagError, TagResult};

/// A resolved polymorphic reference: the discriminator naming the owning
/// entity kind plus the identifier meaningful for that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    pub owner_type: String,
    pub owner_id: String,
}

impl OwnerRef {
    pub fn new(owner_type: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            owner_type: owner_type.into(),
            owner_id: owner_id.into(),
        }
    }
}

/// Caller-supplied table mapping a discriminator to whatever collaborator
/// looks up entities of that kind. The tag store never fetches the owning
/// entity itself; callers resolve an [`OwnerRef`] through this table.
pub struct OwnerDirectory<H> {
    entries: HashMap<String, H>,
}

impl<H> OwnerDirectory<H> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, owner_type: impl Into<String>, handle: H) {
        self.entries.insert(owner_type.into(), handle);
    }

    pub fn get(&self, owner_type: &str) -> Option<&H> {
        self.entries.get(owner_type)
    }

    /// Resolve an owner reference to its lookup collaborator and owner id.
    pub fn resolve<'a>(&'a self, owner: &'a OwnerRef) -> TagResult<(&'a H, &'a str)> {
        let handle = self
            .entries
            .get(&owner.owner_type)
            .ok_or_else(|| TagError::UnknownOwnerType(owner.owner_type.clone()))?;
        Ok((handle, owner.owner_id.as_str()))
    }
}

impl<H> Default for OwnerDirectory<H> {
    fn default() -> Self {
        Self::new()
    }
}
