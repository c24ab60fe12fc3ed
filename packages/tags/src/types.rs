// ABOUTME: Tag type definitions
// ABOUTME: Structures for tags attached to owning entities

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag attached to one owning entity.
///
/// `slug` is globally unique across all tags and immutable once assigned.
/// `owner_type` and `owner_id` only identify an entity together; neither
/// field is meaningful on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub owner_type: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
    pub owner_type: String,
    pub owner_id: String,
    /// Caller-supplied slug. When absent the store derives one from the
    /// name plus a random suffix.
    pub slug: Option<String>,
}
