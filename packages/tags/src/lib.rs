// ABOUTME: Generic tagging system for Cookbook
// ABOUTME: Polymorphic owner references and unique slug assignment for tags

pub mod error;
pub mod owners;
pub mod storage;
pub mod types;

// Re-export main types
pub use error::{TagError, TagResult};
pub use owners::{OwnerDirectory, OwnerRef};
pub use storage::{SuffixSource, TagStorage};
pub use types::{Tag, TagCreateInput};
