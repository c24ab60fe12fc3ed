// ABOUTME: Core types and utilities for Cookbook
// ABOUTME: Foundational package providing shared functionality across all Cookbook packages

pub mod constants;
pub mod utils;
pub mod validation;

// Re-export constants
pub use constants::{cookbook_dir, database_file};

// Re-export utilities
pub use utils::{next_suffix, SLUG_SUFFIX_LEN};

// Re-export validation
pub use validation::{validate_tag_name, ValidationError, MAX_NAME_LEN};
