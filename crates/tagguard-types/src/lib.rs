//! Stable DTOs and IDs used across the tagguard workspace.
//!
//! This crate is intentionally boring:
//! - stable string IDs for checks and outcome codes
//! - the verdict and category enums a host engine consumes
//! - the opaque resource type identifier

#![forbid(unsafe_code)]

pub mod ids;
pub mod resource;
pub mod verdict;

pub use resource::ResourceType;
pub use verdict::{CheckCategory, Verdict};
