//! Pure tagging policy evaluation (no IO).
//!
//! Input: one resource type and its parsed property tree, supplied by a host engine.
//! Output: a verdict per applicable check.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod policy;

mod registry;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::{Check, CheckMeta, RequireTags, TagOutcome};
pub use model::ConfigValue;
pub use registry::{CheckFactory, CheckRegistry, CheckResult};
