//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, TagguardConfigV1};
pub use presets::{DEFAULT_EXEMPT_RESOURCE_TYPES, DEFAULT_REQUIRED_TAGS, DEFAULT_SUPPORTED_RESOURCES};
pub use resolve::{Overrides, ResolvedConfig};

/// Stable schema identifier accepted in the `schema` field.
pub const SCHEMA_CONFIG_V1: &str = "tagguard.config.v1";

/// Parse `tagguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TagguardConfigV1> {
    let cfg: TagguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the registry (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: TagguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Effective config with no file: the default profile and built-in lists.
pub fn default_config() -> ResolvedConfig {
    ResolvedConfig {
        effective: presets::preset(presets::DEFAULT_PROFILE),
    }
}

/// JSON Schema for `TagguardConfigV1`.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(TagguardConfigV1)
}
