use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tagguard_types::ResourceType;

/// `tagguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TagguardConfigV1 {
    /// Optional schema string for tooling (`tagguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `compat` (default) or `explicit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Replaces the preset's required tag keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_tags: Option<Vec<String>>,

    /// Replaces the preset's exemption list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_resource_types: Option<Vec<ResourceType>>,

    /// Appended to the exemption list (preset or replaced).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_exempt_resource_types: Vec<ResourceType>,

    /// Glob patterns over resource types the check applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_resources: Option<Vec<String>>,

    /// Verdict for exempt resource types: `passed` or `skipped`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_verdict: Option<String>,
}
