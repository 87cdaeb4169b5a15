use crate::{SCHEMA_CONFIG_V1, model::TagguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use log::debug;
use std::collections::BTreeSet;
use tagguard_domain::policy::{CheckPolicy, EffectiveConfig};
use tagguard_types::{ResourceType, Verdict, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: TagguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile);
    debug!("resolving config with profile '{}'", effective.profile);

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        if !ids::all_check_ids().contains(&check_id.as_str()) {
            anyhow::bail!("unknown check id: {check_id}");
        }

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(tags) = cc.required_tags.as_deref() {
            entry.required_tags = parse_required_tags(tags)
                .with_context(|| format!("invalid required_tags for {check_id}"))?;
        }
        if let Some(types) = cc.exempt_resource_types.as_deref() {
            entry.exempt_resource_types = parse_resource_types(types)
                .with_context(|| format!("invalid exempt_resource_types for {check_id}"))?;
        }
        if !cc.extra_exempt_resource_types.is_empty() {
            let extra = parse_resource_types(&cc.extra_exempt_resource_types)
                .with_context(|| format!("invalid extra_exempt_resource_types for {check_id}"))?;
            entry.exempt_resource_types.extend(extra);
        }
        if let Some(patterns) = cc.supported_resources.as_deref() {
            validate_supported_resources(check_id, patterns)?;
            entry.supported_resources = patterns.to_vec();
        }
        if let Some(v) = cc.exempt_verdict.as_deref() {
            entry.exempt_verdict = parse_exempt_verdict(v)
                .with_context(|| format!("invalid exempt_verdict for {check_id}"))?;
        }

        debug!(
            "check {check_id}: enabled={} required_tags={:?} exempt={} exempt_verdict={}",
            entry.enabled,
            entry.required_tags,
            entry.exempt_resource_types.len(),
            entry.exempt_verdict
        );
    }

    Ok(ResolvedConfig { effective })
}

/// Rejects empty lists and blank keys; drops duplicates, keeping first occurrence.
fn parse_required_tags(tags: &[String]) -> anyhow::Result<Vec<String>> {
    if tags.is_empty() {
        anyhow::bail!("at least one required tag is needed");
    }

    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        if tag.trim().is_empty() {
            anyhow::bail!("tag keys must not be blank");
        }
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }
    Ok(out)
}

fn parse_resource_types(types: &[ResourceType]) -> anyhow::Result<BTreeSet<ResourceType>> {
    if types.iter().any(|t| t.as_str().trim().is_empty()) {
        anyhow::bail!("resource types must not be blank");
    }
    Ok(types.iter().cloned().collect())
}

fn validate_supported_resources(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    if patterns.is_empty() {
        anyhow::bail!("supported_resources for {check_id} must not be empty");
    }
    for pattern in patterns {
        Glob::new(pattern).with_context(|| {
            format!("invalid supported_resources glob for {check_id}: {pattern}")
        })?;
    }
    Ok(())
}

fn parse_exempt_verdict(v: &str) -> anyhow::Result<Verdict> {
    match v {
        "passed" | "pass" => Ok(Verdict::Passed),
        "skipped" | "skip" => Ok(Verdict::Skipped),
        other => anyhow::bail!("unknown exempt_verdict: {other} (expected passed|skipped)"),
    }
}
