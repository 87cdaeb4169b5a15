use std::collections::{BTreeMap, BTreeSet};
use tagguard_types::{ResourceType, Verdict};

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,

    /// Tag keys that must all be present, in reporting order.
    pub required_tags: Vec<String>,

    /// Resource types that never carry tags or have them managed by an owning resource.
    pub exempt_resource_types: BTreeSet<ResourceType>,

    /// Glob patterns over resource types the check registers for.
    pub supported_resources: Vec<String>,

    /// Verdict reported for exempt resource types: `Passed` or `Skipped`.
    pub exempt_verdict: Verdict,
}

impl CheckPolicy {
    pub fn enabled(required_tags: Vec<String>, exempt: BTreeSet<ResourceType>) -> Self {
        Self {
            enabled: true,
            required_tags,
            exempt_resource_types: exempt,
            supported_resources: vec!["AWS::*".to_string()],
            exempt_verdict: Verdict::Passed,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            required_tags: Vec::new(),
            exempt_resource_types: BTreeSet::new(),
            supported_resources: Vec::new(),
            exempt_verdict: Verdict::Passed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
