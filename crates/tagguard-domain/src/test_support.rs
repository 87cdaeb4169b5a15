use crate::checks::RequireTags;
use crate::model::ConfigValue;
use crate::policy::{CheckPolicy, EffectiveConfig};
use serde_json::json;
use std::collections::BTreeMap;
use tagguard_types::{ResourceType, Verdict, ids};

pub const REQUIRED: &[&str] = &["Environment", "Project"];

pub const EXEMPT: &[&str] = &[
    "AWS::IAM::Role",
    "AWS::IAM::Policy",
    "AWS::Lambda::Permission",
    "AWS::S3::BucketPolicy",
    "AWS::CloudWatch::Alarm",
];

pub fn rt(s: &str) -> ResourceType {
    ResourceType::new(s)
}

pub fn policy(required: &[&str], exempt: &[&str]) -> CheckPolicy {
    CheckPolicy::enabled(
        required.iter().map(|s| s.to_string()).collect(),
        exempt.iter().map(|s| ResourceType::new(*s)).collect(),
    )
}

pub fn require_tags(required: &[&str], exempt: &[&str]) -> RequireTags {
    RequireTags::new(&policy(required, exempt))
}

pub fn default_rule() -> RequireTags {
    require_tags(REQUIRED, EXEMPT)
}

pub fn skipping_rule() -> RequireTags {
    let mut p = policy(REQUIRED, EXEMPT);
    p.exempt_verdict = Verdict::Skipped;
    RequireTags::new(&p)
}

pub fn config_with_tags_check(required: &[&str], exempt: &[&str]) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(
        ids::CHECK_AWS_CUSTOM_TAGS.to_string(),
        policy(required, exempt),
    );
    EffectiveConfig {
        profile: "test".to_string(),
        checks,
    }
}

/// A resource whose `Properties.Tags` holds one `{Key, Value}` entry per pair.
pub fn tagged(pairs: &[(&str, &str)]) -> ConfigValue {
    let tags: Vec<_> = pairs
        .iter()
        .map(|(k, v)| json!({ "Key": k, "Value": v }))
        .collect();
    ConfigValue::from(json!({ "Properties": { "Tags": tags } }))
}
