use std::collections::BTreeMap;
use tagguard_domain::policy::{CheckPolicy, EffectiveConfig};
use tagguard_types::{ResourceType, Verdict, ids};

pub const DEFAULT_PROFILE: &str = "compat";

pub const DEFAULT_REQUIRED_TAGS: &[&str] = &["Environment", "Project"];

pub const DEFAULT_SUPPORTED_RESOURCES: &[&str] = &["AWS::*"];

/// Resource types with no native tagging, or whose tags are owned by a parent resource.
pub const DEFAULT_EXEMPT_RESOURCE_TYPES: &[&str] = &[
    "AWS::IAM::Role",
    "AWS::IAM::Policy",
    "AWS::IAM::User",
    "AWS::IAM::Group",
    "AWS::IAM::InstanceProfile",
    "AWS::Lambda::Permission",
    "AWS::Logs::LogGroup",
    "AWS::Logs::LogStream",
    "AWS::CloudFormation::Stack",
    "AWS::Route53::HostedZone",
    "AWS::Route53::RecordSet",
    "AWS::CloudWatch::Alarm",
    "AWS::SNS::Subscription",
    "AWS::SQS::QueuePolicy",
    "AWS::S3::BucketPolicy",
    "AWS::Lambda::EventSourceMapping",
    "AWS::Events::Rule",
    "AWS::CloudWatch::LogGroup",
];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "explicit" => explicit_profile(),
        // default
        _ => compat_profile(),
    }
}

fn compat_profile() -> EffectiveConfig {
    // Exempt resources report PASSED, matching what existing scanners expect.
    EffectiveConfig {
        profile: "compat".to_string(),
        checks: default_checks(Verdict::Passed),
    }
}

fn explicit_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "explicit".to_string(),
        checks: default_checks(Verdict::Skipped),
    }
}

fn default_checks(exempt_verdict: Verdict) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();

    let mut tags = CheckPolicy::enabled(
        DEFAULT_REQUIRED_TAGS.iter().map(|s| s.to_string()).collect(),
        DEFAULT_EXEMPT_RESOURCE_TYPES
            .iter()
            .map(|s| ResourceType::new(*s))
            .collect(),
    );
    tags.supported_resources = DEFAULT_SUPPORTED_RESOURCES
        .iter()
        .map(|s| s.to_string())
        .collect();
    tags.exempt_verdict = exempt_verdict;
    m.insert(ids::CHECK_AWS_CUSTOM_TAGS.to_string(), tags);

    m
}
