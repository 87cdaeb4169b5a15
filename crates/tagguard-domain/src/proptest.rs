//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Exempt resource types never failing, whatever their config
//! - Missing or malformed tag data always failing
//! - Verdicts being insensitive to extra, duplicate, and reordered tags

use crate::checks::{Check, TagOutcome};
use crate::model::ConfigValue;
use crate::test_support::{EXEMPT, REQUIRED, default_rule, rt, skipping_rule};
use proptest::prelude::*;
use serde_json::json;
use tagguard_types::Verdict;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Arbitrary semi-structured trees, biased toward the keys the rule reads.
fn arb_config_value() -> impl Strategy<Value = ConfigValue> {
    let leaf = prop_oneof![
        Just(ConfigValue::Null),
        any::<bool>().prop_map(ConfigValue::Bool),
        any::<i64>().prop_map(|n| ConfigValue::Number(n.into())),
        "[A-Za-z]{0,8}".prop_map(ConfigValue::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::Sequence),
            prop::collection::btree_map(arb_map_key(), inner, 0..4).prop_map(ConfigValue::Mapping),
        ]
    })
}

fn arb_map_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Properties".to_string()),
        Just("Tags".to_string()),
        Just("Key".to_string()),
        Just("Value".to_string()),
        "[A-Za-z]{1,8}",
    ]
}

/// Resource types guaranteed not to be on the exemption list.
fn arb_taggable_type() -> impl Strategy<Value = String> {
    "AWS::(S3|EC2|SQS|SNS|DynamoDB|ECS)::[A-Z][a-z]{2,10}"
        .prop_filter("must not be exempt", |s| !EXEMPT.contains(&s.as_str()))
}

/// Tag keys that never collide with a required tag.
fn arb_extra_key() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z]{1,12}".prop_filter("must not be required", |s| !REQUIRED.contains(&s.as_str()))
}

fn tags_config(keys: &[String]) -> ConfigValue {
    let tags: Vec<_> = keys
        .iter()
        .map(|k| json!({ "Key": k, "Value": "v" }))
        .collect();
    ConfigValue::from(json!({ "Properties": { "Tags": tags } }))
}

/// Configs whose tag sequence normalizes to empty.
fn arb_tagless_config() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        Just(ConfigValue::Null),
        Just(ConfigValue::from(json!({}))),
        Just(ConfigValue::from(json!({ "Properties": {} }))),
        Just(ConfigValue::from(json!({ "Properties": { "Tags": [] } }))),
        arb_config_value().prop_map(|tags| {
            let mut props = std::collections::BTreeMap::new();
            // Anything but a non-empty sequence.
            let tags = match tags {
                ConfigValue::Sequence(_) => ConfigValue::Sequence(Vec::new()),
                other => other,
            };
            props.insert("Tags".to_string(), tags);
            ConfigValue::Mapping([("Properties".to_string(), ConfigValue::Mapping(props))].into())
        }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn exempt_types_pass_for_any_config(
        idx in 0..EXEMPT.len(),
        config in arb_config_value(),
    ) {
        let ty = rt(EXEMPT[idx]);
        prop_assert_eq!(default_rule().evaluate(Some(&ty), &config), Verdict::Passed);
        prop_assert_eq!(skipping_rule().evaluate(Some(&ty), &config), Verdict::Skipped);
    }

    #[test]
    fn tagless_configs_fail(ty in arb_taggable_type(), config in arb_tagless_config()) {
        let rule = default_rule();
        prop_assert_eq!(rule.inspect(Some(&rt(&ty)), &config), TagOutcome::NoTags);
        prop_assert_eq!(rule.evaluate(Some(&rt(&ty)), &config), Verdict::Failed);
    }

    #[test]
    fn superset_of_required_passes(
        ty in arb_taggable_type(),
        keys in (
            prop::collection::vec(arb_extra_key(), 0..6),
            prop::collection::vec(prop::sample::select(REQUIRED), 0..3),
        )
            .prop_flat_map(|(extra, dupes)| {
                let mut keys: Vec<String> = REQUIRED.iter().map(|s| s.to_string()).collect();
                keys.extend(extra);
                keys.extend(dupes.into_iter().map(str::to_string));
                Just(keys).prop_shuffle()
            }),
    ) {
        let config = tags_config(&keys);
        prop_assert_eq!(default_rule().evaluate(Some(&rt(&ty)), &config), Verdict::Passed);
    }

    #[test]
    fn any_missing_required_tag_fails(
        ty in arb_taggable_type(),
        dropped in prop::sample::subsequence(REQUIRED.to_vec(), 1..=REQUIRED.len()),
        extra in prop::collection::vec(arb_extra_key(), 0..6),
    ) {
        let mut keys: Vec<String> = REQUIRED
            .iter()
            .filter(|k| !dropped.contains(*k))
            .map(|s| s.to_string())
            .collect();
        keys.extend(extra);
        let config = tags_config(&keys);

        let rule = default_rule();
        let outcome = rule.inspect(Some(&rt(&ty)), &config);
        prop_assert_eq!(outcome.verdict(Verdict::Passed), Verdict::Failed);
        if !keys.is_empty() {
            // `subsequence` preserves REQUIRED order, which is the reporting order.
            prop_assert_eq!(outcome.missing(), dropped.as_slice());
        }
    }

    #[test]
    fn evaluation_is_idempotent(ty in "[A-Za-z:]{0,20}", config in arb_config_value()) {
        let rule = default_rule();
        let ty = rt(&ty);
        let first = rule.evaluate(Some(&ty), &config);
        for _ in 0..3 {
            prop_assert_eq!(rule.evaluate(Some(&ty), &config), first);
        }
    }
}
