use crate::model::ConfigValue;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;

pub fn build_matcher(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Resource type patterns are case-sensitive globs (`AWS::*`).
        let glob = Glob::new(pattern)
            .expect("supported_resources patterns must be validated in tagguard-settings");
        builder.add(glob);
    }
    builder
        .build()
        .expect("supported_resources patterns must be validated in tagguard-settings")
}

/// The `Properties.Tags` sequence of a resource, empty on any shape mismatch.
pub fn tag_entries(config: &ConfigValue) -> &[ConfigValue] {
    config.get("Properties").get("Tags").as_sequence()
}

/// Distinct string `Key`s of the mapping entries in `tags`.
pub fn tag_keys(tags: &[ConfigValue]) -> BTreeSet<&str> {
    tags.iter()
        .filter(|tag| tag.is_mapping())
        .filter_map(|tag| tag.get("Key").as_str())
        .collect()
}
