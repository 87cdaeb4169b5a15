use super::{Check, CheckMeta, utils};
use crate::model::ConfigValue;
use crate::policy::CheckPolicy;
use std::collections::BTreeSet;
use tagguard_types::{CheckCategory, ResourceType, Verdict, ids};

/// Why a resource got its verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagOutcome {
    /// Resource type is on the exemption list; nothing was inspected.
    Exempt,
    /// `Properties.Tags` is absent, malformed, or empty.
    NoTags,
    /// Required keys not found, in required-tag order.
    MissingTags(Vec<String>),
    Compliant,
}

impl TagOutcome {
    pub fn verdict(&self, exempt_verdict: Verdict) -> Verdict {
        match self {
            TagOutcome::Exempt => exempt_verdict,
            TagOutcome::NoTags | TagOutcome::MissingTags(_) => Verdict::Failed,
            TagOutcome::Compliant => Verdict::Passed,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TagOutcome::Exempt => ids::CODE_EXEMPT_RESOURCE_TYPE,
            TagOutcome::NoTags => ids::CODE_NO_TAGS,
            TagOutcome::MissingTags(_) => ids::CODE_MISSING_REQUIRED_TAGS,
            TagOutcome::Compliant => ids::CODE_REQUIRED_TAGS_PRESENT,
        }
    }

    pub fn missing(&self) -> &[String] {
        match self {
            TagOutcome::MissingTags(missing) => missing,
            _ => &[],
        }
    }
}

/// Every taggable resource must carry all required tag keys.
#[derive(Clone, Debug)]
pub struct RequireTags {
    meta: CheckMeta,
    required_tags: Vec<String>,
    exempt: BTreeSet<ResourceType>,
    exempt_verdict: Verdict,
}

impl RequireTags {
    /// # Panics
    ///
    /// Panics if `policy.supported_resources` holds an invalid glob (see [`CheckMeta::new`]).
    pub fn new(policy: &CheckPolicy) -> Self {
        let name = format!(
            "Ensure all resources have required tags: {}",
            policy.required_tags.join(", ")
        );
        Self {
            meta: CheckMeta::new(
                ids::CHECK_AWS_CUSTOM_TAGS,
                name,
                vec![CheckCategory::Convention],
                policy.supported_resources.clone(),
            ),
            required_tags: policy.required_tags.clone(),
            exempt: policy.exempt_resource_types.clone(),
            exempt_verdict: policy.exempt_verdict,
        }
    }

    pub fn required_tags(&self) -> &[String] {
        &self.required_tags
    }

    pub fn is_exempt(&self, resource_type: &ResourceType) -> bool {
        !resource_type.is_empty() && self.exempt.contains(resource_type)
    }

    /// Exemption lookup, tag extraction, and missing-tag determination for one resource.
    pub fn inspect(
        &self,
        resource_type: Option<&ResourceType>,
        config: &ConfigValue,
    ) -> TagOutcome {
        if resource_type.is_some_and(|rt| self.is_exempt(rt)) {
            return TagOutcome::Exempt;
        }

        let tags = utils::tag_entries(config);
        if tags.is_empty() {
            return TagOutcome::NoTags;
        }

        let present = utils::tag_keys(tags);
        let missing: Vec<String> = self
            .required_tags
            .iter()
            .filter(|tag| !present.contains(tag.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            TagOutcome::Compliant
        } else {
            TagOutcome::MissingTags(missing)
        }
    }
}

impl Check for RequireTags {
    fn meta(&self) -> &CheckMeta {
        &self.meta
    }

    fn evaluate(&self, resource_type: Option<&ResourceType>, config: &ConfigValue) -> Verdict {
        self.inspect(resource_type, config).verdict(self.exempt_verdict)
    }
}

pub(super) fn factory(policy: &CheckPolicy) -> Box<dyn Check> {
    Box::new(RequireTags::new(policy))
}
