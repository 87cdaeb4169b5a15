use crate::model::ConfigValue;
use crate::registry::CheckFactory;
use globset::GlobSet;
use tagguard_types::{CheckCategory, ResourceType, Verdict, ids};

mod require_tags;
mod utils;


pub use require_tags::{RequireTags, TagOutcome};

/// Registration metadata a host engine needs before it ever calls `evaluate`.
#[derive(Clone, Debug)]
pub struct CheckMeta {
    pub id: String,
    pub name: String,
    pub categories: Vec<CheckCategory>,
    pub supported_resources: Vec<String>,
    matcher: GlobSet,
}

impl CheckMeta {
    /// # Panics
    ///
    /// Panics if a `supported_resources` entry is not a valid glob. `tagguard-settings`
    /// rejects such patterns during resolution; hosts building policies by hand must do the same.
    pub fn new(
        id: &str,
        name: String,
        categories: Vec<CheckCategory>,
        supported_resources: Vec<String>,
    ) -> Self {
        let matcher = utils::build_matcher(&supported_resources);
        Self {
            id: id.to_string(),
            name,
            categories,
            supported_resources,
            matcher,
        }
    }

    pub fn applies_to(&self, resource_type: &ResourceType) -> bool {
        self.matcher.is_match(resource_type.as_str())
    }
}

/// A rule the host engine can register and call once per resource.
///
/// Implementations hold no mutable state; one instance serves concurrent callers.
pub trait Check: Send + Sync {
    fn meta(&self) -> &CheckMeta;

    /// Verdict for one resource. Never fails: malformed input degrades to the most
    /// conservative reading.
    fn evaluate(&self, resource_type: Option<&ResourceType>, config: &ConfigValue) -> Verdict;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn categories(&self) -> &[CheckCategory] {
        &self.meta().categories
    }

    fn supported_resources(&self) -> &[String] {
        &self.meta().supported_resources
    }

    fn applies_to(&self, resource_type: &ResourceType) -> bool {
        self.meta().applies_to(resource_type)
    }
}

const BUILTIN: &[(&str, CheckFactory)] = &[(ids::CHECK_AWS_CUSTOM_TAGS, require_tags::factory)];

/// Built-in checks, keyed by their stable id.
pub fn builtin() -> &'static [(&'static str, CheckFactory)] {
    BUILTIN
}
