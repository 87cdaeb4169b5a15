use crate::checks::{self, Check};
use crate::model::ConfigValue;
use crate::policy::{CheckPolicy, EffectiveConfig};
use log::debug;
use tagguard_types::{ResourceType, Verdict};

/// Builds a check from its resolved policy. Called once per registration.
pub type CheckFactory = fn(&CheckPolicy) -> Box<dyn Check>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub check_id: String,
    pub verdict: Verdict,
}

/// Checks a host engine has explicitly registered, ordered by id.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in check enabled in `cfg`.
    pub fn builtin(cfg: &EffectiveConfig) -> Self {
        let mut registry = Self::new();
        for (id, factory) in checks::builtin() {
            registry.register(id, *factory, cfg);
        }
        registry
    }

    /// Construct and add the check `check_id` if `cfg` enables it.
    ///
    /// Returns whether the check was registered. Re-registering an id replaces the earlier instance.
    pub fn register(
        &mut self,
        check_id: &str,
        factory: CheckFactory,
        cfg: &EffectiveConfig,
    ) -> bool {
        let Some(policy) = cfg.check_policy(check_id) else {
            debug!("check {check_id} disabled in profile '{}'", cfg.profile);
            return false;
        };

        let check = factory(policy);
        debug!("registered check {} ({})", check.id(), check.name());

        self.checks.retain(|c| c.id() != check.id());
        self.checks.push(check);
        self.checks.sort_by(|a, b| a.id().cmp(b.id()));
        true
    }

    pub fn get(&self, check_id: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.id() == check_id)
            .map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Checks whose supported resource patterns match `resource_type`.
    pub fn applicable<'a>(
        &'a self,
        resource_type: &'a ResourceType,
    ) -> impl Iterator<Item = &'a dyn Check> + 'a {
        self.iter().filter(move |c| c.applies_to(resource_type))
    }

    /// Run every applicable check against one resource.
    pub fn evaluate(&self, resource_type: &ResourceType, config: &ConfigValue) -> Vec<CheckResult> {
        self.applicable(resource_type)
            .map(|check| CheckResult {
                check_id: check.id().to_string(),
                verdict: check.evaluate(Some(resource_type), config),
            })
            .collect()
    }
}
