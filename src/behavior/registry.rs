//! Lookup table from country code to behavior.

use std::collections::HashMap;

use super::CountryBehavior;

/// Resolves the behavior for a country code, falling back to
/// [`CountryBehavior::Default`] when no specific behavior is registered.
/// Lookup is case-insensitive on the code.
#[derive(Debug, Clone)]
pub struct BehaviorRegistry {
    behaviors: HashMap<String, CountryBehavior>,
    default_behavior: CountryBehavior,
}

impl BehaviorRegistry {
    /// Registry with the known country behaviors installed.
    pub fn new() -> Self {
        Self::empty().with_behavior("NL", CountryBehavior::netherlands())
    }

    /// Registry with no specific behaviors; everything resolves to the
    /// default.
    pub fn empty() -> Self {
        Self {
            behaviors: HashMap::new(),
            default_behavior: CountryBehavior::Default,
        }
    }

    pub fn with_behavior(mut self, code: &str, behavior: CountryBehavior) -> Self {
        self.behaviors.insert(code.to_uppercase(), behavior);
        self
    }

    pub fn behavior(&self, country_code: &str) -> &CountryBehavior {
        self.behaviors
            .get(&country_code.to_uppercase())
            .unwrap_or(&self.default_behavior)
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = BehaviorRegistry::new();
        assert!(matches!(
            registry.behavior("nl"),
            CountryBehavior::PrefillAndLock { .. }
        ));
        assert!(matches!(
            registry.behavior("NL"),
            CountryBehavior::PrefillAndLock { .. }
        ));
    }

    #[test]
    fn test_unregistered_codes_fall_back_to_default() {
        let registry = BehaviorRegistry::new();
        assert!(matches!(registry.behavior("DE"), CountryBehavior::Default));
        assert!(matches!(registry.behavior("??"), CountryBehavior::Default));
    }

    #[test]
    fn test_custom_behaviors_can_be_registered() {
        let registry =
            BehaviorRegistry::empty().with_behavior("de", CountryBehavior::netherlands());
        assert!(matches!(
            registry.behavior("DE"),
            CountryBehavior::PrefillAndLock { .. }
        ));
    }
}
