//! Provider registry construction and lookup

#[cfg(test)]
mod tests {
    use crate::common::providers::{Behaviour, ScriptedProvider};
    use llm_platform::GatewayError;
    use llm_platform::config::ProviderConfig;
    use llm_platform::core::providers::{ProviderRegistry, supported_providers};
    use llm_platform::core::traits::LLMProvider;
    use std::sync::Arc;

    #[test]
    fn test_registry_order_follows_known_variants() {
        let registry = ProviderRegistry::from_config(&[]).unwrap();
        let expected: Vec<String> = supported_providers().iter().map(|s| s.to_string()).collect();
        assert_eq!(registry.list(), expected);
    }

    #[test]
    fn test_config_entry_is_applied() {
        let config = ProviderConfig {
            model: Some("gemini-1.5-flash".to_string()),
            ..ProviderConfig::named("gemini")
        };
        let registry = ProviderRegistry::from_config(&[config]).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_bad_provider_config_fails_construction() {
        let config = ProviderConfig {
            base_url: Some("::not-a-url".to_string()),
            ..ProviderConfig::named("gemini")
        };
        assert!(ProviderRegistry::from_config(&[config]).is_err());
    }

    #[test]
    fn test_explicit_registration_appends() {
        let mut registry = ProviderRegistry::from_config(&[]).unwrap();
        let extra: Arc<dyn LLMProvider> = ScriptedProvider::new("local", Behaviour::Ok);
        registry.register(extra).unwrap();

        assert_eq!(registry.list(), vec!["gemini".to_string(), "local".to_string()]);
        assert_eq!(registry.get("local").unwrap().name(), "local");
    }

    #[test]
    fn test_unknown_identity() {
        let registry = ProviderRegistry::new();
        let err = registry.get("gemini").err().unwrap();
        assert!(matches!(err, GatewayError::UnknownProvider { ref provider, .. } if provider == "gemini"));
    }

    #[test]
    fn test_statuses_cover_every_provider() {
        let registry = ProviderRegistry::from_config(&[]).unwrap();
        let statuses = registry.statuses();
        assert_eq!(statuses.len(), registry.len());
        assert!(statuses.iter().all(|s| s.healthy && s.total_requests == 0));
    }
}
