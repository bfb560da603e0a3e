//! Full request flow: health pass, routing, single provider attempt

#[cfg(test)]
mod tests {
    use crate::common::providers::{Behaviour, ScriptedProvider, registry_of};
    use crate::common::{ChatRequestFactory, GeminiPayloads};
    use llm_platform::GatewayError;
    use llm_platform::core::completion::CompletionService;
    use llm_platform::core::providers::{ProviderError, ProviderRegistry};
    use llm_platform::core::router::RouterError;
    use llm_platform::core::traits::LLMProvider;
    use llm_platform::core::providers::gemini::{GeminiConfig, GeminiProvider};
    use std::sync::Arc;
    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_auto_routes_to_first_registered() {
        let providers = vec![
            ScriptedProvider::new("alpha", Behaviour::Ok),
            ScriptedProvider::new("beta", Behaviour::Ok),
        ];
        let service = CompletionService::new(registry_of(&providers));

        let request = ChatRequestFactory::simple("hi")
            .with_credential("alpha", "valid-key")
            .with_credential("beta", "valid-key");
        let response = service.chat(&request).await.unwrap();

        assert_eq!(response.provider, "alpha");
        assert_eq!(response.generated_text, "alpha answered");
        assert_eq!(providers[1].chat_calls(), 0);
    }

    #[tokio::test]
    async fn test_unhealthy_sibling_blocks_named_request() {
        let providers = vec![
            ScriptedProvider::new("alpha", Behaviour::Ok),
            ScriptedProvider::new("beta", Behaviour::Unhealthy),
        ];
        let service = CompletionService::new(registry_of(&providers));

        let request = ChatRequestFactory::simple("hi")
            .with_provider("alpha")
            .with_credential("alpha", "valid-key")
            .with_credential("beta", "valid-key");
        let err = service.chat(&request).await.unwrap_err();

        assert!(matches!(err, GatewayError::ProviderUnhealthy { ref provider, .. } if provider == "beta"));
        assert_eq!(providers[0].chat_calls(), 0);
    }

    #[tokio::test]
    async fn test_selected_provider_failure_is_final() {
        let providers = vec![
            ScriptedProvider::new("alpha", Behaviour::ChatFails),
            ScriptedProvider::new("beta", Behaviour::Ok),
        ];
        let service = CompletionService::new(registry_of(&providers));

        let request = ChatRequestFactory::simple("hi")
            .with_credential("alpha", "valid-key")
            .with_credential("beta", "valid-key");
        let err = service.chat(&request).await.unwrap_err();

        assert!(matches!(err, GatewayError::Provider(ProviderError::Upstream { .. })));
        assert_eq!(providers[0].chat_calls(), 1);
        assert_eq!(providers[1].chat_calls(), 0);
        assert_eq!(providers[0].get_status().total_requests, 1);
    }

    #[tokio::test]
    async fn test_unregistered_preference() {
        let providers = vec![ScriptedProvider::new("alpha", Behaviour::Ok)];
        let service = CompletionService::new(registry_of(&providers));

        let request = ChatRequestFactory::simple("hi")
            .with_provider("zeta")
            .with_credential("alpha", "valid-key");
        let err = service.chat(&request).await.unwrap_err();

        assert!(matches!(err, GatewayError::Router(RouterError::ProviderUnavailable(_))));
    }

    #[tokio::test]
    async fn test_metrics_accumulate_across_requests() {
        let providers = vec![ScriptedProvider::new("alpha", Behaviour::Ok)];
        let service = CompletionService::new(registry_of(&providers));

        let request = ChatRequestFactory::simple("hi").with_credential("alpha", "valid-key");
        for _ in 0..5 {
            service.chat(&request).await.unwrap();
        }

        let status = &service.status()[0];
        assert_eq!(status.total_requests, 5);
        assert_eq!(status.success_rate, 1.0);
        assert_eq!(status.average_latency, 7.0);
    }

    #[tokio::test]
    async fn test_end_to_end_against_mocked_gemini() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-goog-api-key", "valid-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(GeminiPayloads::text("Pong")))
            .expect(2)
            .mount(&server)
            .await;

        let gemini = GeminiProvider::new(GeminiConfig::default().with_base_url(server.uri())).unwrap();
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(gemini)).unwrap();
        let service = CompletionService::new(Arc::new(registry));

        let request = ChatRequestFactory::simple("Ping").with_credential("gemini", "valid-key");
        let response = service.chat(&request).await.unwrap();

        assert_eq!(response.provider, "gemini");
        assert_eq!(response.generated_text, "Pong");

        let provider = service.registry().get("gemini").unwrap();
        assert_eq!(provider.get_status().total_requests, 1);
        assert!(provider.get_status().healthy);
    }
}
