//! Gemini provider against a mocked `generateContent` endpoint

#[cfg(test)]
mod tests {
    use crate::common::{ChatRequestFactory, GeminiPayloads};
    use llm_platform::core::providers::gemini::{GeminiConfig, GeminiProvider};
    use llm_platform::core::providers::{GenerationFailure, ProviderError};
    use llm_platform::core::traits::LLMProvider;
    use llm_platform::core::types::Credential;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/models/gemini-2.0-flash:generateContent";

    fn provider_for(server: &MockServer) -> GeminiProvider {
        GeminiProvider::new(GeminiConfig::default().with_base_url(server.uri())).unwrap()
    }

    fn key() -> Credential {
        Credential::new("valid-key")
    }

    async fn respond_with(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_chat_completion_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "valid-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"maxOutputTokens": 1000, "candidateCount": 1, "topK": 10}
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(GeminiPayloads::text("  Blue.\n")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let response = provider
            .chat_completion(&ChatRequestFactory::conversation(), &key())
            .await
            .unwrap();

        assert_eq!(response.provider, "gemini");
        assert_eq!(response.model, "gemini-2.0-flash");
        assert_eq!(response.generated_text, "Blue.");
        assert!(response.tokens_used > 0);
        assert_eq!(response.cost, 0.0);
        assert!(response.latency_ms >= 0.0);

        let status = provider.get_status();
        assert_eq!(status.total_requests, 1);
        assert_eq!(status.success_rate, 1.0);
    }

    #[tokio::test]
    async fn test_prompt_is_flattened_with_role_prefixes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{
                    "text": "Context: You are terse.\nUser: Hi\nAssistant: Hello.\nUser: Name a colour."
                }]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(GeminiPayloads::text("Red")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        provider
            .chat_completion(&ChatRequestFactory::conversation(), &key())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_request_model_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(GeminiPayloads::text("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let request = ChatRequestFactory::simple("hi").with_model("gemini-1.5-pro");
        let response = provider.chat_completion(&request, &key()).await.unwrap();
        assert_eq!(response.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn test_invalid_key_is_authentication_error() {
        let server = MockServer::start().await;
        respond_with(&server, 400, GeminiPayloads::invalid_key()).await;

        let provider = provider_for(&server);
        let err = provider
            .chat_completion(&ChatRequestFactory::simple("hi"), &Credential::new("bad-key"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Authentication { .. }));
        assert!(err.to_string().contains("API key not valid"));

        let status = provider.get_status();
        assert_eq!(status.total_requests, 1);
        assert_eq!(status.success_rate, 0.0);
        assert!(provider.metrics().last_error().is_some());
    }

    #[tokio::test]
    async fn test_generation_failures_are_distinguishable() {
        let cases = [
            (
                GeminiPayloads::empty_with_finish_reason("SAFETY"),
                GenerationFailure::SafetyBlock,
            ),
            (
                GeminiPayloads::empty_with_finish_reason("MAX_TOKENS"),
                GenerationFailure::TokenLimit,
            ),
            (
                GeminiPayloads::empty_with_finish_reason("RECITATION"),
                GenerationFailure::Unspecified("RECITATION".to_string()),
            ),
            (GeminiPayloads::prompt_blocked(), GenerationFailure::SafetyBlock),
        ];

        let mut messages = Vec::new();
        for (payload, expected) in cases {
            let server = MockServer::start().await;
            respond_with(&server, 200, payload).await;

            let err = provider_for(&server)
                .chat_completion(&ChatRequestFactory::simple("hi"), &key())
                .await
                .unwrap_err();

            match err {
                ProviderError::Generation { ref reason, .. } => assert_eq!(reason, &expected),
                other => panic!("expected Generation, got {:?}", other),
            }
            messages.push(err.to_string());
        }

        assert!(messages[0].contains("safety filters"));
        assert!(messages[1].contains("token limit"));
        assert!(messages[2].contains("RECITATION"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream() {
        let server = MockServer::start().await;
        respond_with(&server, 503, json!({"error": {"message": "overloaded"}})).await;

        let err = provider_for(&server)
            .chat_completion(&ChatRequestFactory::simple("hi"), &key())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Upstream { status: Some(503), .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_upstream_and_recorded() {
        let provider =
            GeminiProvider::new(GeminiConfig::default().with_base_url("http://127.0.0.1:1"))
                .unwrap();

        let err = provider
            .chat_completion(&ChatRequestFactory::simple("hi"), &key())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Upstream { status: None, .. }));
        assert_eq!(provider.metrics().failed_requests(), 1);
    }

    #[tokio::test]
    async fn test_health_check_probe() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "hello"}]}],
                "generationConfig": {"maxOutputTokens": 10}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(GeminiPayloads::text("Hi!")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let result = provider.health_check(&key()).await;

        assert!(result.status);
        assert_eq!(result.provider, "gemini");
        assert!(result.error.is_none());
        assert!(provider.get_status().healthy);
        assert_eq!(provider.get_status().total_requests, 0);

        let received = server.received_requests().await.unwrap();
        let body: serde_json::Value = received[0].body_json().unwrap();
        assert_eq!(
            body["generationConfig"],
            json!({"temperature": 0.0, "maxOutputTokens": 10})
        );
        assert!(body.get("safetySettings").is_none());
    }

    #[tokio::test]
    async fn test_health_check_never_raises() {
        let server = MockServer::start().await;
        respond_with(&server, 400, GeminiPayloads::invalid_key()).await;

        let provider = provider_for(&server);
        let before = provider.get_status().last_check;
        let result = provider.health_check(&Credential::new("bad-key")).await;

        assert!(!result.status);
        assert!(!result.error.unwrap_or_default().is_empty());

        let status = provider.get_status();
        assert!(!status.healthy);
        assert!(status.last_check >= before);
    }

    #[tokio::test]
    async fn test_credential_is_not_retained() {
        let server = MockServer::start().await;
        respond_with(&server, 200, GeminiPayloads::text("ok")).await;

        let provider = provider_for(&server);
        provider
            .chat_completion(&ChatRequestFactory::simple("hi"), &key())
            .await
            .unwrap();

        assert!(!format!("{:?}", provider).contains("valid-key"));
    }
}
