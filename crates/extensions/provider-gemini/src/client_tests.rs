    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> GeminiClientConfig {
        GeminiClientConfig::default()
            .with_api_key("test-key")
            .with_base_url(server.uri())
    }

    #[test]
    fn test_config_defaults() {
        let config = GeminiClientConfig::default();
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.timeout_seconds, 15);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_blank_key_is_unset() {
        let client = GeminiClient::new(&GeminiClientConfig::default().with_api_key("  ")).unwrap();
        assert!(!client.has_api_key());
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;
        let client = GeminiClient::new(&GeminiClientConfig::default().with_base_url(server.uri()))
            .unwrap();

        let err = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_content_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": "Topic: Arrays"}]}}]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let response = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Topic: Arrays"));
    }

    #[tokio::test]
    async fn test_error_status_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap_err();
        match err {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap_err();
        match err {
            ProviderError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Error from model API");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"candidates": []}))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server).with_timeout(1)).unwrap();
        let err = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_unparseable_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client
            .generate_content("gemini-pro", &GenerateContentRequest::from_prompt("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
