    use super::*;

    #[test]
    fn test_request_from_prompt() {
        let request = GenerateContentRequest::from_prompt("Suggest a problem");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Suggest a problem");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_generation_config_default() {
        let config = GenerationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_generation_config_camel_case() {
        let config = GenerationConfig {
            temperature: Some(0.4),
            max_output_tokens: Some(256),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["maxOutputTokens"], 256);
    }

    #[test]
    fn test_response_first_text_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Problem ID: 1\n"}, {"text": "Problem Title: Two Sum"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5, "totalTokenCount": 15}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.first_text().as_deref(),
            Some("Problem ID: 1\nProblem Title: Two Sum")
        );
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 15);
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_response_candidate_without_content() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_response_blank_text_is_none() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_error_body() {
        let json = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let err: GeminiError = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code, 400);
        assert_eq!(err.error.message, "API key not valid");
        assert_eq!(err.error.status, "INVALID_ARGUMENT");
    }
