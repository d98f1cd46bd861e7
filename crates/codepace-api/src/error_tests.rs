use super::*;

#[test]
fn test_provider_error_mapping() {
    assert_eq!(
        ApiError::from(ProviderError::Timeout(15)).status(),
        StatusCode::GATEWAY_TIMEOUT
    );
    assert_eq!(
        ApiError::from(ProviderError::MissingApiKey).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::from(ProviderError::Network("refused".into())).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::from(ProviderError::InvalidResponse("empty".into())).status(),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn test_upstream_status_passthrough() {
    let err = ApiError::from(ProviderError::ApiError {
        status: 429,
        message: "Resource exhausted".into(),
    });
    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(err.public_message(), "Resource exhausted");
}

#[test]
fn test_invalid_upstream_status_is_bad_gateway() {
    let err = ApiError::Upstream {
        status: 42,
        message: "odd".into(),
    };
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_internal_details_are_hidden() {
    let err = ApiError::Configuration("Model API key is not configured".into());
    assert_eq!(err.public_message(), "Internal server error");

    let err = ApiError::Internal("stack trace".into());
    assert_eq!(err.public_message(), "Internal server error");
}

#[test]
fn test_prompt_error_is_validation() {
    let err = ApiError::from(PromptError::MissingParameter("time, question".into()));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.public_message(), "Missing required parameters: time, question");
}

#[test]
fn test_timeout_message() {
    assert_eq!(ApiError::UpstreamTimeout.public_message(), "Request timeout");
}
