//! Suggestion and health handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use codepace_advisor::{params_from_json, parse_reply, PromptParams, NEXT_PROBLEM};
use codepace_protocols::{Difficulty, NextProblemResponse, DEFAULT_TOPIC};

use crate::error::ApiError;
use crate::state::AppState;

const NEXT_PROBLEM_FIELDS: [&str; 4] = ["last_problem", "difficulty", "time_taken", "topic"];

/// A `/api/next-problem` body that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidNextProblem {
    pub last_problem: String,
    pub difficulty: Difficulty,
    pub time_taken: u64,
    pub topic: String,
}

/// `data` of a successful `/api/ask-gemini` reply.
#[derive(Debug, Serialize)]
pub struct AskData {
    pub template: String,
    pub parameters: Value,
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub success: bool,
    pub data: AskData,
}

fn body_object(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    let Json(body) = payload
        .map_err(|rejection| ApiError::Validation(format!("Invalid JSON body: {}", rejection.body_text())))?;

    match body {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

fn string_field(body: &Map<String, Value>, name: &str) -> Result<String, ApiError> {
    body.get(name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Validation(format!("{} must be a string", name)))
}

/// Check presence and types of the `/api/next-problem` fields.
pub fn validate_next_problem(body: &Map<String, Value>) -> Result<ValidNextProblem, ApiError> {
    let missing: Vec<&str> = NEXT_PROBLEM_FIELDS
        .iter()
        .copied()
        .filter(|name| body.get(*name).is_none_or(Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::Validation(format!(
            "Missing required parameters: {}",
            missing.join(", ")
        )));
    }

    let last_problem = string_field(body, "last_problem")?;
    let topic = string_field(body, "topic")?;

    let raw_difficulty = string_field(body, "difficulty")?;
    let difficulty = raw_difficulty.parse::<Difficulty>().map_err(|_| {
        ApiError::Validation(format!(
            "Invalid difficulty '{}'. Expected one of: easy, medium, hard",
            raw_difficulty
        ))
    })?;

    let time_taken = body
        .get("time_taken")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            ApiError::Validation("time_taken must be a non-negative integer (minutes)".to_string())
        })?;

    Ok(ValidNextProblem {
        last_problem,
        difficulty,
        time_taken,
        topic,
    })
}

fn ensure_model_configured(state: &AppState) -> Result<(), ApiError> {
    if state.model.is_configured() {
        Ok(())
    } else {
        Err(ApiError::Configuration(format!(
            "{} API key is not configured",
            state.model.id()
        )))
    }
}

/// `POST /api/next-problem`
pub async fn next_problem(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NextProblemResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let body = body_object(payload)?;
    let request = validate_next_problem(&body)?;
    ensure_model_configured(&state)?;

    let topic = if request.topic.trim().is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        request.topic.trim().to_string()
    };

    let params: PromptParams = [
        ("last_problem", request.last_problem.clone()),
        ("difficulty", request.difficulty.to_string()),
        ("topic", topic.clone()),
        ("time_taken", request.time_taken.to_string()),
        ("benchmark", request.difficulty.benchmark_minutes().to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    let base_prompt = state.registry.render(NEXT_PROBLEM, &params)?;

    let evaluation = state
        .evaluator
        .evaluate(&topic, request.difficulty, request.time_taken);
    let prompt = format!("{}\n{}", base_prompt, evaluation.prompt_annotation());

    info!(
        %request_id,
        topic = %topic,
        difficulty = %request.difficulty,
        ratio = evaluation.ratio,
        "Requesting next problem"
    );
    debug!(
        %request_id,
        samples = state.evaluator.history(&topic).len(),
        topics = state.evaluator.topic_count(),
        "Performance history"
    );

    let reply = state.model.generate(&prompt).await?;
    let parsed = parse_reply(&reply);
    if !parsed.is_complete() {
        warn!(
            %request_id,
            missing = ?parsed.missing_fields(),
            "Model reply is missing fields, returning partial suggestion"
        );
    }

    let problem = parsed.to_suggestion(&state.problem_base_url);
    Ok(Json(NextProblemResponse::ok(problem, evaluation.summary())))
}

/// `POST /api/ask-gemini`
pub async fn ask_gemini(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let body = body_object(payload)?;

    let template = body
        .get("template")
        .and_then(Value::as_str)
        .filter(|id| state.registry.contains(id))
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "Invalid template. Available templates: {}",
                state.registry.ids().join(", ")
            ))
        })?
        .to_string();

    let parameters = match body.get("parameters") {
        Some(Value::Object(map)) => map.clone(),
        _ => {
            return Err(ApiError::Validation(
                "Parameters must be provided as an object".to_string(),
            ))
        }
    };

    ensure_model_configured(&state)?;
    let prompt = state
        .registry
        .render(&template, &params_from_json(&parameters))?;

    info!(%request_id, template = %template, "Forwarding templated prompt");
    let response = state.model.generate(&prompt).await?;

    Ok(Json(AskResponse {
        success: true,
        data: AskData {
            template,
            parameters: Value::Object(parameters),
            response,
            timestamp: chrono::Utc::now().to_rfc3339(),
        },
    }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "healthy",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
