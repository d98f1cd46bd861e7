use super::*;
use std::time::Duration;

use crate::clock::ManualClock;
use crate::store::MemoryStore;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const T0: EpochMillis = 1_700_000_000_000;

struct Fixture {
    companion: Companion,
    store: Arc<MemoryStore>,
    clock: Arc<ManualClock>,
}

fn fixture(endpoint: &str) -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(T0));
    let timer = Arc::new(TimerService::new(store.clone(), clock.clone()));
    let client = SuggestionClient::new(endpoint, Duration::from_secs(5)).unwrap();
    let companion = Companion::new(store.clone(), timer, client, clock.clone());
    Fixture {
        companion,
        store,
        clock,
    }
}

fn two_sum() -> ProblemDetails {
    ProblemDetails {
        title: "Two Sum".to_string(),
        difficulty: Some(Difficulty::Easy),
        topics: vec!["Array".to_string(), "Hash Table".to_string()],
        url: "https://leetcode.com/problems/two-sum/".to_string(),
    }
}

fn success_reply() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "problem": {"id": "15", "title": "3Sum", "topic": "Two Pointers", "difficulty": "Medium",
                    "focus_area": "dedup", "url_slug": "3sum", "url": "https://leetcode.com/problems/3sum/"},
        "performance": {"topic": "Array", "ratio": "1.33", "message": "on track"}
    }))
}

#[tokio::test]
async fn test_page_load_stores_problem_and_starts_timer() {
    let f = fixture("http://127.0.0.1:1/api/next-problem");
    let reply = f.companion.on_page_load(&two_sum()).await.unwrap();
    assert!(reply.is_some());
    assert!(f.companion.timer().query().await.is_running);

    let stored: Option<ProblemDetails> = get_json(f.store.as_ref(), keys::CURRENT_PROBLEM)
        .await
        .unwrap();
    assert_eq!(stored, Some(two_sum()));
}

#[tokio::test]
async fn test_page_load_right_after_completion_does_not_start() {
    let f = fixture("http://127.0.0.1:1/api/next-problem");
    f.store
        .set(keys::LAST_COMPLETION_TIME, serde_json::json!(T0 - 500))
        .await
        .unwrap();

    let reply = f.companion.on_page_load(&two_sum()).await.unwrap();
    assert!(reply.is_none());
    assert!(!f.companion.timer().query().await.is_running);
}

#[tokio::test]
async fn test_completion_posts_minutes_and_stores_suggestion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/next-problem"))
        .and(body_partial_json(serde_json::json!({
            "last_problem": "Two Sum",
            "difficulty": "easy",
            "time_taken": 20,
            "topic": "Array"
        })))
        .respond_with(success_reply())
        .expect(1)
        .mount(&server)
        .await;

    let f = fixture(&format!("{}/api/next-problem", server.uri()));
    f.companion.on_page_load(&two_sum()).await.unwrap();
    f.clock.advance(20 * 60_000 + 59_000);

    let suggestion = f.companion.on_completion(&two_sum()).await.unwrap();
    assert_eq!(suggestion.title, "3Sum");

    assert_eq!(f.companion.next_problem().await.unwrap(), Some(suggestion));
    let last: Option<EpochMillis> = get_json(f.store.as_ref(), keys::LAST_COMPLETION_TIME)
        .await
        .unwrap();
    assert_eq!(last, Some(f.clock.now_millis()));
    assert!(!f.companion.timer().query().await.is_running);
}

#[tokio::test]
async fn test_completion_failure_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false, "error": "Internal server error"
        })))
        .mount(&server)
        .await;

    let f = fixture(&format!("{}/api/next-problem", server.uri()));
    f.companion.on_page_load(&two_sum()).await.unwrap();

    assert!(f.companion.on_completion(&two_sum()).await.is_none());
    assert!(f.companion.next_problem().await.unwrap().is_none());
    assert!(f.store.get(keys::LAST_COMPLETION_TIME).await.unwrap().is_none());
}

#[tokio::test]
async fn test_complete_current_without_problem() {
    let f = fixture("http://127.0.0.1:1/api/next-problem");
    let err = f.companion.complete_current().await.unwrap_err();
    assert!(matches!(err, CompanionError::NoCurrentProblem));
}

#[tokio::test]
async fn test_missing_topics_fall_back_to_general() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({"topic": "general", "difficulty": ""})))
        .respond_with(success_reply())
        .expect(1)
        .mount(&server)
        .await;

    let f = fixture(&format!("{}/api/next-problem", server.uri()));
    let details = ProblemDetails {
        title: "Mystery".to_string(),
        ..Default::default()
    };
    f.companion.on_page_load(&details).await.unwrap();
    assert!(f.companion.complete_current().await.is_ok());
}

#[tokio::test]
async fn test_start_journey() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "last_problem": "", "difficulty": "easy", "time_taken": 0, "topic": "arrays"
        })))
        .respond_with(success_reply())
        .expect(1)
        .mount(&server)
        .await;

    let f = fixture(&format!("{}/api/next-problem", server.uri()));
    let suggestion = f.companion.start_journey().await.unwrap();
    assert_eq!(suggestion.url_slug, "3sum");
    assert_eq!(
        f.store.get(keys::FIRST_TIME).await.unwrap(),
        Some(serde_json::Value::Bool(true))
    );
}

#[tokio::test]
async fn test_completion_after_stop_does_not_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(success_reply())
        .expect(0)
        .mount(&server)
        .await;

    let f = fixture(&format!("{}/api/next-problem", server.uri()));
    f.companion.on_page_load(&two_sum()).await.unwrap();
    f.clock.advance(20 * 60_000);
    f.companion.timer().stop().await.unwrap();
    f.clock.advance(60 * 60_000);

    assert!(f.companion.on_completion(&two_sum()).await.is_none());
    assert!(f.companion.next_problem().await.unwrap().is_none());
    assert!(f.store.get(keys::LAST_COMPLETION_TIME).await.unwrap().is_none());

    let err = f.companion.complete_current().await.unwrap_err();
    assert!(matches!(err, CompanionError::TimerNotRunning));
}

#[tokio::test]
async fn test_go_to_next_tracks_suggestion() {
    let f = fixture("http://127.0.0.1:1/api/next-problem");
    let suggestion = ProblemSuggestion {
        id: "15".to_string(),
        title: "3Sum".to_string(),
        topic: "Two Pointers".to_string(),
        difficulty: "Medium".to_string(),
        focus_area: "dedup".to_string(),
        url_slug: "3sum".to_string(),
        url: "https://leetcode.com/problems/3sum/".to_string(),
    };
    set_json(f.store.as_ref(), keys::NEXT_PROBLEM, &suggestion)
        .await
        .unwrap();

    let details = f.companion.go_to_next().await.unwrap();
    let expected = ProblemDetails {
        title: "3Sum".to_string(),
        difficulty: Some(Difficulty::Medium),
        topics: vec!["Two Pointers".to_string()],
        url: "https://leetcode.com/problems/3sum/".to_string(),
    };
    assert_eq!(details, expected);

    let stored: Option<ProblemDetails> = get_json(f.store.as_ref(), keys::CURRENT_PROBLEM)
        .await
        .unwrap();
    assert_eq!(stored, Some(expected));

    let state = f.companion.timer().query().await;
    assert!(state.is_running);
    assert_eq!(state.start_time, Some(T0));
}

#[tokio::test]
async fn test_go_to_next_without_suggestion() {
    let f = fixture("http://127.0.0.1:1/api/next-problem");
    let err = f.companion.go_to_next().await.unwrap_err();
    assert!(matches!(err, CompanionError::NoNextProblem));
    assert!(!f.companion.timer().query().await.is_running);
}
