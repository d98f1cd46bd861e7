use super::*;

#[test]
fn test_difficulty_benchmarks() {
    assert_eq!(Difficulty::Easy.benchmark_minutes(), 15);
    assert_eq!(Difficulty::Medium.benchmark_minutes(), 30);
    assert_eq!(Difficulty::Hard.benchmark_minutes(), 45);
}

#[test]
fn test_difficulty_from_str_is_lenient_about_case_and_space() {
    assert_eq!(" Medium\n".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("extreme".parse::<Difficulty>().is_err());
    assert!("".parse::<Difficulty>().is_err());
}

#[test]
fn test_difficulty_serialization() {
    let json = serde_json::to_string(&Difficulty::Easy).unwrap();
    assert_eq!(json, "\"easy\"");
    let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
    assert_eq!(parsed, Difficulty::Hard);
}

#[test]
fn test_primary_topic_defaults_to_general() {
    let mut details = ProblemDetails::default();
    assert_eq!(details.primary_topic(), "general");

    details.topics = vec!["Array".to_string(), "Hash Table".to_string()];
    assert_eq!(details.primary_topic(), "Array");
}

#[test]
fn test_timer_state_wire_format_is_camel_case() {
    let state = TimerState::running(1_000);
    let json = serde_json::to_value(state).unwrap();
    assert_eq!(json["isRunning"], true);
    assert_eq!(json["startTime"], 1_000);
    assert_eq!(json["elapsed"], 0);

    let stopped: TimerState =
        serde_json::from_str(r#"{"isRunning":false,"startTime":null,"elapsed":4200}"#).unwrap();
    assert_eq!(stopped, TimerState::stopped(4_200));
}

#[test]
fn test_timer_state_phase() {
    assert_eq!(TimerState::idle().phase(), TimerPhase::Idle);
    assert_eq!(TimerState::running(5).phase(), TimerPhase::Running);
    assert_eq!(TimerState::stopped(10).phase(), TimerPhase::Stopped);
}

#[test]
fn test_elapsed_at_never_negative() {
    let state = TimerState::running(10_000);
    assert_eq!(state.elapsed_at(12_500), 2_500);
    assert_eq!(state.elapsed_at(9_000), 0);
    assert_eq!(TimerState::stopped(700).elapsed_at(1_000_000), 700);
}

#[test]
fn test_elapsed_minutes_floors() {
    assert_eq!(TimerState::stopped(59_999).elapsed_minutes(), 0);
    assert_eq!(TimerState::stopped(125_000).elapsed_minutes(), 2);
}

#[test]
fn test_timer_request_actions() {
    let req: TimerRequest = serde_json::from_str(r#"{"action":"startTimer"}"#).unwrap();
    assert_eq!(req, TimerRequest::StartTimer);
    let req: TimerRequest = serde_json::from_str(r#"{"action":"getTimerState"}"#).unwrap();
    assert_eq!(req, TimerRequest::GetTimerState);
    assert!(serde_json::from_str::<TimerRequest>(r#"{"action":"pauseTimer"}"#).is_err());
}

#[test]
fn test_timer_response_omits_missing_status() {
    let json = serde_json::to_value(TimerResponse::state_only(TimerState::idle())).unwrap();
    assert!(json.get("status").is_none());
    assert!(json.get("timerState").is_some());

    let json =
        serde_json::to_value(TimerResponse::with_status("Timer reset", TimerState::idle())).unwrap();
    assert_eq!(json["status"], "Timer reset");
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(61_000), "00:01:01");
    assert_eq!(format_elapsed(3_725_999), "01:02:05");
}

#[test]
fn test_next_problem_response_failure_shape() {
    let body = NextProblemResponse {
        success: false,
        problem: None,
        performance: None,
        error: Some("boom".to_string()),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json.get("problem").is_none());
    assert_eq!(json["error"], "boom");
}
