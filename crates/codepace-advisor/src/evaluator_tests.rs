use super::*;

#[test]
fn test_easy_slightly_over_is_on_track() {
    let evaluator = PerformanceEvaluator::new();
    let eval = evaluator.evaluate("arrays", Difficulty::Easy, 20);
    assert!((eval.ratio - 1.333).abs() < 0.01);
    assert_eq!(eval.band, PerformanceBand::OnTrack);
    assert_eq!(eval.summary().ratio, "1.33");
}

#[test]
fn test_medium_far_over_needs_practice() {
    let evaluator = PerformanceEvaluator::new();
    let eval = evaluator.evaluate("graphs", Difficulty::Medium, 50);
    assert_eq!(eval.band, PerformanceBand::NeedsPractice);
    assert_eq!(eval.summary().ratio, "1.67");
}

#[test]
fn test_hard_fast_is_proficient() {
    let evaluator = PerformanceEvaluator::new();
    let eval = evaluator.evaluate("dp", Difficulty::Hard, 10);
    assert_eq!(eval.band, PerformanceBand::Proficient);
    assert_eq!(eval.summary().ratio, "0.22");
}

#[test]
fn test_boundaries_are_on_track() {
    assert_eq!(classify(1.5), PerformanceBand::OnTrack);
    assert_eq!(classify(0.7), PerformanceBand::OnTrack);
    assert_eq!(classify(1.5001), PerformanceBand::NeedsPractice);
    assert_eq!(classify(0.6999), PerformanceBand::Proficient);
    assert_eq!(classify(0.0), PerformanceBand::Proficient);
}

#[test]
fn test_history_is_per_topic_and_ordered() {
    let evaluator = PerformanceEvaluator::new();
    evaluator.evaluate("arrays", Difficulty::Easy, 15);
    evaluator.evaluate("arrays", Difficulty::Easy, 30);
    evaluator.evaluate("trees", Difficulty::Hard, 45);

    assert_eq!(evaluator.history("arrays"), vec![1.0, 2.0]);
    assert_eq!(evaluator.history("trees"), vec![1.0]);
    assert!(evaluator.history("unknown").is_empty());
    assert_eq!(evaluator.topic_count(), 2);
}

#[test]
fn test_summary_message_mentions_topic() {
    let evaluator = PerformanceEvaluator::new();
    let summary = evaluator.evaluate("strings", Difficulty::Medium, 30).summary();
    assert_eq!(summary.topic, "strings");
    assert!(summary.message.contains("strings"));
}

#[test]
fn test_prompt_annotation_names_band() {
    let annotation = PerformanceBand::NeedsPractice.prompt_annotation(1.67);
    assert!(annotation.contains("needs practice"));
    assert!(annotation.contains("1.67"));
    assert!(PerformanceBand::Proficient
        .prompt_annotation(0.2)
        .contains("harder"));
}
