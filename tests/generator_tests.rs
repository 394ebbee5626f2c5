use understanding::generator::templates::*;
use understanding::generator::{evaluate, generate};
use understanding::questionnaire::types::{Answer, AnswerSet, QuestionId};
use understanding::transport;
use serde_json::json;

fn answers(value: serde_json::Value) -> AnswerSet {
    transport::decode(&value.to_string()).unwrap()
}

fn at_hour(hour: u32) -> AnswerSet {
    AnswerSet::new().with(QuestionId::Time, Answer::DateTime(format!("2024-01-01T{:02}:15:00Z", hour)))
}

#[test]
fn test_empty_answers_get_exactly_the_fallback() {
    let result = generate(&AnswerSet::new());

    assert_eq!(result.reasons, FALLBACK_REASONS.to_vec());
    assert_eq!(result.main_message, MESSAGE_GENERAL);
    assert_eq!(result.quote, Some(QUOTE_CALM), "Unasked tension still yields the calm quote");
    assert_eq!(result.tips, TIPS.to_vec());
}

#[test]
fn test_totality_over_odd_inputs() {
    let inputs = vec![
        json!({}),
        json!({"workStatus": "On the moon", "tension": "???", "time": "not a time"}),
        json!({"stressed": "maybe", "busy": "YES", "shouted": "no"}),
        json!({"weather": "Sunny", "distant": "yes", "date": "2024-01-01T00:00:00Z"}),
        json!({"time": "2024-01-01T19:30:00Z"}),
    ];
    for input in inputs {
        let result = generate(&answers(input.clone()));
        assert!(!result.main_message.is_empty(), "{input}");
        assert!(!result.reasons.is_empty(), "{input}");
        assert!(result.quote.is_some(), "{input}");
    }
}

#[test]
fn test_worked_example() {
    let result = generate(&answers(json!({
        "workStatus": "At Work",
        "tension": "Yes, a lot",
        "stressed": "yes",
        "time": "2024-01-01T07:30:00Z",
    })));

    assert_eq!(
        result.reasons,
        vec![REASON_AT_WORK, REASON_HIGH_TENSION, REASON_STRESSED, REASON_EARLY_MORNING]
    );
    assert_eq!(result.main_message, MESSAGE_PATIENCE);
    assert_eq!(result.quote, Some(QUOTE_HIGH_TENSION));
}

#[test]
fn test_tension_selects_exactly_one_quote() {
    let cases = [
        (Some("Yes, a lot"), QUOTE_HIGH_TENSION, Some(REASON_HIGH_TENSION)),
        (Some("A little bit"), QUOTE_MEDIUM_TENSION, Some(REASON_MEDIUM_TENSION)),
        (Some("Not really"), QUOTE_CALM, None),
        (Some("yes, a lot"), QUOTE_CALM, None),
        (Some(""), QUOTE_CALM, None),
        (None, QUOTE_CALM, None),
    ];
    for (tension, quote, reason) in cases {
        let mut set = AnswerSet::new();
        if let Some(t) = tension {
            set.insert(QuestionId::Tension, Answer::Choice(t.to_string()));
        }
        let result = generate(&set);
        assert_eq!(result.quote, Some(quote), "tension {tension:?}");
        assert_eq!(
            result.reasons.contains(&REASON_HIGH_TENSION.to_string())
                || result.reasons.contains(&REASON_MEDIUM_TENSION.to_string()),
            reason.is_some(),
            "tension {tension:?}"
        );
        if let Some(r) = reason {
            assert_eq!(result.reasons[0], r);
        }
    }
}

#[test]
fn test_patience_message_only_for_working_states() {
    for (status, patient) in [
        ("At Work", true),
        ("Working from Home", true),
        ("Not Working", false),
        ("at work", false),
        ("Retired", false),
    ] {
        let result = generate(&answers(json!({ "workStatus": status })));
        assert_eq!(result.main_message == MESSAGE_PATIENCE, patient, "workStatus {status}");
    }
    assert_eq!(generate(&AnswerSet::new()).main_message, MESSAGE_GENERAL);
}

#[test]
fn test_work_status_reasons() {
    let home = generate(&answers(json!({ "workStatus": "Working from Home" })));
    assert_eq!(home.reasons, vec![REASON_WORKING_FROM_HOME]);

    // Not working contributes nothing, so the fallback fills in.
    let idle = generate(&answers(json!({ "workStatus": "Not Working" })));
    assert_eq!(idle.reasons, FALLBACK_REASONS.to_vec());
}

#[test]
fn test_time_bucket_boundaries() {
    let has = |hour: u32, reason: &str| generate(&at_hour(hour)).reasons.iter().any(|r| r == reason);

    assert!(has(7, REASON_EARLY_MORNING));
    assert!(!has(8, REASON_EARLY_MORNING));
    assert!(!has(8, REASON_MIDDAY));
    assert!(!has(8, REASON_WORK_HOURS));
    assert!(has(12, REASON_MIDDAY));
    assert!(has(14, REASON_MIDDAY));
    assert!(!has(12, REASON_WORK_HOURS), "Midday excludes the work-hours bucket");
    assert!(has(15, REASON_WORK_HOURS));
    assert!(has(9, REASON_WORK_HOURS));
    assert!(has(18, REASON_WORK_HOURS));
    assert!(has(21, REASON_LATE_EVENING));

    // Unbucketed hours leave reasons empty, so only the fallback shows.
    for hour in [8, 19, 20] {
        assert_eq!(generate(&at_hour(hour)).reasons, FALLBACK_REASONS.to_vec(), "hour {hour}");
    }
}

#[test]
fn test_minute_precision_timestamps_with_offsets_are_bucketed() {
    for time in ["2024-01-01T07:30Z", "2024-01-01T07:30+05:30", "2024-01-01T07:30:00.000+0000"] {
        let result = generate(&answers(json!({ "time": time })));
        assert_eq!(result.reasons, vec![REASON_EARLY_MORNING], "time {time}");
    }
    let result = generate(&answers(json!({ "time": "2024-01-01T13:05-03:00" })));
    assert_eq!(result.reasons, vec![REASON_MIDDAY]);
}

#[test]
fn test_unparseable_time_contributes_nothing() {
    let set = AnswerSet::new().with(QuestionId::Time, Answer::DateTime("half past seven".into()));
    assert_eq!(generate(&set).reasons, FALLBACK_REASONS.to_vec());
}

#[test]
fn test_fallback_is_additive_on_shouting() {
    let result = generate(&answers(json!({ "stressed": "yes", "shouted": "yes" })));

    let mut expected = vec![REASON_STRESSED];
    expected.extend(FALLBACK_REASONS);
    assert_eq!(result.reasons, expected);
}

#[test]
fn test_fallback_on_not_talking_nicely() {
    let result = generate(&answers(json!({ "busy": "yes", "notTalkingWell": "yes" })));
    assert_eq!(result.reasons.len(), 4);
    assert_eq!(result.reasons[0], REASON_BUSY);

    // Without either trigger the fallback stays out.
    let quiet = generate(&answers(json!({ "busy": "yes", "shouted": "no", "notTalkingWell": "no" })));
    assert_eq!(quiet.reasons, vec![REASON_BUSY]);
}

#[test]
fn test_gloomy_weather_reason() {
    for weather in ["Rainy", "Stormy", "Cold"] {
        let result = generate(&answers(json!({ "weather": weather })));
        assert_eq!(result.reasons, vec![REASON_WEATHER], "{weather}");
    }
    for weather in ["Sunny", "Cloudy", "Hot"] {
        let result = generate(&answers(json!({ "weather": weather })));
        assert!(!result.reasons.contains(&REASON_WEATHER.to_string()), "{weather}");
    }
}

#[test]
fn test_rules_keep_their_order() {
    let result = generate(&answers(json!({
        "time": "2024-01-01T22:00:00Z",
        "weather": "Rainy",
        "busy": "yes",
        "stressed": "yes",
        "tension": "A little bit",
        "workStatus": "Working from Home",
    })));

    assert_eq!(
        result.reasons,
        vec![
            REASON_WORKING_FROM_HOME,
            REASON_MEDIUM_TENSION,
            REASON_STRESSED,
            REASON_BUSY,
            REASON_WEATHER,
            REASON_LATE_EVENING,
        ]
    );
}

#[test]
fn test_evaluate_matches_generate_and_ends_with_message() {
    let set = answers(json!({ "workStatus": "At Work", "shouted": "yes" }));
    let evaluation = evaluate(&set);

    assert_eq!(evaluation.result, generate(&set));
    assert!(matches!(
        evaluation.trace.last(),
        Some(understanding::telemetry::event::GenerationEvent::MessageSelected(_))
    ));
}
