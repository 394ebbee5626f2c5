//! Maps a completed answer set to the reassurance shown on the results screen.
//!
//! Pure: no I/O, no clock, no randomness. Every input, including an empty
//! answer set, yields a non-empty message and at least one reason.

pub mod rules;
pub mod templates;

use crate::outputs::result::GenerationResult;
use crate::questionnaire::types::{AnswerSet, QuestionId};
use crate::telemetry::event::GenerationEvent;
use rules::{FallbackTrigger, MessageKind, RuleId, TensionLevel, TimeBucket, WorkStatus};

/// A result together with the content-free record of how it was reached.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: GenerationResult,
    pub trace: Vec<GenerationEvent>,
}

pub fn generate(answers: &AnswerSet) -> GenerationResult {
    evaluate(answers).result
}

pub fn evaluate(answers: &AnswerSet) -> Evaluation {
    let mut fired: Vec<RuleId> = Vec::new();
    let mut trace = Vec::new();

    let work_status = answers.choice(QuestionId::WorkStatus).and_then(WorkStatus::from_answer);
    if let Some(rule) = work_status.and_then(|w| w.rule()) {
        fired.push(rule);
    }

    let tension = TensionLevel::classify(answers.choice(QuestionId::Tension));
    if let Some(rule) = tension.rule() {
        fired.push(rule);
    }

    if answers.is_yes(QuestionId::Stressed) {
        fired.push(RuleId::Stressed);
    }
    if answers.is_yes(QuestionId::Busy) {
        fired.push(RuleId::Busy);
    }
    if answers.choice(QuestionId::Weather).is_some_and(rules::is_gloomy_weather) {
        fired.push(RuleId::Weather);
    }

    if let Some(bucket) = answers
        .timestamp(QuestionId::Time)
        .and_then(rules::hour_of_day)
        .and_then(TimeBucket::from_hour)
    {
        fired.push(bucket.rule());
    }

    let mut reasons: Vec<String> = fired.iter().map(|r| templates::reason(*r).to_string()).collect();
    trace.extend(fired.iter().copied().map(GenerationEvent::RuleFired));

    let fallback = if fired.is_empty() {
        Some(FallbackTrigger::NoSituationalReason)
    } else if answers.is_yes(QuestionId::Shouted) {
        Some(FallbackTrigger::Shouted)
    } else if answers.is_yes(QuestionId::NotTalkingWell) {
        Some(FallbackTrigger::NotTalkingWell)
    } else {
        None
    };
    if let Some(trigger) = fallback {
        reasons.extend(templates::FALLBACK_REASONS.iter().map(|r| r.to_string()));
        trace.push(GenerationEvent::FallbackApplied(trigger));
    }

    trace.push(GenerationEvent::QuoteSelected(tension));

    let kind = if work_status.is_some_and(|w| w.is_busy()) {
        MessageKind::Patience
    } else {
        MessageKind::General
    };
    trace.push(GenerationEvent::MessageSelected(kind));

    tracing::debug!(rules = fired.len(), fallback = fallback.is_some(), ?tension, ?kind, "generated reassurance");

    Evaluation {
        result: GenerationResult {
            main_message: templates::message(kind).to_string(),
            reasons,
            quote: Some(templates::quote(tension)),
            tips: templates::TIPS.to_vec(),
        },
        trace,
    }
}
