//! The answer set travels between the questionnaire and the results view as a
//! flat JSON object of question key to string value.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::questionnaire::catalog::question;
use crate::questionnaire::types::{Answer, AnswerSet, QuestionId, QuestionKind};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("answer set is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("answer set must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Decodes the flat mapping. Unknown keys and non-string values are dropped.
pub fn decode(raw: &str) -> Result<AnswerSet, TransportError> {
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(map) => Ok(from_map(&map)),
        other => Err(TransportError::NotAnObject(json_type(&other))),
    }
}

pub fn from_map(map: &Map<String, Value>) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (key, value) in map {
        let Some(id) = QuestionId::from_key(key) else {
            tracing::debug!(key = %key, "ignoring unknown answer key");
            continue;
        };
        let Value::String(raw) = value else {
            tracing::debug!(key = %key, kind = json_type(value), "ignoring non-string answer");
            continue;
        };
        answers.insert(id, answer_for(id, raw));
    }
    answers
}

/// Tags a raw string with the kind of the question it answers.
pub fn answer_for(id: QuestionId, raw: &str) -> Answer {
    match question(id).kind {
        QuestionKind::YesNo => match raw {
            "yes" => Answer::YesNo(true),
            "no" => Answer::YesNo(false),
            other => Answer::Choice(other.to_string()),
        },
        QuestionKind::Select => Answer::Choice(raw.to_string()),
        QuestionKind::DateTime => Answer::DateTime(raw.to_string()),
    }
}

pub fn to_map(answers: &AnswerSet) -> Map<String, Value> {
    answers
        .iter()
        .map(|(id, answer)| (id.key().to_string(), Value::String(answer.as_wire().to_string())))
        .collect()
}

pub fn encode(answers: &AnswerSet) -> String {
    Value::Object(to_map(answers)).to_string()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
