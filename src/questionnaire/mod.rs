pub mod catalog;
pub mod flow;
pub mod prompt;
pub mod types;

pub use catalog::{question, QUESTIONS};
pub use flow::{FlowStep, Questionnaire};
pub use types::{Answer, AnswerSet, Question, QuestionId, QuestionKind};
