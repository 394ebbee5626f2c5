pub mod config;
pub mod generator;
pub mod outputs;
pub mod questionnaire;
pub mod telemetry;
pub mod transport;

pub use generator::{evaluate, generate};
pub use outputs::result::GenerationResult;
pub use questionnaire::types::{Answer, AnswerSet};
