use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::questionnaire::types::AnswerSet;
use crate::transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Ask the questions on stdin.
    Interactive,
    /// Flat JSON answer mapping given on the command line.
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputMode,
    pub output: OutputFormat,
}

impl RunConfig {
    /// Resolves a one-shot answer set. `None` in interactive mode.
    pub fn preset_answers(&self) -> Result<Option<AnswerSet>> {
        let raw = match &self.input {
            InputMode::Interactive => return Ok(None),
            InputMode::Inline(raw) => raw.clone(),
            InputMode::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading answers from {}", path.display()))?,
        };
        let answers = transport::decode(&raw).context("decoding answer set")?;
        Ok(Some(answers))
    }
}
