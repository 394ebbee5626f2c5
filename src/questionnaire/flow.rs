use uuid::Uuid;

use super::catalog::QUESTIONS;
use super::types::{Answer, AnswerSet, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the flow ended up after an `answer` or `back`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    /// Moved forward to this question index.
    Next(usize),
    /// Moved back to this question index.
    Previous(usize),
    /// Last question answered. The answers are handed off.
    Complete(AnswerSet),
    /// Back was pressed on the first question.
    Exited,
}

/// Per-run questionnaire state: current index plus answers so far.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub run_id: RunId,
    questions: &'static [Question],
    index: usize,
    answers: AnswerSet,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS)
    }

    pub fn with_questions(questions: &'static [Question]) -> Self {
        Self {
            run_id: RunId::new(),
            questions,
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn current(&self) -> Option<&'static Question> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Percentage of the questionnaire reached, counting the current question.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 100.0;
        }
        ((self.index + 1) as f32 / self.questions.len() as f32) * 100.0
    }

    /// Records an answer for the current question and advances.
    pub fn answer(&mut self, answer: Answer) -> FlowStep {
        let Some(question) = self.current() else {
            return FlowStep::Complete(self.answers.clone());
        };
        self.answers.insert(question.id, answer);

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            tracing::debug!(run = %self.run_id.0, index = self.index, "questionnaire advanced");
            FlowStep::Next(self.index)
        } else {
            tracing::debug!(run = %self.run_id.0, answered = self.answers.len(), "questionnaire complete");
            FlowStep::Complete(self.answers.clone())
        }
    }

    /// Steps back one question. Earlier answers are kept.
    pub fn back(&mut self) -> FlowStep {
        if self.index == 0 {
            return FlowStep::Exited;
        }
        self.index -= 1;
        FlowStep::Previous(self.index)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}
