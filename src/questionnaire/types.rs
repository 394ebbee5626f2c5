use std::collections::BTreeMap;

/// Identifier of one question in the fixed catalog.
/// Variant order is questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    Date,
    Time,
    Weather,
    WorkStatus,
    Tension,
    Shouted,
    NotTalkingWell,
    Distant,
    Stressed,
    Busy,
}

impl QuestionId {
    pub const ALL: [QuestionId; 10] = [
        QuestionId::Date,
        QuestionId::Time,
        QuestionId::Weather,
        QuestionId::WorkStatus,
        QuestionId::Tension,
        QuestionId::Shouted,
        QuestionId::NotTalkingWell,
        QuestionId::Distant,
        QuestionId::Stressed,
        QuestionId::Busy,
    ];

    /// Key used in the flat answer mapping.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::Date => "date",
            QuestionId::Time => "time",
            QuestionId::Weather => "weather",
            QuestionId::WorkStatus => "workStatus",
            QuestionId::Tension => "tension",
            QuestionId::Shouted => "shouted",
            QuestionId::NotTalkingWell => "notTalkingWell",
            QuestionId::Distant => "distant",
            QuestionId::Stressed => "stressed",
            QuestionId::Busy => "busy",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    YesNo,
    Select,
    DateTime,
}

/// A static question. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// Only populated for `QuestionKind::Select`.
    pub options: &'static [&'static str],
}

/// One recorded answer, tagged by the kind of question it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    YesNo(bool),
    /// Raw option text. Unknown strings are kept so rules can fall into their default branch.
    Choice(String),
    /// ISO-8601 timestamp as produced by the date/time picker.
    DateTime(String),
}

impl Answer {
    /// Wire form: "yes"/"no", the option text, or the timestamp.
    pub fn as_wire(&self) -> &str {
        match self {
            Answer::YesNo(true) => "yes",
            Answer::YesNo(false) => "no",
            Answer::Choice(s) | Answer::DateTime(s) => s,
        }
    }
}

/// Answers collected during one questionnaire run, keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    /// Builder form of `insert`, handy for fixtures.
    pub fn with(mut self, id: QuestionId, answer: Answer) -> Self {
        self.answers.insert(id, answer);
        self
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    /// True only for an explicit "yes".
    pub fn is_yes(&self, id: QuestionId) -> bool {
        matches!(self.answers.get(&id), Some(Answer::YesNo(true)))
    }

    /// Option text for a select question, if answered.
    pub fn choice(&self, id: QuestionId) -> Option<&str> {
        match self.answers.get(&id) {
            Some(Answer::Choice(s)) => Some(s),
            _ => None,
        }
    }

    pub fn timestamp(&self, id: QuestionId) -> Option<&str> {
        match self.answers.get(&id) {
            Some(Answer::DateTime(s)) => Some(s),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
