use super::types::{Question, QuestionId, QuestionKind};

pub const WEATHER_OPTIONS: &[&str] = &["Sunny", "Rainy", "Cloudy", "Stormy", "Cold", "Hot"];
pub const WORK_STATUS_OPTIONS: &[&str] = &["At Work", "Working from Home", "Not Working"];
pub const TENSION_OPTIONS: &[&str] = &["Yes, a lot", "A little bit", "Not really"];

const fn yes_no(id: QuestionId, prompt: &'static str) -> Question {
    Question { id, prompt, kind: QuestionKind::YesNo, options: &[] }
}

/// The fixed questionnaire, in the order it is asked.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: QuestionId::Date,
        prompt: "What is today's date?",
        kind: QuestionKind::DateTime,
        options: &[],
    },
    Question {
        id: QuestionId::Time,
        prompt: "What time did this happen?",
        kind: QuestionKind::DateTime,
        options: &[],
    },
    Question {
        id: QuestionId::Weather,
        prompt: "How is the weather today?",
        kind: QuestionKind::Select,
        options: WEATHER_OPTIONS,
    },
    Question {
        id: QuestionId::WorkStatus,
        prompt: "Is Arkam working right now?",
        kind: QuestionKind::Select,
        options: WORK_STATUS_OPTIONS,
    },
    Question {
        id: QuestionId::Tension,
        prompt: "Was there tension between you?",
        kind: QuestionKind::Select,
        options: TENSION_OPTIONS,
    },
    yes_no(QuestionId::Shouted, "Did Arkam shout at you?"),
    yes_no(QuestionId::NotTalkingWell, "Was Arkam not talking nicely?"),
    yes_no(QuestionId::Distant, "Was Arkam being distant?"),
    yes_no(QuestionId::Stressed, "Did Arkam seem stressed?"),
    yes_no(QuestionId::Busy, "Did Arkam mention being busy?"),
];

/// Catalog entry for an id. Every `QuestionId` has exactly one.
pub fn question(id: QuestionId) -> &'static Question {
    // QUESTIONS is laid out in QuestionId order.
    &QUESTIONS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_id_order() {
        assert_eq!(QUESTIONS.len(), QuestionId::ALL.len());
        for (q, id) in QUESTIONS.iter().zip(QuestionId::ALL) {
            assert_eq!(q.id, id);
            assert_eq!(question(id).id, id);
        }
    }

    #[test]
    fn only_select_questions_carry_options() {
        for q in QUESTIONS {
            assert_eq!(q.kind == QuestionKind::Select, !q.options.is_empty(), "{:?}", q.id);
        }
    }
}
