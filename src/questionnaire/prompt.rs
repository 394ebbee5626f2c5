//! Turns a line typed at the terminal into an `Answer` for the current question.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};

use super::types::{Answer, Question, QuestionKind};

/// Returns `None` when the reply is unusable and the question should be asked again.
///
/// `now` anchors the relative forms (`now`, `HH:MM`, `YYYY-MM-DD`).
pub fn parse_reply(question: &Question, input: &str, now: DateTime<FixedOffset>) -> Option<Answer> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match question.kind {
        QuestionKind::YesNo => match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(Answer::YesNo(true)),
            "n" | "no" => Some(Answer::YesNo(false)),
            _ => None,
        },
        QuestionKind::Select => {
            if let Ok(n) = input.parse::<usize>() {
                return question
                    .options
                    .get(n.checked_sub(1)?)
                    .map(|o| Answer::Choice((*o).to_string()));
            }
            question
                .options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(input))
                .map(|o| Answer::Choice((*o).to_string()))
        }
        QuestionKind::DateTime => parse_moment(input, now).map(Answer::DateTime),
    }
}

fn parse_moment(input: &str, now: DateTime<FixedOffset>) -> Option<String> {
    let at = if input.eq_ignore_ascii_case("now") {
        now
    } else if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        dt
    } else if let Ok(t) = NaiveTime::parse_from_str(input, "%H:%M") {
        now.date_naive().and_time(t).and_local_timezone(*now.offset()).single()?
    } else if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        d.and_time(NaiveTime::MIN).and_local_timezone(*now.offset()).single()?
    } else {
        return None;
    };
    Some(at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Navigation words understood at any question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Back,
    Quit,
}

pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("back") {
        Some(Command::Back)
    } else if input.eq_ignore_ascii_case("quit") {
        Some(Command::Quit)
    } else {
        None
    }
}

/// One-line hint shown under the prompt.
pub fn reply_hint(question: &Question) -> String {
    match question.kind {
        QuestionKind::YesNo => "[y/n]".to_string(),
        QuestionKind::Select => question
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {}", i + 1, o))
            .collect::<Vec<_>>()
            .join("  "),
        QuestionKind::DateTime => "[now | HH:MM | YYYY-MM-DD | RFC 3339]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::catalog::question;
    use crate::questionnaire::types::QuestionId;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-05T16:45:00Z").unwrap()
    }

    #[test]
    fn yes_no_replies() {
        let q = question(QuestionId::Shouted);
        assert_eq!(parse_reply(q, "Y", now()), Some(Answer::YesNo(true)));
        assert_eq!(parse_reply(q, " no ", now()), Some(Answer::YesNo(false)));
        assert_eq!(parse_reply(q, "maybe", now()), None);
    }

    #[test]
    fn select_by_number_or_text() {
        let q = question(QuestionId::WorkStatus);
        assert_eq!(parse_reply(q, "2", now()), Some(Answer::Choice("Working from Home".into())));
        assert_eq!(parse_reply(q, "at work", now()), Some(Answer::Choice("At Work".into())));
        assert_eq!(parse_reply(q, "0", now()), None);
        assert_eq!(parse_reply(q, "4", now()), None);
        assert_eq!(parse_reply(q, "on holiday", now()), None);
    }

    #[test]
    fn commands_ignore_case_and_padding() {
        assert_eq!(parse_command("back"), Some(Command::Back));
        assert_eq!(parse_command("  Back "), Some(Command::Back));
        assert_eq!(parse_command("QUIT"), Some(Command::Quit));
        assert_eq!(parse_command("backwards"), None);
        assert_eq!(parse_command("yes"), None);
    }

    #[test]
    fn moments_are_normalised_to_rfc3339() {
        let q = question(QuestionId::Time);
        assert_eq!(parse_reply(q, "now", now()), Some(Answer::DateTime("2024-03-05T16:45:00Z".into())));
        assert_eq!(parse_reply(q, "07:30", now()), Some(Answer::DateTime("2024-03-05T07:30:00Z".into())));
        assert_eq!(
            parse_reply(q, "2024-01-01T21:10:00+02:00", now()),
            Some(Answer::DateTime("2024-01-01T21:10:00+02:00".into()))
        );
        assert_eq!(parse_reply(q, "2024-02-29", now()), Some(Answer::DateTime("2024-02-29T00:00:00Z".into())));
        assert_eq!(parse_reply(q, "teatime", now()), None);
    }
}
