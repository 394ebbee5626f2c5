//! Fixed strings. Nothing here is interpolated.

use super::rules::{MessageKind, RuleId, TensionLevel};
use crate::outputs::result::Quote;

pub const REASON_AT_WORK: &str =
    "He is at work right now, and work can take up all of his focus and energy";
pub const REASON_WORKING_FROM_HOME: &str =
    "Working from home blurs the line between work and rest, so he may still be in work mode";
pub const REASON_HIGH_TENSION: &str =
    "There is a lot of tension right now, and he may just need some time to cool down";
pub const REASON_MEDIUM_TENSION: &str =
    "A little tension is normal between people who care about each other, and it usually passes quickly";
pub const REASON_STRESSED: &str = "He might be dealing with stress from work or personal matters";
pub const REASON_BUSY: &str = "He mentioned being busy, which means he has a lot on his plate";
pub const REASON_WEATHER: &str = "The weather can affect mood and energy levels";
pub const REASON_EARLY_MORNING: &str =
    "Early mornings can be tough, especially if he didn't sleep well";
pub const REASON_LATE_EVENING: &str = "Late evenings can be exhausting after a long day";
pub const REASON_MIDDAY: &str = "Lunchtime can be hectic with work deadlines";
pub const REASON_WORK_HOURS: &str =
    "During work hours his mind can be busy with tasks and responsibilities";

/// Appended together, in this order, when the fallback fires.
pub const FALLBACK_REASONS: [&str; 3] = [
    "Everyone has difficult moments, and it's not about you",
    "He might be overwhelmed with responsibilities",
    "Sometimes people need space to process their thoughts",
];

pub const MESSAGE_PATIENCE: &str = "Arkam is working right now and has a lot on his mind. \
    Please be patient with him. His mood has nothing to do with how much he loves you, \
    and once work is done he will give you his full attention. You're amazing, and he knows it! 💜";

pub const MESSAGE_GENERAL: &str = "Remember, Arkam loves you very much. \
    His behavior today doesn't reflect his feelings for you. \
    We all have challenging days, and sometimes we don't express ourselves the way we want to. \
    Give him some time and space, and things will get better. You're amazing, and he knows it! 💜";

pub const QUOTE_HIGH_TENSION: Quote = Quote {
    original: "الصبر مفتاح الفرج",
    translation: "Patience is the key to relief",
};
pub const QUOTE_MEDIUM_TENSION: Quote = Quote {
    original: "إن مع العسر يسرا",
    translation: "Indeed, with hardship comes ease",
};
pub const QUOTE_CALM: Quote = Quote {
    original: "الحب هو الحياة",
    translation: "Love is Life",
};

/// "What You Can Do" block shown under the reasons.
pub const TIPS: [&str; 3] = [
    "Send him a sweet message later",
    "Give him some time and space",
    "Remember that he cares about you",
];

pub fn reason(rule: RuleId) -> &'static str {
    match rule {
        RuleId::AtWork => REASON_AT_WORK,
        RuleId::WorkingFromHome => REASON_WORKING_FROM_HOME,
        RuleId::HighTension => REASON_HIGH_TENSION,
        RuleId::MediumTension => REASON_MEDIUM_TENSION,
        RuleId::Stressed => REASON_STRESSED,
        RuleId::Busy => REASON_BUSY,
        RuleId::Weather => REASON_WEATHER,
        RuleId::EarlyMorning => REASON_EARLY_MORNING,
        RuleId::LateEvening => REASON_LATE_EVENING,
        RuleId::Midday => REASON_MIDDAY,
        RuleId::WorkHours => REASON_WORK_HOURS,
    }
}

pub fn quote(level: TensionLevel) -> Quote {
    match level {
        TensionLevel::High => QUOTE_HIGH_TENSION,
        TensionLevel::Medium => QUOTE_MEDIUM_TENSION,
        TensionLevel::Calm => QUOTE_CALM,
    }
}

pub fn message(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Patience => MESSAGE_PATIENCE,
        MessageKind::General => MESSAGE_GENERAL,
    }
}
