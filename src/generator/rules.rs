use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Every situational rule that can contribute a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleId {
    AtWork,
    WorkingFromHome,
    HighTension,
    MediumTension,
    Stressed,
    Busy,
    Weather,
    EarlyMorning,
    LateEvening,
    Midday,
    WorkHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    AtWork,
    WorkingFromHome,
    NotWorking,
}

impl WorkStatus {
    /// `None` for anything that is not one of the catalog options.
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "At Work" => Some(Self::AtWork),
            "Working from Home" => Some(Self::WorkingFromHome),
            "Not Working" => Some(Self::NotWorking),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::AtWork | Self::WorkingFromHome)
    }

    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Self::AtWork => Some(RuleId::AtWork),
            Self::WorkingFromHome => Some(RuleId::WorkingFromHome),
            Self::NotWorking => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensionLevel {
    High,
    Medium,
    Calm,
}

impl TensionLevel {
    /// Total: unanswered and unrecognised values are `Calm`.
    pub fn classify(value: Option<&str>) -> Self {
        match value {
            Some("Yes, a lot") => Self::High,
            Some("A little bit") => Self::Medium,
            _ => Self::Calm,
        }
    }

    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Self::High => Some(RuleId::HighTension),
            Self::Medium => Some(RuleId::MediumTension),
            Self::Calm => None,
        }
    }
}

pub fn is_gloomy_weather(value: &str) -> bool {
    matches!(value, "Rainy" | "Stormy" | "Cold")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    EarlyMorning,
    LateEvening,
    Midday,
    WorkHours,
}

impl TimeBucket {
    /// First match wins. Hours 8, 19 and 20 fall in no bucket.
    pub fn from_hour(hour: u32) -> Option<Self> {
        if hour < 8 {
            Some(Self::EarlyMorning)
        } else if hour > 20 {
            Some(Self::LateEvening)
        } else if (12..=14).contains(&hour) {
            Some(Self::Midday)
        } else if (9..=18).contains(&hour) {
            Some(Self::WorkHours)
        } else {
            None
        }
    }

    pub fn rule(&self) -> RuleId {
        match self {
            Self::EarlyMorning => RuleId::EarlyMorning,
            Self::LateEvening => RuleId::LateEvening,
            Self::Midday => RuleId::Midday,
            Self::WorkHours => RuleId::WorkHours,
        }
    }
}

/// Hour of day as written in the timestamp, i.e. in its own offset.
/// Timestamps without an offset are read as-is.
pub fn hour_of_day(timestamp: &str) -> Option<u32> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.hour());
    }
    // `%#z` takes `Z`, `+05`, `+0530` and `+05:30`.
    for format in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(timestamp, format) {
            return Some(dt.hour());
        }
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|dt| dt.hour())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// "He is working, be patient."
    Patience,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallbackTrigger {
    NoSituationalReason,
    Shouted,
    NotTalkingWell,
}
