use std::collections::{BTreeMap, VecDeque};

use super::event::GenerationEvent;
use crate::generator::rules::{MessageKind, RuleId, TensionLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    pub generations: u64,
    pub rules_fired: BTreeMap<RuleId, u64>,
    pub fallbacks: u64,
    pub quote_stats: QuoteStats,
    pub patience_messages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStats {
    pub high: u64,
    pub medium: u64,
    pub calm: u64,
}

pub fn compute_snapshot(events: &VecDeque<GenerationEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            GenerationEvent::RuleFired(rule) => {
                *snap.rules_fired.entry(*rule).or_insert(0) += 1;
            }
            GenerationEvent::FallbackApplied(_) => snap.fallbacks += 1,
            GenerationEvent::QuoteSelected(level) => match level {
                TensionLevel::High => snap.quote_stats.high += 1,
                TensionLevel::Medium => snap.quote_stats.medium += 1,
                TensionLevel::Calm => snap.quote_stats.calm += 1,
            },
            GenerationEvent::MessageSelected(kind) => {
                // One per generation.
                snap.generations += 1;
                if *kind == MessageKind::Patience {
                    snap.patience_messages += 1;
                }
            }
        }
    }

    snap
}
