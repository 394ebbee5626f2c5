use serde::{Deserialize, Serialize};

use crate::generator::rules::{FallbackTrigger, MessageKind, RuleId, TensionLevel};

// Allowed: rule ids, branch enums
// Forbidden: answer values, reasons, messages

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationEvent {
    RuleFired(RuleId),
    FallbackApplied(FallbackTrigger),
    QuoteSelected(TensionLevel),
    /// Always the last event of a generation.
    MessageSelected(MessageKind),
}
