//! Generation telemetry.
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain answers or generated text.
//! Only rule identifiers, selected branches and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
