//! Trigger logging
//!
//! Every activation decision is appended to a JSONL trigger log so rule
//! sets can be tuned against what actually fired. Logging is diagnostic
//! only: it is best-effort, size-rotated, and never propagates an error
//! into the activation result.

pub mod event;
pub mod writer;

pub use event::TriggerLogEvent;
pub use writer::{TriggerLogWriter, MAX_LOG_BYTES};
