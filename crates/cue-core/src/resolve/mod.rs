//! Configuration resolution
//!
//! The engine itself is a pure function over in-memory values; this module
//! is the capability that produces those values from disk. Rule documents
//! are searched project-first with a user-level fallback, and anything
//! missing or unparsable degrades to an empty default rather than an
//! error: the worst outcome of a broken configuration is "no skills
//! activated".

pub mod loader;
pub mod locations;

pub use loader::{load_recent_files, load_rules, RecentFileEntry};
pub use locations::Locations;
