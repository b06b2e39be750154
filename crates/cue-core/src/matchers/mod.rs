//! Trigger predicate evaluators
//!
//! Three independent predicates feed the activation engine: keyword
//! containment, regex intent matching, and glob-style path matching with
//! exclusion override. Each predicate is total: a malformed pattern never
//! aborts evaluation of sibling patterns or other rules, it simply fails
//! to match.

mod intent;
mod keyword;
mod path;

pub use intent::matches_intent;
pub use keyword::matches_keyword;
pub use path::{glob_to_regex, matches_path};
