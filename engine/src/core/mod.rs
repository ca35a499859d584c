//! Core business logic modules
//!
//! Pure decision logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod assignment;
pub mod duplicates;
pub mod pipeline;

pub use assignment::{eligible_callers, select_assignee, AssignmentDecision};
pub use duplicates::{find_duplicates, matching_rule, DuplicateGroup, DuplicateReason, MatchRule};
pub use pipeline::PipelineSummary;
