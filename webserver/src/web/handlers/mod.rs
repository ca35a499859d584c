//! REST API handlers
//!
//! Every handler is generic over the store types so the same routes run
//! against the in-memory stores or test doubles.

pub mod callers;
pub mod dashboard;
pub mod duplicates;
pub mod leads;
pub mod settings;
