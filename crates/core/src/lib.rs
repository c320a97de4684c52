//! `gigboard-core` — canonical job records and board logic.
//!
//! This crate contains **pure domain** logic (no HTTP, no terminal IO):
//! the normalized job record, the raw-feed mapping, the fallback sample
//! set, filter predicates, and apply-action resolution.

pub mod apply;
pub mod filter;
pub mod job;

pub use apply::ApplyAction;
pub use filter::{JobFilters, apply_filters};
pub use job::{Job, fallback_jobs, map_jobs};
