//! `gigboard-client` — the job loader.
//!
//! One configured GET against the job service, normalization through
//! `gigboard-core`, referral scoping, and the single fallback path.

pub mod config;
pub mod fetch;
pub mod loader;

pub use config::{BoardConfig, DEFAULT_SERVICE_URL};
pub use fetch::{FetchError, JobServiceClient};
pub use loader::load_jobs;
