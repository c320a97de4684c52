//! Load-once orchestration: fetch, scope, fall back.

use gigboard_core::{Job, fallback_jobs};

use crate::config::BoardConfig;
use crate::fetch::JobServiceClient;

/// Produce the session's job list.
///
/// Runs exactly once per session; every later filter change derives views
/// from the returned list without re-fetching. With no service configured
/// the network is never touched. A fetch error substitutes the fallback
/// set; referral scoping applies only to a successfully fetched list.
pub async fn load_jobs(config: &BoardConfig) -> Vec<Job> {
    let Some(base_url) = &config.service_base_url else {
        return fallback_jobs();
    };

    let client = JobServiceClient::new(base_url.clone());
    match client.fetch_jobs().await {
        Ok(mut jobs) => {
            if let Some(code) = &config.referral_code {
                jobs.retain(|job| job.confirmation_code.as_deref() == Some(code.as_str()));
            }
            jobs
        }
        Err(err) => {
            tracing::warn!(error = %err, "job service unavailable, serving sample postings");
            fallback_jobs()
        }
    }
}
