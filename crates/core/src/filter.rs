//! Filter model for the visible board.

use crate::job::Job;

/// Live filter inputs: free-text search, pay floor, distance ceiling.
///
/// Zero (or empty) means "no restriction" for every input, matching a
/// board whose controls are blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub search: String,
    pub min_pay: f64,
    pub max_distance: f64,
}

impl JobFilters {
    /// Whether a record passes all three predicates.
    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job) && self.matches_pay(job) && self.matches_distance(job)
    }

    fn matches_search(&self, job: &Job) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        job.title.to_lowercase().contains(&needle)
            || job.company.to_lowercase().contains(&needle)
            || job.location.to_lowercase().contains(&needle)
    }

    fn matches_pay(&self, job: &Job) -> bool {
        self.min_pay == 0.0 || job.pay_min >= self.min_pay
    }

    fn matches_distance(&self, job: &Job) -> bool {
        // A record with no known distance is never excluded by a ceiling.
        self.max_distance == 0.0 || job.distance_mi.map_or(true, |mi| mi <= self.max_distance)
    }
}

/// Derive the visible subset under `filters`.
///
/// Always produces a fresh view; the source list is never reordered or
/// mutated, so the next filter change starts from the full set again.
pub fn apply_filters<'a>(jobs: &'a [Job], filters: &JobFilters) -> Vec<&'a Job> {
    jobs.iter().filter(|job| filters.matches(job)).collect()
}
