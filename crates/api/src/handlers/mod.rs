pub mod mint_jobs;
pub mod reconcile;
pub mod releases;
