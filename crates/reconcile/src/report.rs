//! Pass outcome reporting.

use serde::Serialize;

/// One row that could not be repaired.
#[derive(Debug, Clone, Serialize)]
pub struct RowError {
    /// Which table the row belongs to.
    pub entity: &'static str,
    pub id: String,
    pub message: String,
}

/// Outcome of a single reconciliation pass.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub pass: &'static str,
    /// Rows inspected.
    pub examined: usize,
    /// Rows whose stored value drifted and was rewritten.
    pub updated: usize,
    /// Rows deliberately left alone (no URI, custody guard, etc).
    pub skipped: usize,
    pub errors: Vec<RowError>,
}

impl PassReport {
    pub fn new(pass: &'static str) -> Self {
        Self {
            pass,
            examined: 0,
            updated: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Record a row failure and keep going.
    pub fn record_error(
        &mut self,
        entity: &'static str,
        id: impl ToString,
        err: impl std::fmt::Display,
    ) {
        self.errors.push(RowError {
            entity,
            id: id.to_string(),
            message: err.to_string(),
        });
    }
}

/// Aggregate outcome of a full reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub passes: Vec<PassReport>,
}

impl ReconcileReport {
    /// Total rows rewritten across all passes.
    pub fn total_updated(&self) -> usize {
        self.passes.iter().map(|p| p.updated).sum()
    }

    /// Total row failures across all passes.
    pub fn total_errors(&self) -> usize {
        self.passes.iter().map(|p| p.errors.len()).sum()
    }
}
