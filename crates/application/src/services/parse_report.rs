use ferrous_lan_domain::DomainError;
use tracing::{debug, warn};

/// Per-pass bookkeeping of a tolerant parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Lease blocks or neighbor lines that were examined
    pub records_seen: usize,
    /// Records skipped because they could not be decoded
    pub skipped: Vec<DomainError>,
    /// Neighbor lines with no resolved hardware address
    pub unresolved: usize,
    /// A trailing lease block had no closing brace
    pub truncated_tail: bool,
}

impl ParseReport {
    pub fn error_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn record_error(&mut self, error: DomainError) {
        debug!(error = %error, "Skipping malformed record");
        self.skipped.push(error);
    }

    /// Emits one summary event for the pass.
    pub fn log_summary(&self, source: &'static str) {
        if self.skipped.is_empty() {
            debug!(
                source,
                records = self.records_seen,
                unresolved = self.unresolved,
                truncated_tail = self.truncated_tail,
                "Source parsed"
            );
        } else {
            warn!(
                source,
                records = self.records_seen,
                skipped = self.skipped.len(),
                first_error = %self.skipped[0],
                "Source parsed with malformed records"
            );
        }
    }
}

/// Parser output: the decoded table plus its report.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub table: T,
    pub report: ParseReport,
}
