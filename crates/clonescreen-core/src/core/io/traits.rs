use crate::core::models::results::ResultRow;
use chrono::{DateTime, Utc};
use std::error::Error;

/// Defines the interface for persisting the final result table.
///
/// The campaign hands every sink the ordered Day-7 result rows together with
/// a suggested file name derived from the campaign start date; the storage
/// medium is entirely the sink's concern.
pub trait ResultSink {
    /// The error type for export operations.
    type Error: Error;

    /// Persists the full, ordered result table.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot persist the table. The campaign
    /// treats sink failures as fatal to the closing step.
    fn write_results(&mut self, rows: &[ResultRow], suggested_name: &str)
    -> Result<(), Self::Error>;
}

/// Suggested export name for a campaign that started at `start_date`,
/// formatted as `screening_results_<YYYYMMDD>.<ext>`.
pub fn suggested_export_name(start_date: DateTime<Utc>, extension: &str) -> String {
    format!(
        "screening_results_{}.{}",
        start_date.format("%Y%m%d"),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_name_encodes_the_start_date() {
        let start = Utc.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();
        assert_eq!(
            suggested_export_name(start, "csv"),
            "screening_results_20260823.csv"
        );
    }
}
