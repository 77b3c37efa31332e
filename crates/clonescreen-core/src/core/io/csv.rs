use super::traits::ResultSink;
use crate::core::models::results::ResultRow;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

const HEADERS: [&str; 9] = [
    "Clone ID",
    "Titer (g/L)",
    "Viability (%)",
    "VCD (10^6 cells/mL)",
    "Growth Rate",
    "Stable",
    "Glycosylation",
    "Aggregates (%)",
    "Score",
];

/// CSV export sink writing `screening_results_<YYYYMMDD>.csv` into a target
/// directory.
#[derive(Debug)]
pub struct CsvResultFile {
    directory: PathBuf,
    written: Option<PathBuf>,
}

impl CsvResultFile {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            written: None,
        }
    }

    /// Path of the last export, if any.
    pub fn written_path(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    /// Writes the result table to an arbitrary writer.
    pub fn write_table<W: Write>(rows: &[ResultRow], writer: W) -> Result<(), CsvExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADERS)?;

        for row in rows {
            let stable = if row.is_stable { "Yes" } else { "No" };
            let record: [String; 9] = [
                row.clone_id.clone(),
                format!("{:.2}", row.titer),
                format!("{:.1}", row.viability),
                format!("{:.2}", row.density_millions()),
                format!("{:.4}", row.growth_rate),
                stable.to_string(),
                row.glycosylation.as_str().to_string(),
                format!("{:.1}", row.aggregation_level),
                format!("{:.3}", row.score),
            ];
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl ResultSink for CsvResultFile {
    type Error = CsvExportError;

    fn write_results(
        &mut self,
        rows: &[ResultRow],
        suggested_name: &str,
    ) -> Result<(), Self::Error> {
        let path = self.directory.join(suggested_name);
        let file = std::fs::File::create(&path)?;
        Self::write_table(rows, file)?;

        info!(path = %path.display(), rows = rows.len(), "Wrote screening results.");
        self.written = Some(path);
        Ok(())
    }
}
