use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::results::ResultRow;

/// Criteria the selection step applies, as structured data for the
/// reporting sink to render.
pub const SELECTION_CRITERIA: [&str; 5] = [
    "High titer (>2.5 g/L preferred)",
    "High viability (>85%)",
    "Stable expression",
    "Good product quality (low aggregation)",
    "Optimal glycosylation pattern",
];

/// Outcome of the top-N selection step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub requested: usize,
    pub criteria: Vec<String>,
    /// Selected rows, ordered by descending score; ties preserve the
    /// original clone creation order.
    pub selected: Vec<ResultRow>,
}

/// Aggregate statistics over the full result table, computed when the
/// campaign closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub total_screened: usize,
    pub advanced: usize,
    pub success_rate_pct: f64,
    pub mean_titer: f64,
    pub max_titer: f64,
    pub mean_viability: f64,
    pub high_producers: usize, // titer > 3 g/L
    pub stable_clones: usize,
    pub best_clone_id: String,
    pub best_score: f64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CampaignSummary {
    /// Computes the closing statistics over a non-empty result table.
    pub fn from_results(
        results: &[ResultRow],
        advanced: usize,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let total = results.len();
        let mean_titer = results.iter().map(|r| r.titer).sum::<f64>() / total.max(1) as f64;
        let max_titer = results.iter().map(|r| r.titer).fold(0.0, f64::max);
        let mean_viability = results.iter().map(|r| r.viability).sum::<f64>() / total.max(1) as f64;
        let high_producers = results.iter().filter(|r| r.titer > 3.0).count();
        let stable_clones = results.iter().filter(|r| r.is_stable).count();

        // First row wins on score ties, matching the table's creation order.
        let best = results.iter().fold(None::<&ResultRow>, |best, row| {
            match best {
                Some(b) if b.score >= row.score => Some(b),
                _ => Some(row),
            }
        });

        Self {
            total_screened: total,
            advanced,
            success_rate_pct: if total == 0 {
                0.0
            } else {
                advanced as f64 / total as f64 * 100.0
            },
            mean_titer,
            max_titer,
            mean_viability,
            high_producers,
            stable_clones,
            best_clone_id: best.map(|r| r.clone_id.clone()).unwrap_or_default(),
            best_score: best.map(|r| r.score).unwrap_or(0.0),
            started_at,
            finished_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::clone::GlycosylationPattern;
    use chrono::TimeZone;

    fn row(id: &str, titer: f64, viability: f64, stable: bool, score: f64) -> ResultRow {
        ResultRow {
            clone_id: id.to_string(),
            titer,
            viability,
            density: 5.0e6,
            growth_rate: 0.03,
            is_stable: stable,
            glycosylation: GlycosylationPattern::Good,
            aggregation_level: 2.0,
            score,
        }
    }

    #[test]
    fn summary_aggregates_the_result_table() {
        let results = vec![
            row("Clone_001", 2.0, 90.0, true, 0.6),
            row("Clone_002", 4.0, 80.0, false, 0.9),
            row("Clone_003", 3.5, 85.0, true, 0.9),
        ];
        let started = Utc.with_ymd_and_hms(2026, 8, 23, 8, 0, 0).unwrap();
        let finished = Utc.with_ymd_and_hms(2026, 8, 30, 17, 0, 0).unwrap();

        let summary = CampaignSummary::from_results(&results, 2, started, finished);

        assert_eq!(summary.total_screened, 3);
        assert_eq!(summary.advanced, 2);
        assert!((summary.success_rate_pct - 66.666).abs() < 0.001);
        assert!((summary.mean_titer - 3.166_666).abs() < 1e-5);
        assert_eq!(summary.max_titer, 4.0);
        assert!((summary.mean_viability - 85.0).abs() < 1e-12);
        assert_eq!(summary.high_producers, 2);
        assert_eq!(summary.stable_clones, 2);
        // Tie on score: the earlier clone wins.
        assert_eq!(summary.best_clone_id, "Clone_002");
        assert_eq!(summary.best_score, 0.9);
    }
}
