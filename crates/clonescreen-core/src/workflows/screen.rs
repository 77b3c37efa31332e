use rand::Rng;
use tracing::{info, instrument};

use crate::core::io::traits::{ResultSink, suggested_export_name};
use crate::core::models::results::ResultRow;
use crate::engine::campaign::ScreeningCampaign;
use crate::engine::clock::Clock;
use crate::engine::config::CampaignConfig;
use crate::engine::error::CampaignError;
use crate::engine::events::LogEntry;
use crate::engine::progress::Reporter;
use crate::engine::state::{CampaignSummary, SelectionReport};

/// Everything a finished campaign produced.
#[derive(Debug, Clone)]
pub struct CampaignOutcome {
    pub results: Vec<ResultRow>,
    pub selection: SelectionReport,
    pub summary: CampaignSummary,
    pub event_log: Vec<LogEntry>,
    pub export_name: String,
}

/// Runs one full screening campaign: Day-0 seeding, Day-3 feeding, Day-7
/// harvest and analysis, top-N selection, then summary and export.
#[instrument(skip_all, name = "screening_workflow")]
pub fn run<R, C, S>(
    config: CampaignConfig,
    rng: R,
    clock: C,
    sink: &mut S,
    reporter: &Reporter,
) -> Result<CampaignOutcome, CampaignError>
where
    R: Rng,
    C: Clock,
    S: ResultSink,
{
    info!(
        num_clones = config.num_clones,
        plate_format = %config.plate_format,
        "Starting screening campaign."
    );

    let selection_count = config.selection_count;
    let mut campaign = ScreeningCampaign::new(config, rng, clock);
    let export_name = suggested_export_name(campaign.start_date(), "csv");

    campaign.seed_plates(reporter)?;
    campaign.feed_and_sample(reporter)?;
    campaign.harvest_and_analyze(reporter)?;
    let selection = campaign.select_top(selection_count, reporter)?;
    let summary = campaign.close(sink, reporter)?;

    info!(
        advanced = summary.advanced,
        best_clone = %summary.best_clone_id,
        "Campaign complete."
    );

    Ok(CampaignOutcome {
        results: campaign.results().to_vec(),
        selection,
        summary,
        event_log: campaign.event_log().to_vec(),
        export_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use crate::engine::config::CampaignConfigBuilder;
    use crate::engine::progress::Report;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;

    struct MemorySink {
        calls: Vec<(usize, String)>,
    }

    impl ResultSink for MemorySink {
        type Error = std::io::Error;

        fn write_results(
            &mut self,
            rows: &[ResultRow],
            suggested_name: &str,
        ) -> Result<(), Self::Error> {
            self.calls.push((rows.len(), suggested_name.to_string()));
            Ok(())
        }
    }

    #[test]
    fn workflow_runs_all_five_transitions() {
        let config = CampaignConfigBuilder::new()
            .num_clones(8)
            .selection_count(3)
            .build()
            .unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap());
        let mut sink = MemorySink { calls: Vec::new() };

        let phase_names = Mutex::new(Vec::new());
        let reporter = Reporter::with_callback(Box::new(|event| {
            if let Report::PhaseStart { name, .. } = event {
                phase_names.lock().unwrap().push(name);
            }
        }));

        let outcome = run(
            config,
            StdRng::seed_from_u64(42),
            clock,
            &mut sink,
            &reporter,
        )
        .unwrap();

        assert_eq!(outcome.results.len(), 8);
        assert_eq!(outcome.selection.selected.len(), 3);
        assert_eq!(outcome.summary.advanced, 3);
        assert_eq!(outcome.event_log.len(), 24);
        assert_eq!(outcome.export_name, "screening_results_20260214.csv");
        assert_eq!(sink.calls, vec![(8, "screening_results_20260214.csv".to_string())]);
        assert_eq!(
            *phase_names.lock().unwrap(),
            vec![
                "Day 0: Seeding",
                "Day 3: Feeding & Sampling",
                "Day 7: Harvest & Analysis"
            ]
        );
    }

    #[test]
    fn workflow_is_reproducible_for_a_fixed_seed() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap());
        let reporter = Reporter::new();

        let mut outcomes = Vec::new();
        for _ in 0..2 {
            let config = CampaignConfigBuilder::new()
                .num_clones(6)
                .selection_count(2)
                .build()
                .unwrap();
            let mut sink = MemorySink { calls: Vec::new() };
            let outcome = run(
                config,
                StdRng::seed_from_u64(7),
                clock,
                &mut sink,
                &reporter,
            )
            .unwrap();
            outcomes.push(outcome);
        }

        assert_eq!(outcomes[0].results, outcomes[1].results);
        assert_eq!(outcomes[0].selection, outcomes[1].selection);
        assert_eq!(outcomes[0].summary, outcomes[1].summary);
    }

    #[test]
    fn selection_count_larger_than_population_fails_the_workflow() {
        let config = CampaignConfigBuilder::new()
            .num_clones(2)
            .selection_count(5)
            .build()
            .unwrap();
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 14, 12, 0, 0).unwrap());
        let mut sink = MemorySink { calls: Vec::new() };
        let reporter = Reporter::new();

        let err = run(
            config,
            StdRng::seed_from_u64(1),
            clock,
            &mut sink,
            &reporter,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CampaignError::InvalidSelectionCount {
                requested: 5,
                population: 2
            }
        ));
        assert!(sink.calls.is_empty());
    }
}
