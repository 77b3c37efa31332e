use chrono::{DateTime, Utc};
use rand::Rng;
use std::cmp::Ordering;
use tracing::info;

use super::clock::Clock;
use super::config::CampaignConfig;
use super::error::CampaignError;
use super::events::{CloneAction, LogEntry};
use super::phase::CampaignPhase;
use super::progress::{Report, Reporter};
use super::state::{CampaignSummary, SELECTION_CRITERIA, SelectionReport};
use crate::core::io::traits::{ResultSink, suggested_export_name};
use crate::core::kinetics::growth::grow;
use crate::core::kinetics::production::produce_antibody;
use crate::core::kinetics::scoring::composite_score;
use crate::core::models::clone::CellClone;
use crate::core::models::results::ResultRow;
use crate::core::population::generate_population;

const SEED_VOLUME_UL: f64 = 200.0;
const FEED_VOLUME_UL: f64 = 50.0;
const SAMPLE_VOLUME_UL: f64 = 50.0;

/// Drives the fixed three-timepoint screening schedule over a generated
/// clone population, then ranks, selects and exports the results.
///
/// Operations must run in lifecycle order
/// (`Created -> Seeded -> Fed -> Harvested -> Selected -> Closed`); calling
/// one out of order fails fast with a sequence violation and leaves the
/// campaign in its current phase.
pub struct ScreeningCampaign<R: Rng, C: Clock> {
    config: CampaignConfig,
    phase: CampaignPhase,
    start_date: DateTime<Utc>,
    clones: Vec<CellClone>,
    event_log: Vec<LogEntry>,
    results: Vec<ResultRow>,
    selection: Option<SelectionReport>,
    rng: R,
    clock: C,
}

impl<R: Rng, C: Clock> ScreeningCampaign<R, C> {
    pub fn new(config: CampaignConfig, rng: R, clock: C) -> Self {
        let start_date = clock.now();
        Self {
            config,
            phase: CampaignPhase::Created,
            start_date,
            clones: Vec::new(),
            event_log: Vec::new(),
            results: Vec::new(),
            selection: None,
            rng,
            clock,
        }
    }

    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    pub fn phase(&self) -> CampaignPhase {
        self.phase
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn clones(&self) -> &[CellClone] {
        &self.clones
    }

    pub fn event_log(&self) -> &[LogEntry] {
        &self.event_log
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }

    /// Day 0: generates the clone population and records the seeding of
    /// every well. Biological parameters are not touched.
    pub fn seed_plates(&mut self, reporter: &Reporter) -> Result<(), CampaignError> {
        self.require_phase("seed_plates", CampaignPhase::Created)?;
        reporter.report(Report::PhaseStart {
            name: "Day 0: Seeding",
            day: Some(0),
        });

        if self.clones.is_empty() {
            self.clones = generate_population(
                self.config.num_clones,
                &self.config.parent_line,
                &mut self.rng,
            )?;
        }

        reporter.report(Report::TaskStart {
            total_steps: self.clones.len() as u64,
        });
        for clone in &self.clones {
            let entry = LogEntry::new(0, clone.id.clone(), CloneAction::Seeded)
                .with_metric("volume_ul", SEED_VOLUME_UL)
                .with_metric("density_cells_ml", clone.observations.day0_density());
            reporter.report(Report::Clone(entry.clone()));
            self.event_log.push(entry);
            reporter.report(Report::TaskIncrement);
        }
        reporter.report(Report::TaskFinish);
        reporter.report(Report::PhaseFinish);

        info!(clones = self.clones.len(), "Seeded screening plates.");
        self.phase = CampaignPhase::Seeded;
        Ok(())
    }

    /// Day 3: records the intermediate density for every clone, in creation
    /// order. Viability at Day 3 is transient; it only feeds the log entry.
    pub fn feed_and_sample(&mut self, reporter: &Reporter) -> Result<(), CampaignError> {
        self.require_phase("feed_and_sample", CampaignPhase::Seeded)?;
        reporter.report(Report::PhaseStart {
            name: "Day 3: Feeding & Sampling",
            day: Some(3),
        });

        reporter.report(Report::TaskStart {
            total_steps: self.clones.len() as u64,
        });
        for clone in &mut self.clones {
            let measurement = grow(&clone.params, 3.0);
            clone
                .observations
                .record_day3_density(measurement.density)
                .map_err(|source| CampaignError::ObservationConflict {
                    clone_id: clone.id.clone(),
                    source,
                })?;

            let entry = LogEntry::new(3, clone.id.clone(), CloneAction::FedAndSampled)
                .with_metric("feed_volume_ul", FEED_VOLUME_UL)
                .with_metric("sample_volume_ul", SAMPLE_VOLUME_UL)
                .with_metric("density", measurement.density)
                .with_metric("viability", measurement.viability);
            reporter.report(Report::Clone(entry.clone()));
            self.event_log.push(entry);
            reporter.report(Report::TaskIncrement);
        }
        reporter.report(Report::TaskFinish);
        reporter.report(Report::PhaseFinish);

        info!(clones = self.clones.len(), "Fed and sampled all wells.");
        self.phase = CampaignPhase::Fed;
        Ok(())
    }

    /// Day 7: harvests every clone in creation order, persists the final
    /// observations, scores each clone and assembles the ordered result
    /// table. This is the only step producing the exportable result set.
    pub fn harvest_and_analyze(&mut self, reporter: &Reporter) -> Result<(), CampaignError> {
        self.require_phase("harvest_and_analyze", CampaignPhase::Fed)?;
        reporter.report(Report::PhaseStart {
            name: "Day 7: Harvest & Analysis",
            day: Some(7),
        });

        reporter.report(Report::TaskStart {
            total_steps: self.clones.len() as u64,
        });
        let mut results = Vec::with_capacity(self.clones.len());
        for clone in &mut self.clones {
            let measurement = grow(&clone.params, 7.0);
            let titer = produce_antibody(&clone.params, 7.0, &mut self.rng);

            let record = |source| CampaignError::ObservationConflict {
                clone_id: clone.id.clone(),
                source,
            };
            clone
                .observations
                .record_day7_density(measurement.density)
                .map_err(record)?;
            clone
                .observations
                .record_day7_viability(measurement.viability)
                .map_err(record)?;
            clone.observations.record_day7_titer(titer).map_err(record)?;

            let score = composite_score(&clone.params, &clone.observations);
            results.push(ResultRow {
                clone_id: clone.id.clone(),
                titer,
                viability: measurement.viability,
                density: measurement.density,
                growth_rate: clone.params.growth_rate,
                is_stable: clone.params.is_stable,
                glycosylation: clone.params.glycosylation,
                aggregation_level: clone.params.aggregation_level,
                score,
            });

            let entry = LogEntry::new(7, clone.id.clone(), CloneAction::Harvested)
                .with_metric("density", measurement.density)
                .with_metric("viability", measurement.viability)
                .with_metric("titer", titer)
                .with_metric("score", score);
            reporter.report(Report::Clone(entry.clone()));
            self.event_log.push(entry);
            reporter.report(Report::TaskIncrement);
        }
        self.results = results;
        reporter.report(Report::TaskFinish);
        reporter.report(Report::PhaseFinish);

        info!(clones = self.clones.len(), "Harvested and analyzed all wells.");
        self.phase = CampaignPhase::Harvested;
        Ok(())
    }

    /// Selects the top `n` clones by descending composite score, ties broken
    /// by original creation order. Performs no further mutation.
    pub fn select_top(
        &mut self,
        n: usize,
        reporter: &Reporter,
    ) -> Result<SelectionReport, CampaignError> {
        self.require_phase("select_top", CampaignPhase::Harvested)?;
        if n == 0 || n > self.clones.len() {
            return Err(CampaignError::InvalidSelectionCount {
                requested: n,
                population: self.clones.len(),
            });
        }

        let report = SelectionReport {
            requested: n,
            criteria: SELECTION_CRITERIA.iter().map(|c| c.to_string()).collect(),
            selected: rank_top(&self.results, n),
        };
        reporter.report(Report::Selection(report.clone()));

        info!(requested = n, "Selected top clones for advancement.");
        self.selection = Some(report.clone());
        self.phase = CampaignPhase::Selected;
        Ok(report)
    }

    /// Computes the closing summary, hands the result table to the export
    /// sink and marks the campaign complete. Sink failures are fatal to this
    /// step and leave the campaign unclosed.
    pub fn close<S: ResultSink>(
        &mut self,
        sink: &mut S,
        reporter: &Reporter,
    ) -> Result<CampaignSummary, CampaignError> {
        self.require_phase("close", CampaignPhase::Selected)?;

        let advanced = self.selection.as_ref().map_or(0, |s| s.selected.len());
        let summary = CampaignSummary::from_results(
            &self.results,
            advanced,
            self.start_date,
            self.clock.now(),
        );

        let export_name = suggested_export_name(self.start_date, "csv");
        sink.write_results(&self.results, &export_name)
            .map_err(|e| CampaignError::Export(e.to_string()))?;

        reporter.report(Report::Summary(summary.clone()));

        info!(export_name = %export_name, "Campaign closed.");
        self.phase = CampaignPhase::Closed;
        Ok(summary)
    }

    fn require_phase(
        &self,
        operation: &'static str,
        expected: CampaignPhase,
    ) -> Result<(), CampaignError> {
        if self.phase != expected {
            return Err(CampaignError::SequenceViolation {
                operation,
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }
}

/// Top-`n` rows by descending score. The sort is stable, so equal scores
/// keep their original creation order.
fn rank_top(rows: &[ResultRow], n: usize) -> Vec<ResultRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}
