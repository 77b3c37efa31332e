use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Seeding density dispensed into every well on Day 0 (cells/mL).
pub const DAY0_SEEDING_DENSITY: f64 = 0.5e6;

/// Biological ceiling for viable cell density in batch culture (cells/mL).
pub const PEAK_DENSITY: f64 = 8.0e6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservationError {
    #[error("day {day} observation '{field}' has already been recorded")]
    AlreadyRecorded { day: u8, field: &'static str },
}

/// N-glycan quality classification assigned to a clone at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GlycosylationPattern {
    Optimal,
    Good,
    Poor,
}

impl GlycosylationPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlycosylationPattern::Optimal => "Optimal",
            GlycosylationPattern::Good => "Good",
            GlycosylationPattern::Poor => "Poor",
        }
    }
}

impl fmt::Display for GlycosylationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intrinsic biological parameters of a clone, fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneParams {
    pub base_titer: f64,         // g/L, clamped to [0.1, 6.0]
    pub growth_rate: f64,        // per-hour exponential rate, clamped to [0.015, 0.050]
    pub baseline_viability: f64, // %, clamped to [60, 99]
    pub is_stable: bool,         // stable transgene expression
    pub glycosylation: GlycosylationPattern,
    pub aggregation_level: f64, // % aggregates, uniform in [0.5, 8.0]
}

/// Timepoint observations accumulated over the campaign.
///
/// Every observation is write-once: the campaign driver records each value
/// exactly once when the corresponding sampling day executes, and the
/// `None` -> `Some` transition is checked at write time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloneObservations {
    day0_density: f64,
    day3_density: Option<f64>,
    day7_density: Option<f64>,
    day7_viability: Option<f64>,
    day7_titer: Option<f64>,
}

impl CloneObservations {
    pub fn new() -> Self {
        Self {
            day0_density: DAY0_SEEDING_DENSITY,
            day3_density: None,
            day7_density: None,
            day7_viability: None,
            day7_titer: None,
        }
    }

    pub fn day0_density(&self) -> f64 {
        self.day0_density
    }

    pub fn day3_density(&self) -> Option<f64> {
        self.day3_density
    }

    pub fn day7_density(&self) -> Option<f64> {
        self.day7_density
    }

    pub fn day7_viability(&self) -> Option<f64> {
        self.day7_viability
    }

    pub fn day7_titer(&self) -> Option<f64> {
        self.day7_titer
    }

    pub fn record_day3_density(&mut self, density: f64) -> Result<(), ObservationError> {
        Self::record(&mut self.day3_density, density, 3, "density")
    }

    pub fn record_day7_density(&mut self, density: f64) -> Result<(), ObservationError> {
        Self::record(&mut self.day7_density, density, 7, "density")
    }

    pub fn record_day7_viability(&mut self, viability: f64) -> Result<(), ObservationError> {
        Self::record(&mut self.day7_viability, viability, 7, "viability")
    }

    pub fn record_day7_titer(&mut self, titer: f64) -> Result<(), ObservationError> {
        Self::record(&mut self.day7_titer, titer, 7, "titer")
    }

    fn record(
        slot: &mut Option<f64>,
        value: f64,
        day: u8,
        field: &'static str,
    ) -> Result<(), ObservationError> {
        if slot.is_some() {
            return Err(ObservationError::AlreadyRecorded { day, field });
        }
        *slot = Some(value);
        Ok(())
    }
}

impl Default for CloneObservations {
    fn default() -> Self {
        Self::new()
    }
}

/// One CHO cell-line candidate in the screening campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellClone {
    pub id: String,          // unique, stable for the campaign lifetime
    pub parent_line: String, // informational, e.g. "CHO-K1"
    pub params: CloneParams,
    pub observations: CloneObservations,
}

impl CellClone {
    pub fn new(id: String, parent_line: &str, params: CloneParams) -> Self {
        Self {
            id,
            parent_line: parent_line.to_string(),
            params,
            observations: CloneObservations::new(),
        }
    }
}
