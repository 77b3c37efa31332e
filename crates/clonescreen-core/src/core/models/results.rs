use super::clone::GlycosylationPattern;
use serde::Serialize;

/// Read-only Day-7 projection of a clone, used for ranking and export.
///
/// Computed once from the final clone state when the campaign harvests;
/// not owned by the clone itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub clone_id: String,
    pub titer: f64,      // g/L
    pub viability: f64,  // %
    pub density: f64,    // cells/mL
    pub growth_rate: f64,
    pub is_stable: bool,
    pub glycosylation: GlycosylationPattern,
    pub aggregation_level: f64, // %
    pub score: f64,             // composite score, 3 decimals
}

impl ResultRow {
    /// Viable cell density expressed in 10^6 cells/mL, the unit used for
    /// reporting and export.
    pub fn density_millions(&self) -> f64 {
        self.density / 1.0e6
    }
}
