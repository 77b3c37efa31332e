use crate::core::models::clone::{CloneParams, DAY0_SEEDING_DENSITY, PEAK_DENSITY};

/// Lowest viability reported by the model (%). Cultures below this would be
/// terminated in practice.
pub const VIABILITY_FLOOR: f64 = 60.0;

/// Linear viability decay per day of culture (%).
pub const VIABILITY_DECAY_PER_DAY: f64 = 0.5;

/// Density and viability of a culture at a single timepoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthMeasurement {
    pub density: f64,   // cells/mL
    pub viability: f64, // %
}

/// Deterministic growth model: exponential expansion from the seeding
/// density, capped at the stationary-phase ceiling, with linear viability
/// decay floored at [`VIABILITY_FLOOR`].
pub fn grow(params: &CloneParams, days: f64) -> GrowthMeasurement {
    let hours = days * 24.0;
    let density = (DAY0_SEEDING_DENSITY * (params.growth_rate * hours).exp()).min(PEAK_DENSITY);
    let viability =
        (params.baseline_viability - days * VIABILITY_DECAY_PER_DAY).max(VIABILITY_FLOOR);

    GrowthMeasurement { density, viability }
}
