use crate::core::models::clone::{CloneObservations, CloneParams, GlycosylationPattern};

// Weights of the composite selection score. Sub-scores are normalized to
// roughly [0, 1] before weighting; the total is a ranking heuristic, not a
// probability, and is intentionally not clamped.
const TITER_WEIGHT: f64 = 0.40;
const VIABILITY_WEIGHT: f64 = 0.25;
const GROWTH_WEIGHT: f64 = 0.10;
const STABILITY_BONUS: f64 = 0.20;
const GLYCOSYLATION_BONUS: f64 = 0.15;
const AGGREGATION_PENALTY: f64 = -0.10;

// Normalization references: 5 g/L is an excellent fed-batch titer, 0.045/h
// is near the top of the sampled growth-rate range.
const TITER_REFERENCE: f64 = 5.0;
const GROWTH_REFERENCE: f64 = 0.045;
const AGGREGATION_THRESHOLD: f64 = 5.0;

/// Composite quality score used to rank clones, rounded to 3 decimals.
///
/// Requires Day-7 observations to be meaningful; absent titer or viability
/// contribute zero rather than failing, so a not-yet-harvested clone simply
/// scores on its intrinsic parameters. Deterministic given fixed inputs.
pub fn composite_score(params: &CloneParams, observations: &CloneObservations) -> f64 {
    let titer_score = observations
        .day7_titer()
        .map_or(0.0, |t| (t / TITER_REFERENCE).min(1.0));
    let viability_score = observations.day7_viability().map_or(0.0, |v| v / 100.0);
    let growth_score = (params.growth_rate / GROWTH_REFERENCE).min(1.0);

    let stability_bonus = if params.is_stable { STABILITY_BONUS } else { 0.0 };
    let glycosylation_bonus = if params.glycosylation == GlycosylationPattern::Optimal {
        GLYCOSYLATION_BONUS
    } else {
        0.0
    };
    // Strictly greater than the threshold; 5.0% aggregates is still acceptable.
    let aggregation_penalty = if params.aggregation_level > AGGREGATION_THRESHOLD {
        AGGREGATION_PENALTY
    } else {
        0.0
    };

    let total = titer_score * TITER_WEIGHT
        + viability_score * VIABILITY_WEIGHT
        + growth_score * GROWTH_WEIGHT
        + stability_bonus
        + glycosylation_bonus
        + aggregation_penalty;

    round3(total)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
