use super::models::clone::{CellClone, CloneParams, GlycosylationPattern};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PopulationError {
    #[error("clone count must be positive (requested {0})")]
    InvalidCloneCount(usize),
}

// Sampling policy for intrinsic parameters. Draws are clamped to the
// biologically plausible intervals documented on `CloneParams`.
const BASE_TITER_MEAN: f64 = 2.5;
const BASE_TITER_SD: f64 = 1.5;
const GROWTH_RATE_MEAN: f64 = 0.032;
const GROWTH_RATE_SD: f64 = 0.008;
const VIABILITY_MEAN: f64 = 94.0;
const VIABILITY_SD: f64 = 6.0;

// 3-in-4 stability odds, matching the empirical rate of stable transfectants.
const STABILITY_OUTCOMES: [bool; 4] = [true, true, true, false];
const GLYCOSYLATION_OUTCOMES: [GlycosylationPattern; 4] = [
    GlycosylationPattern::Optimal,
    GlycosylationPattern::Optimal,
    GlycosylationPattern::Good,
    GlycosylationPattern::Poor,
];

/// Generates the screening population: `num_clones` candidates with
/// randomized but bounded biological parameters and zero-padded identifiers
/// (`Clone_001`, `Clone_002`, ...). Creation order is the iteration order
/// for the rest of the campaign.
pub fn generate_population<R: Rng + ?Sized>(
    num_clones: usize,
    parent_line: &str,
    rng: &mut R,
) -> Result<Vec<CellClone>, PopulationError> {
    if num_clones == 0 {
        return Err(PopulationError::InvalidCloneCount(num_clones));
    }

    let base_titer = Normal::new(BASE_TITER_MEAN, BASE_TITER_SD).unwrap();
    let growth_rate = Normal::new(GROWTH_RATE_MEAN, GROWTH_RATE_SD).unwrap();
    let viability = Normal::new(VIABILITY_MEAN, VIABILITY_SD).unwrap();

    let clones = (0..num_clones)
        .map(|i| {
            let params = CloneParams {
                base_titer: base_titer.sample(rng).clamp(0.1, 6.0),
                growth_rate: growth_rate.sample(rng).clamp(0.015, 0.050),
                baseline_viability: viability.sample(rng).clamp(60.0, 99.0),
                is_stable: *STABILITY_OUTCOMES.choose(rng).unwrap(),
                glycosylation: *GLYCOSYLATION_OUTCOMES.choose(rng).unwrap(),
                aggregation_level: rng.gen_range(0.5..8.0),
            };
            CellClone::new(format!("Clone_{:03}", i + 1), parent_line, params)
        })
        .collect();

    debug!(num_clones, parent_line, "Generated screening population.");
    Ok(clones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_zero_clone_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_population(0, "CHO-K1", &mut rng);
        assert_eq!(result.unwrap_err(), PopulationError::InvalidCloneCount(0));
    }

    #[test]
    fn identifiers_are_unique_and_zero_padded() {
        let mut rng = StdRng::seed_from_u64(7);
        let clones = generate_population(120, "CHO-K1", &mut rng).unwrap();

        assert_eq!(clones.len(), 120);
        assert_eq!(clones[0].id, "Clone_001");
        assert_eq!(clones[95].id, "Clone_096");
        assert_eq!(clones[119].id, "Clone_120");

        let mut ids: Vec<_> = clones.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 120);
    }

    #[test]
    fn intrinsic_parameters_lie_within_documented_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let clones = generate_population(500, "CHO-K1", &mut rng).unwrap();

        for clone in &clones {
            let p = &clone.params;
            assert!((0.1..=6.0).contains(&p.base_titer), "titer {}", p.base_titer);
            assert!(
                (0.015..=0.050).contains(&p.growth_rate),
                "growth {}",
                p.growth_rate
            );
            assert!(
                (60.0..=99.0).contains(&p.baseline_viability),
                "viability {}",
                p.baseline_viability
            );
            assert!(
                (0.5..8.0).contains(&p.aggregation_level),
                "aggregation {}",
                p.aggregation_level
            );
        }
    }

    #[test]
    fn sampling_draws_both_categorical_outcomes() {
        let mut rng = StdRng::seed_from_u64(3);
        let clones = generate_population(200, "CHO-K1", &mut rng).unwrap();

        assert!(clones.iter().any(|c| c.params.is_stable));
        assert!(clones.iter().any(|c| !c.params.is_stable));
        assert!(
            clones
                .iter()
                .any(|c| c.params.glycosylation == GlycosylationPattern::Optimal)
        );
        assert!(
            clones
                .iter()
                .any(|c| c.params.glycosylation == GlycosylationPattern::Poor)
        );
    }

    #[test]
    fn generation_is_reproducible_for_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let a = generate_population(16, "CHO-K1", &mut rng_a).unwrap();
        let b = generate_population(16, "CHO-K1", &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
