use super::growth::grow;
use crate::core::models::clone::CloneParams;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Assay floor for reported titers (g/L). ELISA readouts below this are
/// indistinguishable from background.
pub const MIN_TITER: f64 = 0.1;

const NOISE_MEAN: f64 = 1.0;
const NOISE_SD: f64 = 0.1;

/// Antibody titer accumulated after `days` of culture (g/L).
///
/// The deterministic part scales the clone's base titer by culture duration
/// and by the viability from the growth model; a multiplicative Gaussian
/// factor models assay and well-to-well variation. Consumes the random
/// source exactly once per call.
pub fn produce_antibody<R: Rng + ?Sized>(params: &CloneParams, days: f64, rng: &mut R) -> f64 {
    let measurement = grow(params, days);
    let raw_titer = (params.base_titer * days / 7.0) * (measurement.viability / 100.0);

    let noise = Normal::new(NOISE_MEAN, NOISE_SD).unwrap().sample(rng);
    (raw_titer * noise).max(MIN_TITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::clone::GlycosylationPattern;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(base_titer: f64) -> CloneParams {
        CloneParams {
            base_titer,
            growth_rate: 0.032,
            baseline_viability: 94.0,
            is_stable: true,
            glycosylation: GlycosylationPattern::Good,
            aggregation_level: 2.0,
        }
    }

    #[test]
    fn titer_is_always_at_least_the_assay_floor() {
        // Day 0 makes the deterministic part exactly zero, so only the
        // floor keeps the result positive, whatever the noise draw.
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let titer = produce_antibody(&params(0.1), 0.0, &mut rng);
            assert_eq!(titer, MIN_TITER);
        }
    }

    #[test]
    fn titer_stays_positive_across_many_seeds() {
        for seed in 0..256 {
            let mut rng = StdRng::seed_from_u64(seed);
            let titer = produce_antibody(&params(3.0), 7.0, &mut rng);
            assert!(titer >= MIN_TITER);
        }
    }

    #[test]
    fn day7_titer_tracks_base_titer_up_to_noise() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = params(4.0);
        let titer = produce_antibody(&p, 7.0, &mut rng);

        // viability at Day 7 is 94 - 3.5 = 90.5, so the deterministic part
        // is 4.0 * 0.905 = 3.62; the noise factor is Normal(1.0, 0.1).
        let expected = 4.0 * 0.905;
        assert!((titer - expected).abs() < expected * 0.6);
    }

    #[test]
    fn production_consumes_the_random_source() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = produce_antibody(&params(3.0), 7.0, &mut rng);
        let second = produce_antibody(&params(3.0), 7.0, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn production_is_reproducible_for_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(21);
        let mut rng_b = StdRng::seed_from_u64(21);
        assert_eq!(
            produce_antibody(&params(2.0), 7.0, &mut rng_a),
            produce_antibody(&params(2.0), 7.0, &mut rng_b),
        );
    }
}
