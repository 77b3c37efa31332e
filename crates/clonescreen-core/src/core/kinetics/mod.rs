//! # Kinetics Module
//!
//! Pure, stateless models of clone biology: the deterministic growth curve,
//! the noisy antibody production model, and the composite quality score used
//! for ranking. None of these functions mutate a clone; the campaign driver
//! applies their results to the observation records.

pub mod growth;
pub mod production;
pub mod scoring;
