use thiserror::Error;

use super::phase::CampaignPhase;
use crate::core::models::clone::ObservationError;
use crate::core::population::PopulationError;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Invalid configuration: {source}")]
    InvalidConfiguration {
        #[from]
        source: PopulationError,
    },

    #[error("Invalid selection count {requested}: must be in (0, {population}]")]
    InvalidSelectionCount { requested: usize, population: usize },

    #[error("Sequence violation: '{operation}' requires phase {expected}, campaign is {actual}")]
    SequenceViolation {
        operation: &'static str,
        expected: CampaignPhase,
        actual: CampaignPhase,
    },

    #[error("Observation conflict for clone {clone_id}: {source}")]
    ObservationConflict {
        clone_id: String,
        #[source]
        source: ObservationError,
    },

    #[error("Export failed: {0}")]
    Export(String),
}
