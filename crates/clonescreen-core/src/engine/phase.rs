use serde::Serialize;
use std::fmt;

/// Lifecycle of a screening campaign. Transitions are strictly sequential;
/// there are no retries and no re-entry into an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CampaignPhase {
    Created,
    Seeded,
    Fed,
    Harvested,
    Selected,
    Closed,
}

impl CampaignPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignPhase::Created => "Created",
            CampaignPhase::Seeded => "Seeded",
            CampaignPhase::Fed => "Fed",
            CampaignPhase::Harvested => "Harvested",
            CampaignPhase::Selected => "Selected",
            CampaignPhase::Closed => "Closed",
        }
    }
}

impl fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
