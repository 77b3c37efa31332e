use thiserror::Error;

pub const DEFAULT_NUM_CLONES: usize = 96;
pub const DEFAULT_PLATE_FORMAT: &str = "96-well";
pub const DEFAULT_PARENT_LINE: &str = "CHO-K1";
pub const DEFAULT_SELECTION_COUNT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{parameter}' is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Campaign-level settings. Built via [`CampaignConfigBuilder`]; every field
/// has a conventional default matching a standard 96-well screening run.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignConfig {
    pub num_clones: usize,
    pub plate_format: String,
    pub parent_line: String,
    pub selection_count: usize,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            num_clones: DEFAULT_NUM_CLONES,
            plate_format: DEFAULT_PLATE_FORMAT.to_string(),
            parent_line: DEFAULT_PARENT_LINE.to_string(),
            selection_count: DEFAULT_SELECTION_COUNT,
        }
    }
}

#[derive(Default)]
pub struct CampaignConfigBuilder {
    num_clones: Option<usize>,
    plate_format: Option<String>,
    parent_line: Option<String>,
    selection_count: Option<usize>,
}

impl CampaignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_clones(mut self, n: usize) -> Self {
        self.num_clones = Some(n);
        self
    }
    pub fn plate_format(mut self, format: impl Into<String>) -> Self {
        self.plate_format = Some(format.into());
        self
    }
    pub fn parent_line(mut self, line: impl Into<String>) -> Self {
        self.parent_line = Some(line.into());
        self
    }
    pub fn selection_count(mut self, n: usize) -> Self {
        self.selection_count = Some(n);
        self
    }

    pub fn build(self) -> Result<CampaignConfig, ConfigError> {
        let defaults = CampaignConfig::default();
        let config = CampaignConfig {
            num_clones: self.num_clones.unwrap_or(defaults.num_clones),
            plate_format: self.plate_format.unwrap_or(defaults.plate_format),
            parent_line: self.parent_line.unwrap_or(defaults.parent_line),
            selection_count: self.selection_count.unwrap_or(defaults.selection_count),
        };

        if config.num_clones == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "num_clones",
                reason: "must be positive".to_string(),
            });
        }
        if config.selection_count == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "selection_count",
                reason: "must be positive".to_string(),
            });
        }
        // selection_count is re-validated against the actual population size
        // when the selection step runs.
        Ok(config)
    }
}
