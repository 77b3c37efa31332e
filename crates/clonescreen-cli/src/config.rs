use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use clonescreen::engine::config::{CampaignConfig, CampaignConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Campaign settings as they appear in a TOML file; every field is optional
/// and CLI arguments take precedence over file values.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialCampaignConfig {
    #[serde(rename = "num-clones")]
    pub num_clones: Option<usize>,
    #[serde(rename = "plate-format")]
    pub plate_format: Option<String>,
    #[serde(rename = "parent-line")]
    pub parent_line: Option<String>,
    #[serde(rename = "selection-count")]
    pub selection_count: Option<usize>,
    pub seed: Option<u64>,
}

impl PartialCampaignConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "Loaded campaign configuration file.");
        Ok(config)
    }

    /// Resolves the final campaign configuration and seed. Precedence:
    /// CLI argument, then file value, then the built-in default.
    pub fn merge_with_cli(self, args: &RunArgs) -> Result<(CampaignConfig, Option<u64>)> {
        let mut builder = CampaignConfigBuilder::new();

        if let Some(n) = args.clones.or(self.num_clones) {
            builder = builder.num_clones(n);
        }
        if let Some(format) = self.plate_format {
            builder = builder.plate_format(format);
        }
        if let Some(line) = self.parent_line {
            builder = builder.parent_line(line);
        }
        if let Some(n) = args.top.or(self.selection_count) {
            builder = builder.selection_count(n);
        }

        let config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
        Ok((config, args.seed.or(self.seed)))
    }
}
