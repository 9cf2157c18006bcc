use super::error::*;

use flo_geo::DEFAULT_FACTOR;

use std::fs;

///
/// Settings shared by all of the commands
///
/// These can be loaded from a JSON file, and any values missing from the file take their
/// default values. Command line options override the values from the file.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Factor used to quantize coordinates when encoding and decoding polylines
    pub factor: f64,

    /// Distance threshold used when reducing a path
    pub threshold: f64,

    /// Whether or not to use the haversine formula when computing distances over the earth
    pub haversine: bool
}

impl Default for ToolConfig {
    fn default() -> ToolConfig {
        ToolConfig {
            factor:     DEFAULT_FACTOR,
            threshold:  0.0,
            haversine:  false
        }
    }
}

impl ToolConfig {
    ///
    /// Reads a configuration from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<ToolConfig, ToolError> {
        let config: ToolConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    ///
    /// Loads the configuration file at the specified path
    ///
    pub fn load(path: &str) -> Result<ToolConfig, ToolError> {
        debug!("Loading configuration from {}", path);

        let json = fs::read_to_string(path)?;
        ToolConfig::from_json(&json)
    }

    ///
    /// Checks that the values in this configuration can be used
    ///
    pub fn validate(&self) -> Result<(), ToolError> {
        if !self.factor.is_finite() || self.factor <= 0.0 {
            return Err(ToolError::InvalidConfig(format!("factor must be a positive number (was {})", self.factor)));
        }

        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ToolError::InvalidConfig(format!("threshold must not be negative (was {})", self.threshold)));
        }

        Ok(())
    }
}
