//! General application configuration.

use serde::{Deserialize, Serialize};
use tone_core::Industry;

fn default_export_dir() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Industry focus: selects sample data and the remote model.
    #[serde(default)]
    pub industry: Industry,

    /// Directory exports and sample CSVs are written to when no path is given.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            industry: Industry::default(),
            export_dir: default_export_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.industry, Industry::Finance);
        assert_eq!(config.export_dir, ".");
    }
}
