use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings applied when a new file is generated from the built-in
/// hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seconds per frame written to the `Frame Time:` header.
    pub frame_time: f64,
    /// Root position stored in the first three channels of every frame.
    pub root_position: [f64; 3],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            frame_time: 0.0083333,
            root_position: [7.4882, 15.9816, -35.4705],
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "frame_time": 0.04 }"#).unwrap();
        assert_eq!(config.frame_time, 0.04);
        assert_eq!(config.root_position, GeneratorConfig::default().root_position);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GeneratorConfig::from_json_str("{ frame_time: }").unwrap_err();
        assert!(matches!(err, crate::BvhError::Json(_)));
    }
}
