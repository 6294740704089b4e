//! Graph construction settings

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directed (`u -> v`) or undirected (`u - v`) edges
    pub directed: bool,
    /// Weight given to edges added without an explicit one
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: 1.0,
        }
    }
}

impl GraphConfig {
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: GraphConfig =
            serde_json::from_str(json).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The default weight must be finite and non-negative
    pub fn validate(&self) -> GraphResult<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(GraphError::Config(format!(
                "default_weight must be finite and non-negative, got {}",
                self.default_weight
            )));
        }
        Ok(())
    }
}
