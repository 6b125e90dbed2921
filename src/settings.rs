//! Trace settings
//!
//! Read from the optional `settings` block of a scene file, then overridden
//! field by field from the command line.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BUDGET;
use crate::error::SceneError;
use crate::trace::LayerMask;

/// Parameters shared by every ray traced from one scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Total distance a ray may travel, across all bounces
    pub budget: f32,
    /// Collision layers the rays interact with
    pub layers: LayerMask,
    /// Bounce cap (`None` = bounce until the budget is spent)
    pub max_bounces: Option<usize>,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            layers: LayerMask::ALL,
            max_bounces: None,
        }
    }
}

impl TraceSettings {
    /// Replace the budget if one was given
    pub fn override_budget(mut self, budget: Option<f32>) -> Self {
        if let Some(budget) = budget {
            self.budget = budget;
        }
        self
    }

    /// Replace the layer mask if one was given
    pub fn override_layers(mut self, layers: Option<LayerMask>) -> Self {
        if let Some(layers) = layers {
            self.layers = layers;
        }
        self
    }

    /// Replace the bounce cap if one was given
    pub fn override_max_bounces(mut self, max_bounces: Option<usize>) -> Self {
        if max_bounces.is_some() {
            self.max_bounces = max_bounces;
        }
        self
    }

    /// Reject a non-finite budget
    ///
    /// Zero and negative budgets are allowed; they trace empty paths.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.budget.is_finite() {
            return Err(SceneError::InvalidSettings(format!(
                "budget must be finite, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}
