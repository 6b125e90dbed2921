//! Raycast hit records and layer filtering

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_LAYER;

/// Identifies the collider a hit came from (index into the scene)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColliderId(pub usize);

/// Bitmask of collision layers a query considers
///
/// Bit `n` enables layer `n`. The tracer never inspects it, it only hands it
/// back to the oracle on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask with a single layer enabled (layers above 31 select nothing)
    pub fn layer(layer: u8) -> Self {
        if layer > MAX_LAYER {
            return Self::NONE;
        }
        LayerMask(1 << layer)
    }

    /// Whether `layer` participates in queries filtered by this mask
    #[inline]
    pub fn contains(self, layer: u8) -> bool {
        layer <= MAX_LAYER && self.0 & (1 << layer) != 0
    }

    /// Enable another layer
    pub fn with(self, layer: u8) -> Self {
        LayerMask(self.0 | Self::layer(layer).0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Nearest obstruction found by a raycast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitResult {
    /// Distance from the query origin to `point` along the query direction
    pub distance: f32,
    /// Contact location
    pub point: Vec2,
    /// Unit surface normal, pointing away from the surface into free space
    pub normal: Vec2,
    /// Collider that was struck
    #[serde(default)]
    pub collider: ColliderId,
}

impl HitResult {
    pub fn new(distance: f32, point: Vec2, normal: Vec2) -> Self {
        Self {
            distance,
            point,
            normal,
            collider: ColliderId::default(),
        }
    }

    pub fn with_collider(mut self, collider: ColliderId) -> Self {
        self.collider = collider;
        self
    }
}
