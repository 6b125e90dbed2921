//! Reference scene
//!
//! A flat list of colliders on collision layers, queried linearly. Good enough
//! for tools, tests and small levels; a host engine with its own broadphase
//! plugs in through `RaycastOracle` instead.

pub mod shape;

pub use shape::{Shape, ShapeHit};

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_LAYER;
use crate::error::SceneError;
use crate::settings::TraceSettings;
use crate::trace::{ColliderId, HitResult, LayerMask, RaycastOracle};

/// A shape placed on a collision layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Optional label, used in logs and CLI output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Collision layer (0..=31)
    #[serde(default)]
    pub layer: u8,
    pub shape: Shape,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self {
            name: None,
            layer: 0,
            shape,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    /// Name for display, falling back to the shape kind
    pub fn label(&self) -> &str {
        match (&self.name, &self.shape) {
            (Some(name), _) => name,
            (None, Shape::Segment { .. }) => "segment",
            (None, Shape::Circle { .. }) => "circle",
            (None, Shape::Box { .. }) => "box",
        }
    }
}

/// Collection of colliders answering raycast queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub colliders: Vec<Collider>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
        }
    }

    /// Add a collider, returning its id
    pub fn add(&mut self, collider: Collider) -> ColliderId {
        let id = ColliderId(self.colliders.len());
        self.colliders.push(collider);
        id
    }

    /// Look up the collider a hit refers to
    pub fn collider(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.get(id.0)
    }

    /// Four segments enclosing the rectangle `min`..`max`
    pub fn add_room(&mut self, min: Vec2, max: Vec2, layer: u8) {
        let corners = [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ];
        for i in 0..corners.len() {
            let a = corners[i];
            let b = corners[(i + 1) % corners.len()];
            self.add(Collider::new(Shape::Segment { a, b }).on_layer(layer));
        }
    }

    /// Check every collider for unusable geometry or layers
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, collider) in self.colliders.iter().enumerate() {
            if collider.layer > MAX_LAYER {
                return Err(SceneError::InvalidCollider {
                    index,
                    reason: format!("layer {} is above {}", collider.layer, MAX_LAYER),
                });
            }
            collider
                .shape
                .validate()
                .map_err(|reason| SceneError::InvalidCollider { index, reason })?;
        }
        Ok(())
    }
}

impl RaycastOracle for Scene {
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<HitResult> {
        let mut nearest: Option<HitResult> = None;

        // Ties keep the earlier collider, so results are stable by index
        for (index, collider) in self.colliders.iter().enumerate() {
            if !filter.contains(collider.layer) {
                continue;
            }
            let Some(hit) = collider.shape.raycast(origin, direction, max_distance) else {
                continue;
            };
            if nearest.is_some_and(|n| n.distance <= hit.distance) {
                continue;
            }
            nearest = Some(
                HitResult::new(hit.distance, origin + direction * hit.distance, hit.normal)
                    .with_collider(ColliderId(index)),
            );
        }

        let mut hit = nearest?;
        if hit.distance > 0.0 {
            hit.normal = self.corner_normal(&hit, origin, direction, filter);
        }
        Some(hit)
    }
}

impl Scene {
    /// Combined normal of every segment the ray runs into at `hit.point`
    ///
    /// A ray landing where two walls meet has to reflect off both, otherwise
    /// the next cast starts on the second wall and passes through it.
    fn corner_normal(
        &self,
        hit: &HitResult,
        origin: Vec2,
        direction: Vec2,
        filter: LayerMask,
    ) -> Vec2 {
        let mut normal = hit.normal;
        let mut touching = 1;

        for (index, collider) in self.colliders.iter().enumerate() {
            if index == hit.collider.0 || !filter.contains(collider.layer) {
                continue;
            }
            if let Some(n) = collider.shape.contact_normal(origin, hit.point, direction) {
                normal += n;
                touching += 1;
            }
        }

        if touching == 1 {
            return hit.normal;
        }

        log::trace!(
            "Corner contact at ({}, {}) against {} surfaces",
            hit.point.x,
            hit.point.y,
            touching
        );
        let merged = normal.normalize_or_zero();
        if merged == Vec2::ZERO { hit.normal } else { merged }
    }
}

/// A ray listed in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySpec {
    pub origin: Vec2,
    pub direction: Vec2,
}

/// On-disk scene: colliders plus optional settings and rays to trace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(flatten)]
    pub scene: Scene,
    #[serde(default)]
    pub settings: TraceSettings,
    #[serde(default)]
    pub rays: Vec<RaySpec>,
}

impl SceneFile {
    /// Parse and validate a scene from JSON text
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let file: SceneFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Read, parse and validate a scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json(&json)?;
        log::info!(
            "Loaded scene {} ({} colliders, {} rays)",
            path.display(),
            file.scene.colliders.len(),
            file.rays.len()
        );
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.scene.validate()?;
        self.settings.validate()?;
        for (index, ray) in self.rays.iter().enumerate() {
            if !ray.origin.is_finite() || !ray.direction.is_finite() {
                return Err(SceneError::InvalidRay {
                    index,
                    reason: "origin and direction must be finite".to_string(),
                });
            }
        }
        Ok(())
    }
}
