//! Bounce Ray - reflecting raycasts over a 2D scene
//!
//! Core modules:
//! - `trace`: Bounce path construction (reflection math, oracle seam, tracer)
//! - `scene`: Reference raycast oracle over segments, circles and boxes
//! - `settings`: Trace parameters loaded from scene files or the CLI
//! - `error`: Scene loading errors

pub mod error;
pub mod scene;
pub mod settings;
pub mod trace;

pub use error::SceneError;
pub use scene::{Collider, RaySpec, Scene, SceneFile, Shape};
pub use settings::TraceSettings;
pub use trace::{
    BouncePath, BounceTracer, ColliderId, HitResult, LayerMask, RaycastOracle, reflect, trace,
};

use glam::Vec2;

/// Tracing constants
pub mod consts {
    /// Travel budget used when neither the scene file nor the CLI sets one
    pub const DEFAULT_BUDGET: f32 = 100.0;

    /// Thin colliders (segments) this close to the query origin are skipped, so
    /// a reflected ray does not re-hit the surface it left. Segments this close
    /// to a contact point count as part of the same corner.
    pub const CONTACT_SKIN: f32 = 1e-4;

    /// Highest collision layer index a `LayerMask` can address
    pub const MAX_LAYER: u8 = 31;
}

/// Unit direction for an angle in radians (0 = +X, counter-clockwise)
#[inline]
pub fn direction_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Parse `"x,y"` into a vector
pub fn parse_vec2(s: &str) -> Option<Vec2> {
    let (x, y) = s.split_once(',')?;
    let x = x.trim().parse::<f32>().ok()?;
    let y = y.trim().parse::<f32>().ok()?;
    Some(Vec2::new(x, y))
}
