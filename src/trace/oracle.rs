//! Scene query seam
//!
//! The tracer never owns geometry. Whatever answers "what is the nearest thing
//! along this ray" implements `RaycastOracle`: a host engine adapter, the
//! reference `Scene`, or a closure in a test.

use glam::Vec2;

use super::hit::{HitResult, LayerMask};

/// Nearest-hit query over scene geometry
pub trait RaycastOracle {
    /// Nearest obstruction within `max_distance` of `origin` along `direction`.
    ///
    /// `direction` is unit length, or zero for a degenerate trace. Only
    /// geometry on layers enabled in `filter` takes part. Must be
    /// deterministic for a static scene.
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<HitResult>;
}

impl<F> RaycastOracle for F
where
    F: Fn(Vec2, Vec2, f32, LayerMask) -> Option<HitResult>,
{
    #[inline]
    fn raycast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: LayerMask,
    ) -> Option<HitResult> {
        self(origin, direction, max_distance, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_oracle() {
        let floor = |origin: Vec2, dir: Vec2, max: f32, _filter: LayerMask| {
            // Horizontal floor at y = 0
            if dir.y >= 0.0 {
                return None;
            }
            let t = -origin.y / dir.y;
            (t <= max).then(|| HitResult::new(t, origin + dir * t, Vec2::Y))
        };

        let hit = floor.raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 10.0, LayerMask::ALL);
        let hit = hit.expect("should hit the floor");
        assert!((hit.distance - 2.0).abs() < 1e-6);
        assert_eq!(hit.normal, Vec2::Y);

        assert!(floor.raycast(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 1.0, LayerMask::ALL).is_none());
        assert!(floor.raycast(Vec2::new(0.0, 2.0), Vec2::Y, 10.0, LayerMask::ALL).is_none());
    }
}
