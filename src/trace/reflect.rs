//! Mirror reflection about a surface normal

use glam::Vec2;

/// Reflect a direction off a surface with the given unit normal
///
/// Standard reflection: d' = d - 2(d·n)n
///
/// Inputs are not renormalized. With unit inputs the result is unit length.
#[inline]
pub fn reflect(incoming: Vec2, normal: Vec2) -> Vec2 {
    incoming - 2.0 * incoming.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction_from_angle;
    use proptest::prelude::*;

    #[test]
    fn test_reflect_head_on() {
        // Moving right into a wall whose normal points left
        let out = reflect(Vec2::X, Vec2::NEG_X);
        assert!((out - Vec2::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_reflect_grazing_is_unchanged() {
        // Travel parallel to the surface
        let out = reflect(Vec2::X, Vec2::Y);
        assert!((out - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_reflect_diagonal() {
        let incoming = Vec2::new(1.0, -1.0).normalize();
        let out = reflect(incoming, Vec2::Y);
        assert!((out - Vec2::new(1.0, 1.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_reflect_anti_colinear_normal() {
        // Same result whichever side the normal faces
        let incoming = Vec2::new(0.6, 0.8);
        let a = reflect(incoming, Vec2::Y);
        let b = reflect(incoming, Vec2::NEG_Y);
        assert!((a - b).length() < 1e-6);
    }

    proptest! {
        #[test]
        fn reflect_preserves_length(a in -10.0f32..10.0, b in -10.0f32..10.0) {
            let incoming = direction_from_angle(a);
            let normal = direction_from_angle(b);
            let out = reflect(incoming, normal);
            prop_assert!((out.length() - 1.0).abs() < 1e-5);
        }

        #[test]
        fn reflect_negates_normal_component(a in -10.0f32..10.0, b in -10.0f32..10.0) {
            let incoming = direction_from_angle(a);
            let normal = direction_from_angle(b);
            let out = reflect(incoming, normal);
            prop_assert!((out.dot(normal) + incoming.dot(normal)).abs() < 1e-5);
        }
    }
}
