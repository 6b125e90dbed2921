//! Result of a bounce trace

use glam::Vec2;
use serde::Serialize;

use super::hit::HitResult;

/// Polyline followed by a bouncing ray
///
/// Owned by the caller once returned; nothing else keeps a reference to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BouncePath {
    /// Where the trace started (not repeated in `end_points`)
    pub origin: Vec2,
    /// One point per bounce in traversal order, then the terminal point
    pub end_points: Vec<Vec2>,
    /// One hit per bounce, parallel to all but the last end point
    pub contacts: Vec<HitResult>,
    /// At least one reflection happened
    pub bounced: bool,
    /// Direction of travel along the last segment
    pub final_direction: Vec2,
}

impl BouncePath {
    pub(crate) fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            end_points: Vec::new(),
            contacts: Vec::new(),
            bounced: false,
            final_direction: direction,
        }
    }

    /// Number of reflections along the path
    #[inline]
    pub fn bounce_count(&self) -> usize {
        self.contacts.len()
    }

    /// Where the ray stopped (None when the budget was already spent)
    pub fn terminal_point(&self) -> Option<Vec2> {
        self.end_points.last().copied()
    }

    /// Origin followed by every end point
    pub fn polyline(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.end_points.len() + 1);
        points.push(self.origin);
        points.extend_from_slice(&self.end_points);
        points
    }

    /// Straight segments of the path as (start, end) pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        std::iter::once(self.origin)
            .chain(self.end_points.iter().copied())
            .zip(self.end_points.iter().copied())
    }

    /// Total distance travelled
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_path() -> BouncePath {
        let mut path = BouncePath::new(Vec2::ZERO, Vec2::X);
        path.contacts
            .push(HitResult::new(3.0, Vec2::new(3.0, 0.0), Vec2::NEG_X));
        path.end_points.push(Vec2::new(3.0, 0.0));
        path.end_points.push(Vec2::new(3.0, 4.0));
        path.bounced = true;
        path.final_direction = Vec2::Y;
        path
    }

    #[test]
    fn test_empty_path() {
        let path = BouncePath::new(Vec2::new(1.0, 1.0), Vec2::Y);
        assert_eq!(path.bounce_count(), 0);
        assert_eq!(path.terminal_point(), None);
        assert_eq!(path.polyline(), vec![Vec2::new(1.0, 1.0)]);
        assert_eq!(path.segments().count(), 0);
        assert_eq!(path.length(), 0.0);
    }

    #[test]
    fn test_segments_and_length() {
        let path = two_segment_path();
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(
            segments,
            vec![
                (Vec2::ZERO, Vec2::new(3.0, 0.0)),
                (Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0)),
            ]
        );
        assert!((path.length() - 7.0).abs() < 1e-6);
        assert_eq!(path.terminal_point(), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(path.bounce_count(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(two_segment_path()).unwrap();
        assert_eq!(json["bounced"], true);
        assert_eq!(json["end_points"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(json["final_direction"][1], 1.0);
    }
}
