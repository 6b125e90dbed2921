//! Bounce path construction
//!
//! A trace fires the ray, reflects it off the nearest obstruction and keeps
//! going with whatever budget is left. Each loop iteration is one straight
//! segment; the accumulated path is equivalent to nesting one trace per
//! bounce and concatenating their end points and contacts.
//!
//! Degenerate directions (zero length, NaN) normalize to `Vec2::ZERO` at every
//! step. Such a trace never panics: unobstructed segments simply end at their
//! own origin and the final direction comes back as zero.

use glam::Vec2;

use super::hit::LayerMask;
use super::oracle::RaycastOracle;
use super::path::BouncePath;
use super::reflect::reflect;

/// Trace a bouncing ray with no bounce cap
///
/// Shorthand for `BounceTracer::new(oracle).trace(..)`.
pub fn trace<O>(
    oracle: &O,
    origin: Vec2,
    direction: Vec2,
    remaining_distance: f32,
    filter: LayerMask,
) -> BouncePath
where
    O: RaycastOracle + ?Sized,
{
    BounceTracer::new(oracle).trace(origin, direction, remaining_distance, filter)
}

/// Traces reflecting rays against a borrowed oracle
#[derive(Debug)]
pub struct BounceTracer<'a, O: ?Sized> {
    oracle: &'a O,
    max_bounces: Option<usize>,
}

impl<O: ?Sized> Clone for BounceTracer<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for BounceTracer<'_, O> {}

impl<'a, O> BounceTracer<'a, O>
where
    O: RaycastOracle + ?Sized,
{
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            max_bounces: None,
        }
    }

    /// Stop reflecting after `max` bounces (`None` = until the budget runs out)
    ///
    /// The hit that would have been bounce `max + 1` becomes the terminal
    /// point, and the final direction stays unreflected.
    pub fn with_max_bounces(mut self, max: Option<usize>) -> Self {
        self.max_bounces = max;
        self
    }

    pub fn max_bounces(&self) -> Option<usize> {
        self.max_bounces
    }

    /// Follow a ray from `origin` along `direction` for `remaining_distance`
    ///
    /// `direction` does not need to be normalized. A budget of zero or less
    /// (or NaN) yields a path with no end points.
    pub fn trace(
        &self,
        origin: Vec2,
        direction: Vec2,
        remaining_distance: f32,
        filter: LayerMask,
    ) -> BouncePath {
        let mut dir = direction.normalize_or_zero();
        let mut path = BouncePath::new(origin, dir);

        let mut origin = origin;
        let mut remaining = remaining_distance;

        while remaining > 0.0 {
            let hit = self.oracle.raycast(origin, dir, remaining, filter);

            // A hit at zero distance makes no progress; treat it as open space
            let hit = hit.filter(|h| h.distance > 0.0);

            let Some(hit) = hit else {
                path.end_points.push(origin + dir * remaining);
                break;
            };

            // Landing exactly on the budget leaves nothing to reflect with
            if hit.distance >= remaining {
                path.end_points.push(hit.point);
                break;
            }

            if self
                .max_bounces
                .is_some_and(|max| path.contacts.len() >= max)
            {
                log::debug!(
                    "Bounce cap of {} reached at ({}, {}), stopping",
                    path.contacts.len(),
                    hit.point.x,
                    hit.point.y
                );
                path.end_points.push(hit.point);
                break;
            }

            // Travelled direction is re-derived from the segment endpoints
            let incoming = (hit.point - origin).normalize_or_zero();
            let reflection = reflect(incoming, hit.normal);

            log::trace!(
                "Bounce {} at ({}, {}) normal ({}, {}), {} remaining",
                path.contacts.len() + 1,
                hit.point.x,
                hit.point.y,
                hit.normal.x,
                hit.normal.y,
                remaining - hit.distance
            );

            path.contacts.push(hit);
            path.end_points.push(hit.point);
            path.bounced = true;

            origin = hit.point;
            dir = reflection.normalize_or_zero();
            remaining -= hit.distance;
        }

        path.final_direction = dir;

        log::debug!(
            "Traced ray: {} bounces, {} end points, final direction ({}, {})",
            path.contacts.len(),
            path.end_points.len(),
            dir.x,
            dir.y
        );

        path
    }
}
