//! Ray intersection against collider shapes
//!
//! Segments are thin and two-sided. Circles and boxes are solid: a ray that
//! starts inside one (or on its surface, heading in) reports a contact at
//! distance zero, the same way host engines report queries that begin inside
//! a collider.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CONTACT_SKIN;

/// Collider geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Line segment from `a` to `b`, reflective on both sides
    Segment { a: Vec2, b: Vec2 },
    /// Solid disc
    Circle { center: Vec2, radius: f32 },
    /// Solid axis-aligned box
    Box { min: Vec2, max: Vec2 },
}

/// Where a ray meets a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    /// Distance along the (unit) ray direction
    pub distance: f32,
    /// Surface normal facing the incoming ray
    pub normal: Vec2,
}

impl ShapeHit {
    /// Contact for a ray that starts inside the shape
    fn start_inside(direction: Vec2) -> Self {
        Self {
            distance: 0.0,
            normal: -direction,
        }
    }
}

impl Shape {
    /// First intersection within `max_distance` of `origin` along unit `direction`
    pub fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<ShapeHit> {
        if direction == Vec2::ZERO {
            return None;
        }

        let hit = match *self {
            Shape::Segment { a, b } => ray_segment(origin, direction, a, b),
            Shape::Circle { center, radius } => ray_circle(origin, direction, center, radius),
            Shape::Box { min, max } => ray_box(origin, direction, min, max),
        }?;

        (hit.distance <= max_distance).then_some(hit)
    }

    /// Normal of a thin surface touching `point` that a ray cast from `origin`
    /// along `direction` is moving into
    ///
    /// Solid shapes always return `None`; only segments can meet at a corner
    /// a ray slips through.
    pub fn contact_normal(&self, origin: Vec2, point: Vec2, direction: Vec2) -> Option<Vec2> {
        let Shape::Segment { a, b } = *self else {
            return None;
        };
        if segment_distance(point, a, b) > CONTACT_SKIN {
            return None;
        }
        // Normal on the origin's side of the line
        let normal = (b - a).perp().normalize_or_zero();
        let side = normal.dot(origin - a);
        let normal = if side < 0.0 { -normal } else { normal };
        (side != 0.0 && normal.dot(direction) < 0.0).then_some(normal)
    }

    /// Reason the shape is unusable, if any
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Shape::Segment { a, b } => {
                if !a.is_finite() || !b.is_finite() {
                    return Err("segment endpoints must be finite".to_string());
                }
                if a.distance_squared(b) < CONTACT_SKIN * CONTACT_SKIN {
                    return Err("segment has zero length".to_string());
                }
            }
            Shape::Circle { center, radius } => {
                if !center.is_finite() {
                    return Err("circle center must be finite".to_string());
                }
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(format!("circle radius must be positive, got {}", radius));
                }
            }
            Shape::Box { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err("box corners must be finite".to_string());
                }
                if min.x >= max.x || min.y >= max.y {
                    return Err(format!(
                        "box min ({}, {}) must be below max ({}, {})",
                        min.x, min.y, max.x, max.y
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Distance from `p` to the closest point of segment `a`..`b`
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let edge = b - a;
    let len_sq = edge.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a); // Degenerate segment
    }
    let t = ((p - a).dot(edge) / len_sq).clamp(0.0, 1.0);
    p.distance(a + edge * t)
}

/// Ray against a two-sided segment
fn ray_segment(origin: Vec2, dir: Vec2, a: Vec2, b: Vec2) -> Option<ShapeHit> {
    let edge = b - a;
    let len = edge.length();
    let denom = dir.perp_dot(edge);
    if denom.abs() <= len * f32::EPSILON {
        return None; // Parallel (or colinear) - no single contact point
    }

    // Skip the surface the ray is leaving
    if segment_distance(origin, a, b) <= CONTACT_SKIN {
        return None;
    }

    let to_a = a - origin;
    let t = to_a.perp_dot(edge) / denom;
    let u = to_a.perp_dot(dir) / denom;

    // Ends are widened by the skin so a ray through a shared corner always
    // lands on at least one of the two segments
    let slack = CONTACT_SKIN / len;
    if t <= 0.0 || u < -slack || u > 1.0 + slack {
        return None;
    }

    Some(ShapeHit {
        distance: t,
        normal: facing_normal(edge, dir),
    })
}

/// Unit normal of `edge` on the side a ray moving along `dir` arrives from
fn facing_normal(edge: Vec2, dir: Vec2) -> Vec2 {
    let normal = edge.perp().normalize_or_zero();
    if normal.dot(dir) > 0.0 { -normal } else { normal }
}

/// Ray against a solid disc
fn ray_circle(origin: Vec2, dir: Vec2, center: Vec2, radius: f32) -> Option<ShapeHit> {
    let m = origin - center;
    let b = m.dot(dir);
    let c = m.length_squared() - radius * radius;

    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let t_exit = -b + root;
    if t_exit <= CONTACT_SKIN {
        return None; // Behind the ray, or leaving through the surface
    }

    let t_enter = -b - root;
    if t_enter <= CONTACT_SKIN {
        return Some(ShapeHit::start_inside(dir));
    }

    let normal = (m + dir * t_enter).normalize_or_zero();
    Some(ShapeHit {
        distance: t_enter,
        normal,
    })
}

/// Ray against a solid axis-aligned box (slab method)
fn ray_box(origin: Vec2, dir: Vec2, min: Vec2, max: Vec2) -> Option<ShapeHit> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut normal = Vec2::ZERO;

    for axis in 0..2 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);

        if d.abs() < f32::EPSILON {
            // Parallel to this slab: must already be between its planes
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let t_lo = (lo - o) / d;
        let t_hi = (hi - o) / d;
        let (near, far) = if t_lo < t_hi { (t_lo, t_hi) } else { (t_hi, t_lo) };

        if near > t_enter {
            t_enter = near;
            normal = Vec2::ZERO;
            normal[axis] = -d.signum();
        }
        t_exit = t_exit.min(far);
    }

    if t_enter > t_exit || t_exit <= CONTACT_SKIN {
        return None;
    }

    if t_enter <= CONTACT_SKIN {
        return Some(ShapeHit::start_inside(dir));
    }

    Some(ShapeHit {
        distance: t_enter,
        normal,
    })
}
