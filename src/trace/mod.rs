//! Bounce tracing module
//!
//! Everything needed to follow a reflecting ray. This module must stay pure:
//! - No scene ownership (geometry comes through `RaycastOracle`)
//! - No shared mutable state between traces
//! - Every input produces a path, degenerate directions included

pub mod hit;
pub mod oracle;
pub mod path;
pub mod reflect;
pub mod tracer;

pub use hit::{ColliderId, HitResult, LayerMask};
pub use oracle::RaycastOracle;
pub use path::BouncePath;
pub use reflect::reflect;
pub use tracer::{BounceTracer, trace};
