//! Motion primitives for the profile card animation.
//!
//! The tooltip follows the pointer through a small pipeline:
//!
//! ```text
//! pointer offset ──► MotionValue ──► LinearMap ──► Spring ──► style
//!                                    (rotate)      (k=100, c=5)
//!                                    (translateX)
//! ```
//!
//! Everything here is pull-based: the UI writes the motion value on
//! pointer events and advances the springs from its frame loop.

mod spring;
mod transform;
mod value;

pub use spring::{Spring, SpringConfig, MAX_SUBSTEPS, MAX_SUBSTEP_SECS, TILT_SPRING, TOOLTIP_SPRING};
pub use transform::LinearMap;
pub use value::MotionValue;
