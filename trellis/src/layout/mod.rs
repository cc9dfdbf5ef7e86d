//! Layout system.
//!
//! Geometry resolution runs once per frame over a container's children, in
//! insertion order:
//!
//! ```text
//! requested size + Sizing  -> resolved size      (sizing)
//! Alignment + resolved size -> candidate origin  (align)
//! floating children         -> packed slots      (flow)
//! ```
//!
//! Nothing here is cached; re-running a pass over an unchanged children
//! sequence yields identical rectangles.

pub mod align;
pub mod flow;
pub mod sizing;

pub use align::{anchored_offset, hug_offset, Alignment};
pub use flow::FlowPacker;
pub use sizing::{preferred_size, resolve_size, Sizing};
