//! Lasso selection of screen-projected objects and mesh vertices.
//!
//! The user clicks a freehand polygon over a viewport. Once the last click lands close enough to
//! the first, every candidate whose projection is inside the polygon by ray-crossing parity is
//! selected.
//!
//! - [`hit_test`] is the stateless geometry.
//! - [`SelectionSession`] is the state machine driven by pointer events.
//! - [`LassoTool`] connects a session to the host through the [`HostContext`], [`Scene`] and
//!   [`OverlayRenderer`] traits.

mod camera;
mod candidate;
mod error;
mod geometry;
mod host;
mod session;
mod tool;


pub use camera::*;
pub use candidate::*;
pub use error::*;
pub use geometry::*;
pub use hit_test::{Classification, classify, is_closed};
pub use host::*;
pub use session::*;
pub use tool::*;

pub use glam;
