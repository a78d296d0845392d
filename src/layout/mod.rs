//! 2-D layout of the normalized timeline.
//!
//! Hosts become lanes placed left to right in registry order, events
//! become horizontal arrows positioned by elapsed time. The output is a
//! backend-neutral [`DiagramLayout`].

mod engine;
mod types;

pub use engine::layout_diagram;
pub use types::{ClickInfo, DiagramLayout, EventArrow, LifelineBox};
