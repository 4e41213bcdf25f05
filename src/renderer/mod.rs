//! Rendering projection
//!
//! Turns a [`RenderSnapshot`](crate::sim::RenderSnapshot) into a flat
//! triangle list in screen pixels. Stateless: the same snapshot always
//! produces the same vertices, and nothing here touches simulation state.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::build_scene;
pub use vertex::{Vertex, as_bytes};
