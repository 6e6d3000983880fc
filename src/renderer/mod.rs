//! WebGPU rendering module
//!
//! One pipeline, one streaming vertex buffer. Every shape in the scene is
//! tessellated into a single triangle list each frame and drawn in one pass.

pub mod compose;
pub mod glyphs;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use compose::FrameComposer;
pub use pipeline::RenderState;
pub use vertex::Vertex;
