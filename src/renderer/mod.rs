//! Rendering module
//!
//! The game never owns a drawing backend. It describes each frame as
//! primitive draw calls on a host-provided [`DrawSurface`].

pub mod scene;
pub mod surface;

pub use scene::draw_frame;
pub use surface::{
    Color, DrawCommand, DrawSurface, RecordingSurface, TextStyle, rgb,
};
