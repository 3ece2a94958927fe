//! Rendering adapter: frame stream assembly and a renderer-agnostic interface.
//!
//! # Invariants
//! - The frame buffer is rebuilt from scratch every tick.
//! - Vertex and colour streams always have equal length.
//! - Renderers read a finished frame; they never mutate scene state.

mod buffer;
mod camera;
mod frame;

pub use buffer::{BufferError, Drawable, FrameBuffer};
pub use camera::PlayerCamera;
pub use frame::{ClearColor, DebugTextRenderer, FrameView, Renderer};

pub fn crate_info() -> &'static str {
    "shooter-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
