use glam::Mat4;
use shooter_common::{Rgb, Tick};

use crate::FrameBuffer;

/// Background colour for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearColor {
    #[default]
    Sky,
    /// Shown on a tick that resolved a collision.
    Flash,
}

impl ClearColor {
    pub fn rgb(self) -> Rgb {
        match self {
            Self::Sky => Rgb::new(0.0, 0.7, 1.0),
            Self::Flash => Rgb::new(1.0, 1.0, 0.2),
        }
    }
}

/// Everything the external renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub tick: Tick,
    pub buffer: &'a FrameBuffer,
    pub clear: ClearColor,
    pub mvp: Mat4,
    pub targets: usize,
    pub fireballs: usize,
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a finished frame and produces output. It never
/// touches scene state.
pub trait Renderer {
    type Output;

    fn render(&self, frame: &FrameView<'_>) -> Self::Output;
}

/// Produces a human-readable frame summary. Used by the CLI and tests in
/// place of a GPU backend.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameView<'_>) -> String {
        let mut out = String::new();
        let clear = frame.clear.rgb();
        out.push_str(&format!("=== Frame (tick={}) ===\n", frame.tick));
        out.push_str(&format!(
            "Entities: targets={} fireballs={}\n",
            frame.targets, frame.fireballs
        ));
        out.push_str(&format!(
            "Streams: vertices={} vertex_scalars={} texcoord_scalars={}\n",
            frame.buffer.vertex_count(),
            frame.buffer.size(),
            frame.buffer.texture_size()
        ));
        out.push_str(&format!(
            "Clear: {:?} ({:.1}, {:.1}, {:.1})\n",
            frame.clear, clear.r, clear.g, clear.b
        ));
        out
    }
}
