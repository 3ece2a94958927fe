//! Scene geometry: triangle primitives, meshes, procedural generators.
//!
//! # Invariants
//! - A triangle always holds exactly three points.
//! - Rotation is applied as three sequential planar rotations (X, then Y,
//!   then Z), each reading the previous stage's output.
//! - Generators are pure: the same arguments always produce the same mesh.

mod creature;
mod generate;
mod mesh;
mod triangle;

pub use creature::creature;
pub use generate::{floor_quad, uv_sphere};
pub use mesh::Mesh;
pub use triangle::{GeometryError, Triangle};

pub fn crate_info() -> &'static str {
    "shooter-geom v0.1.0"
}
