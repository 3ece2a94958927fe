use shooter_common::{Point3, TexCoord};

use crate::Triangle;

/// An ordered list of triangles plus optional per-vertex texture coordinates.
///
/// `texcoords` is either empty or holds one entry per emitted vertex; the
/// generators in this crate keep that pairing, but nothing downstream
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
    pub texcoords: Vec<TexCoord>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self {
            triangles,
            texcoords: Vec::new(),
        }
    }

    pub fn with_texcoords(triangles: Vec<Triangle>, texcoords: Vec<TexCoord>) -> Self {
        Self {
            triangles,
            texcoords,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn translate(&mut self, delta: Point3) {
        for t in &mut self.triangles {
            t.translate(delta);
        }
    }

    pub fn scale(&mut self, alpha: f32) {
        for t in &mut self.triangles {
            t.scale(alpha);
        }
    }

    /// See [`Triangle::rotate`] for the stage order.
    pub fn rotate(&mut self, angle: Point3) {
        for t in &mut self.triangles {
            t.rotate(angle);
        }
    }
}
