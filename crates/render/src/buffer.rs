use shooter_common::{ColorError, Rgb, TexCoord};
use shooter_geom::Triangle;

/// Errors from feeding untyped data into the frame buffer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BufferError {
    #[error("invalid colour: {0}")]
    Color(#[from] ColorError),
}

/// Anything that can append itself to a frame.
pub trait Drawable {
    fn draw(&self, buffer: &mut FrameBuffer);
}

/// Flat vertex, colour and texture-coordinate streams for one frame.
///
/// Every vertex contributes three position scalars and three colour
/// scalars. Texture coordinates are an independent stream filled only by
/// meshes that carry them.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    vertex: Vec<f32>,
    color: Vec<f32>,
    texture: Vec<f32>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all three streams. Call once per frame before any `add`.
    pub fn clear(&mut self) {
        self.vertex.clear();
        self.color.clear();
        self.texture.clear();
    }

    /// Append `triangles` with one flat `color` and the given texcoords.
    pub fn add(&mut self, triangles: &[Triangle], color: Rgb, texcoords: &[TexCoord]) {
        let rgb = color.to_array();
        self.vertex.reserve(triangles.len() * 9);
        self.color.reserve(triangles.len() * 9);

        for triangle in triangles {
            for p in triangle.points() {
                self.vertex.extend_from_slice(&p.to_array());
                self.color.extend_from_slice(&rgb);
            }
        }

        for uv in texcoords {
            self.texture.extend_from_slice(&uv.to_array());
        }
    }

    /// Like [`add`](Self::add) but with the colour as a raw channel list,
    /// which must hold exactly one RGB triple.
    pub fn add_flat(
        &mut self,
        triangles: &[Triangle],
        color: &[f32],
        texcoords: &[TexCoord],
    ) -> Result<(), BufferError> {
        let color = Rgb::try_from_slice(color)?;
        self.add(triangles, color, texcoords);
        Ok(())
    }

    /// Number of scalars in the vertex stream.
    ///
    /// # Panics
    /// If the vertex and colour streams have diverged.
    pub fn size(&self) -> usize {
        assert_eq!(
            self.vertex.len(),
            self.color.len(),
            "vertex and colour streams out of step"
        );
        self.vertex.len()
    }

    /// Number of scalars in the texcoord stream.
    pub fn texture_size(&self) -> usize {
        self.texture.len()
    }

    /// Number of vertices to submit for drawing.
    pub fn vertex_count(&self) -> usize {
        self.size() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty()
    }

    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex
    }

    pub fn color_data(&self) -> &[f32] {
        &self.color
    }

    pub fn texture_data(&self) -> &[f32] {
        &self.texture
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    pub fn texture_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shooter_common::Point3;

    fn two_triangles() -> Vec<Triangle> {
        vec![
            Triangle::new([Point3::ZERO, Point3::X, Point3::Y]),
            Triangle::new([Point3::X, Point3::Y, Point3::Z]),
        ]
    }

    #[test]
    fn add_two_triangles_one_color() {
        let mut buf = FrameBuffer::new();
        buf.clear();
        buf.add(&two_triangles(), Rgb::new(0.8, 0.7, 0.4), &[]);

        assert_eq!(buf.vertex_data().len(), 18);
        assert_eq!(buf.color_data().len(), 18);
        assert_eq!(buf.size(), 18);
        assert_eq!(buf.vertex_count(), 6);
        assert_eq!(buf.texture_size(), 0);
        assert_eq!(&buf.color_data()[15..18], &[0.8, 0.7, 0.4]);
        assert_eq!(&buf.vertex_data()[3..6], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn texcoords_are_independent() {
        let mut buf = FrameBuffer::new();
        let uvs = [TexCoord::new(0.0, 1.0), TexCoord::new(0.5, 0.25)];
        buf.add(&two_triangles(), Rgb::BLACK, &uvs);
        assert_eq!(buf.texture_size(), 4);
        assert_eq!(buf.texture_data(), &[0.0, 1.0, 0.5, 0.25]);
        assert_eq!(buf.size(), 18);
    }

    #[test]
    fn clear_discards_all_streams() {
        let mut buf = FrameBuffer::new();
        buf.add(&two_triangles(), Rgb::WHITE, &[TexCoord::ZERO]);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.texture_size(), 0);
    }

    #[test]
    fn add_flat_rejects_wrong_arity() {
        let mut buf = FrameBuffer::new();
        let err = buf
            .add_flat(&two_triangles(), &[1.0, 0.0, 0.0, 1.0], &[])
            .unwrap_err();
        assert_eq!(
            err,
            BufferError::Color(ColorError::Arity {
                expected: 3,
                actual: 4
            })
        );
        // Nothing was appended.
        assert!(buf.is_empty());

        buf.add_flat(&two_triangles(), &[1.0, 0.0, 0.0], &[]).unwrap();
        assert_eq!(buf.size(), 18);
    }

    #[test]
    fn byte_views_match_scalar_counts() {
        let mut buf = FrameBuffer::new();
        buf.add(&two_triangles(), Rgb::WHITE, &[TexCoord::ONE]);
        assert_eq!(buf.vertex_bytes().len(), 18 * 4);
        assert_eq!(buf.color_bytes().len(), 18 * 4);
        assert_eq!(buf.texture_bytes().len(), 2 * 4);
    }

    #[test]
    #[should_panic(expected = "out of step")]
    fn size_checks_stream_parity() {
        let mut buf = FrameBuffer::new();
        buf.vertex.push(1.0);
        buf.size();
    }
}
