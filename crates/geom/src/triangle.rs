use shooter_common::Point3;

/// Errors from building a triangle out of untyped coordinate lists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("flat coordinate list must hold 9 scalars, got {0}")]
    FlatLength(usize),
    #[error("triangle needs exactly 3 points, got {0}")]
    PointCount(usize),
}

/// Three points in world space. Point order fixes the winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    points: [Point3; 3],
}

impl Triangle {
    pub fn new(points: [Point3; 3]) -> Self {
        Self { points }
    }

    /// Build from `x0 y0 z0 x1 y1 z1 x2 y2 z2`.
    pub fn from_flat(data: &[f32]) -> Result<Self, GeometryError> {
        if data.len() != 9 {
            return Err(GeometryError::FlatLength(data.len()));
        }
        Ok(Self::new([
            Point3::from_slice(&data[0..3]),
            Point3::from_slice(&data[3..6]),
            Point3::from_slice(&data[6..9]),
        ]))
    }

    pub fn from_points(points: &[Point3]) -> Result<Self, GeometryError> {
        let points: [Point3; 3] = points
            .try_into()
            .map_err(|_| GeometryError::PointCount(points.len()))?;
        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[Point3; 3] {
        &self.points
    }

    pub fn translate(&mut self, delta: Point3) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Scale about the origin, not the centroid.
    pub fn scale(&mut self, alpha: f32) {
        for p in &mut self.points {
            *p *= alpha;
        }
    }

    /// Rotate every point by `angle.x`, then `angle.y`, then `angle.z`.
    ///
    /// Each stage consumes the previous stage's output. The X stage turns
    /// in the XY plane, the Y stage in the XZ plane and the Z stage in the
    /// XY plane again. Orientation of spawned meshes depends on this exact
    /// order, so it must not be folded into a single matrix.
    pub fn rotate(&mut self, angle: Point3) {
        let (sin_x, cos_x) = angle.x.sin_cos();
        let (sin_y, cos_y) = angle.y.sin_cos();
        let (sin_z, cos_z) = angle.z.sin_cos();

        for p in &mut self.points {
            (p.x, p.y) = turn(p.x, p.y, sin_x, cos_x);
            (p.x, p.z) = turn(p.x, p.z, sin_y, cos_y);
            (p.x, p.y) = turn(p.x, p.y, sin_z, cos_z);
        }
    }
}

fn turn(a: f32, b: f32, sin: f32, cos: f32) -> (f32, f32) {
    (a * cos - b * sin, a * sin + b * cos)
}
