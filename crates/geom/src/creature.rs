use shooter_common::Point3;

use crate::{Mesh, Triangle};

/// Low-poly creature: body, head with two ears, a two-part tail and four
/// legs. Axis-aligned boxes in model units, roughly 15 across; callers
/// scale it down to the desired size.
#[rustfmt::skip]
const CREATURE_TRIANGLES: [[f32; 9]; 116] = [
    [0.0, 0.0, 0.0,  0.0, 3.0, 3.0,  0.0, 0.0, 3.0],
    [0.0, 0.0, 0.0,  0.0, 3.0, 0.0,  0.0, 3.0, 3.0],
    [0.0, 0.0, 0.0,  8.0, 0.0, 3.0,  8.0, 0.0, 0.0],
    [0.0, 0.0, 0.0,  0.0, 0.0, 3.0,  8.0, 0.0, 3.0],
    [0.0, 0.0, 0.0,  8.0, 3.0, 0.0,  0.0, 3.0, 0.0],
    [0.0, 0.0, 0.0,  8.0, 0.0, 0.0,  8.0, 3.0, 0.0],
    [0.0, 0.0, 3.0,  0.0, 3.0, 3.0,  8.0, 3.0, 3.0],
    [0.0, 0.0, 3.0,  8.0, 3.0, 3.0,  8.0, 0.0, 3.0],
    [0.0, 3.0, 0.0,  8.0, 3.0, 3.0,  8.0, 3.0, 0.0],
    [0.0, 3.0, 0.0,  0.0, 3.0, 3.0,  8.0, 3.0, 3.0],
    [8.0, 0.0, 0.0,  8.0, 3.0, 3.0,  8.0, 0.0, 3.0],
    [8.0, 0.0, 0.0,  8.0, 3.0, 0.0,  8.0, 3.0, 3.0],
    [7.0, 0.0, 3.0,  7.0, 3.0, 6.0,  7.0, 0.0, 6.0],
    [7.0, 0.0, 3.0,  7.0, 3.0, 6.0,  7.0, 3.0, 3.0],
    [7.0, 0.0, 3.0,  11.0, 0.0, 6.0,  11.0, 0.0, 3.0],
    [7.0, 0.0, 3.0,  11.0, 0.0, 6.0,  7.0, 0.0, 6.0],
    [7.0, 0.0, 3.0,  11.0, 3.0, 3.0,  7.0, 3.0, 3.0],
    [7.0, 0.0, 3.0,  11.0, 3.0, 3.0,  11.0, 0.0, 3.0],
    [7.0, 0.0, 6.0,  11.0, 3.0, 6.0,  7.0, 3.0, 6.0],
    [7.0, 0.0, 6.0,  11.0, 3.0, 6.0,  11.0, 0.0, 6.0],
    [7.0, 3.0, 3.0,  11.0, 3.0, 6.0,  11.0, 3.0, 3.0],
    [7.0, 3.0, 3.0,  11.0, 3.0, 6.0,  7.0, 3.0, 6.0],
    [11.0, 0.0, 3.0,  11.0, 3.0, 6.0,  11.0, 0.0, 6.0],
    [11.0, 0.0, 3.0,  11.0, 3.0, 6.0,  11.0, 3.0, 3.0],
    [8.0, 0.0, 6.0,  7.0, 1.0, 6.0,  7.0, 0.0, 7.0],
    [7.0, 0.0, 6.0,  7.0, 0.0, 7.0,  7.0, 1.0, 6.0],
    [7.0, 0.0, 6.0,  8.0, 0.0, 6.0,  7.0, 0.0, 7.0],
    [7.0, 0.0, 6.0,  8.0, 0.0, 6.0,  7.0, 1.0, 6.0],
    [8.0, 3.0, 6.0,  7.0, 2.0, 6.0,  7.0, 3.0, 7.0],
    [7.0, 3.0, 6.0,  7.0, 2.0, 6.0,  7.0, 3.0, 7.0],
    [7.0, 3.0, 6.0,  8.0, 3.0, 6.0,  7.0, 3.0, 7.0],
    [7.0, 3.0, 6.0,  8.0, 3.0, 6.0,  7.0, 2.0, 6.0],
    [-3.0, 1.0, 2.0,  -3.0, 2.0, 3.0,  -3.0, 1.0, 3.0],
    [-3.0, 1.0, 2.0,  -3.0, 2.0, 3.0,  -3.0, 2.0, 2.0],
    [-3.0, 1.0, 2.0,  0.0, 1.0, 3.0,  0.0, 1.0, 2.0],
    [-3.0, 1.0, 2.0,  0.0, 1.0, 3.0,  -3.0, 1.0, 3.0],
    [-3.0, 1.0, 2.0,  0.0, 2.0, 2.0,  -3.0, 2.0, 2.0],
    [-3.0, 1.0, 2.0,  0.0, 2.0, 2.0,  0.0, 1.0, 2.0],
    [-3.0, 1.0, 3.0,  0.0, 2.0, 3.0,  -3.0, 2.0, 3.0],
    [-3.0, 1.0, 3.0,  0.0, 2.0, 3.0,  0.0, 1.0, 3.0],
    [-3.0, 2.0, 2.0,  0.0, 2.0, 3.0,  0.0, 2.0, 2.0],
    [-3.0, 2.0, 2.0,  0.0, 2.0, 3.0,  -3.0, 2.0, 3.0],
    [0.0, 1.0, 2.0,  0.0, 2.0, 3.0,  0.0, 1.0, 3.0],
    [0.0, 1.0, 2.0,  0.0, 2.0, 3.0,  0.0, 2.0, 2.0],
    [-3.0, 1.0, 3.0,  -3.0, 2.0, 5.0,  -3.0, 1.0, 5.0],
    [-3.0, 1.0, 3.0,  -3.0, 2.0, 5.0,  -3.0, 2.0, 3.0],
    [-3.0, 1.0, 3.0,  -2.0, 1.0, 5.0,  -2.0, 1.0, 3.0],
    [-3.0, 1.0, 3.0,  -2.0, 1.0, 5.0,  -3.0, 1.0, 5.0],
    [-3.0, 1.0, 3.0,  -2.0, 2.0, 3.0,  -3.0, 2.0, 3.0],
    [-3.0, 1.0, 3.0,  -2.0, 2.0, 3.0,  -2.0, 1.0, 3.0],
    [-3.0, 1.0, 5.0,  -2.0, 2.0, 5.0,  -3.0, 2.0, 5.0],
    [-3.0, 1.0, 5.0,  -2.0, 2.0, 5.0,  -2.0, 1.0, 5.0],
    [-3.0, 2.0, 3.0,  -2.0, 2.0, 5.0,  -2.0, 2.0, 3.0],
    [-3.0, 2.0, 3.0,  -2.0, 2.0, 5.0,  -3.0, 2.0, 5.0],
    [-2.0, 1.0, 3.0,  -2.0, 2.0, 5.0,  -2.0, 1.0, 5.0],
    [-2.0, 1.0, 3.0,  -2.0, 2.0, 5.0,  -2.0, 2.0, 3.0],
    [-4.0, 1.0, 4.0,  -4.0, 2.0, 5.0,  -4.0, 1.0, 5.0],
    [-4.0, 1.0, 4.0,  -4.0, 2.0, 5.0,  -4.0, 2.0, 4.0],
    [-4.0, 1.0, 4.0,  -3.0, 1.0, 5.0,  -3.0, 1.0, 4.0],
    [-4.0, 1.0, 4.0,  -3.0, 1.0, 5.0,  -4.0, 1.0, 5.0],
    [-4.0, 1.0, 4.0,  -3.0, 2.0, 4.0,  -4.0, 2.0, 4.0],
    [-4.0, 1.0, 4.0,  -3.0, 2.0, 4.0,  -3.0, 1.0, 4.0],
    [-4.0, 1.0, 5.0,  -3.0, 2.0, 5.0,  -4.0, 2.0, 5.0],
    [-4.0, 1.0, 5.0,  -3.0, 2.0, 5.0,  -3.0, 1.0, 5.0],
    [-4.0, 2.0, 4.0,  -3.0, 2.0, 5.0,  -3.0, 2.0, 4.0],
    [-4.0, 2.0, 4.0,  -3.0, 2.0, 5.0,  -4.0, 2.0, 5.0],
    [-3.0, 1.0, 4.0,  -3.0, 2.0, 5.0,  -3.0, 1.0, 5.0],
    [-3.0, 1.0, 4.0,  -3.0, 2.0, 5.0,  -3.0, 2.0, 4.0],
    [7.0, 0.0, -1.0,  7.0, 1.0, 0.0,  7.0, 0.0, 0.0],
    [7.0, 0.0, -1.0,  7.0, 1.0, 0.0,  7.0, 1.0, -1.0],
    [7.0, 0.0, -1.0,  8.0, 0.0, 0.0,  8.0, 0.0, -1.0],
    [7.0, 0.0, -1.0,  8.0, 0.0, 0.0,  7.0, 0.0, 0.0],
    [7.0, 0.0, -1.0,  8.0, 1.0, -1.0,  7.0, 1.0, -1.0],
    [7.0, 0.0, -1.0,  8.0, 1.0, -1.0,  8.0, 0.0, -1.0],
    [7.0, 0.0, 0.0,  8.0, 1.0, 0.0,  7.0, 1.0, 0.0],
    [7.0, 0.0, 0.0,  8.0, 1.0, 0.0,  8.0, 0.0, 0.0],
    [7.0, 1.0, -1.0,  8.0, 1.0, 0.0,  8.0, 1.0, -1.0],
    [7.0, 1.0, -1.0,  8.0, 1.0, 0.0,  7.0, 1.0, 0.0],
    [8.0, 0.0, -1.0,  8.0, 1.0, 0.0,  8.0, 0.0, 0.0],
    [8.0, 0.0, -1.0,  8.0, 1.0, 0.0,  8.0, 1.0, -1.0],
    [7.0, 2.0, -1.0,  7.0, 3.0, 0.0,  7.0, 2.0, 0.0],
    [7.0, 2.0, -1.0,  7.0, 3.0, 0.0,  7.0, 3.0, -1.0],
    [7.0, 2.0, -1.0,  8.0, 2.0, 0.0,  8.0, 2.0, -1.0],
    [7.0, 2.0, -1.0,  8.0, 2.0, 0.0,  7.0, 2.0, 0.0],
    [7.0, 2.0, -1.0,  8.0, 3.0, -1.0,  7.0, 3.0, -1.0],
    [7.0, 2.0, -1.0,  8.0, 3.0, -1.0,  8.0, 2.0, -1.0],
    [7.0, 2.0, 0.0,  8.0, 3.0, 0.0,  7.0, 3.0, 0.0],
    [7.0, 2.0, 0.0,  8.0, 3.0, 0.0,  8.0, 2.0, 0.0],
    [7.0, 3.0, -1.0,  8.0, 3.0, 0.0,  8.0, 3.0, -1.0],
    [7.0, 3.0, -1.0,  8.0, 3.0, 0.0,  7.0, 3.0, 0.0],
    [8.0, 2.0, -1.0,  8.0, 3.0, 0.0,  8.0, 2.0, 0.0],
    [8.0, 2.0, -1.0,  8.0, 3.0, 0.0,  8.0, 3.0, -1.0],
    [0.0, 2.0, -1.0,  0.0, 3.0, 0.0,  0.0, 2.0, 0.0],
    [0.0, 2.0, -1.0,  0.0, 3.0, 0.0,  0.0, 3.0, -1.0],
    [0.0, 2.0, -1.0,  1.0, 2.0, 0.0,  1.0, 2.0, -1.0],
    [0.0, 2.0, -1.0,  1.0, 2.0, 0.0,  0.0, 2.0, 0.0],
    [0.0, 2.0, -1.0,  1.0, 3.0, -1.0,  0.0, 3.0, -1.0],
    [0.0, 2.0, -1.0,  1.0, 3.0, -1.0,  1.0, 2.0, -1.0],
    [0.0, 2.0, 0.0,  1.0, 3.0, 0.0,  0.0, 3.0, 0.0],
    [0.0, 2.0, 0.0,  1.0, 3.0, 0.0,  1.0, 2.0, 0.0],
    [0.0, 3.0, -1.0,  1.0, 3.0, 0.0,  1.0, 3.0, -1.0],
    [0.0, 3.0, -1.0,  1.0, 3.0, 0.0,  0.0, 3.0, 0.0],
    [1.0, 2.0, -1.0,  1.0, 3.0, 0.0,  1.0, 2.0, 0.0],
    [1.0, 2.0, -1.0,  1.0, 3.0, 0.0,  1.0, 3.0, -1.0],
    [0.0, 0.0, -1.0,  0.0, 1.0, 0.0,  0.0, 0.0, 0.0],
    [0.0, 0.0, -1.0,  0.0, 1.0, 0.0,  0.0, 1.0, -1.0],
    [0.0, 0.0, -1.0,  1.0, 0.0, 0.0,  1.0, 0.0, -1.0],
    [0.0, 0.0, -1.0,  1.0, 0.0, 0.0,  0.0, 0.0, 0.0],
    [0.0, 0.0, -1.0,  1.0, 1.0, -1.0,  0.0, 1.0, -1.0],
    [0.0, 0.0, -1.0,  1.0, 1.0, -1.0,  1.0, 0.0, -1.0],
    [0.0, 0.0, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0,  1.0, 1.0, 0.0,  1.0, 0.0, 0.0],
    [0.0, 1.0, -1.0,  1.0, 1.0, 0.0,  1.0, 1.0, -1.0],
    [0.0, 1.0, -1.0,  1.0, 1.0, 0.0,  0.0, 1.0, 0.0],
    [1.0, 0.0, -1.0,  1.0, 1.0, 0.0,  1.0, 0.0, 0.0],
    [1.0, 0.0, -1.0,  1.0, 1.0, 0.0,  1.0, 1.0, -1.0],
];

/// Build the creature mesh. It carries no texture coordinates.
pub fn creature() -> Mesh {
    let triangles = CREATURE_TRIANGLES
        .iter()
        .map(|t| Triangle::new([&t[0..3], &t[3..6], &t[6..9]].map(Point3::from_slice)))
        .collect();
    Mesh::new(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creature_is_fixed_asset() {
        let mesh = creature();
        assert_eq!(mesh.triangle_count(), 116);
        assert!(mesh.texcoords.is_empty());
        assert_eq!(mesh, creature());
    }

    #[test]
    fn creature_bounds() {
        let mesh = creature();
        let (mut min, mut max) = (Point3::splat(f32::MAX), Point3::splat(f32::MIN));
        for t in &mesh.triangles {
            for p in t.points() {
                min = min.min(*p);
                max = max.max(*p);
            }
        }
        assert_eq!(min, Point3::new(-4.0, 0.0, -1.0));
        assert_eq!(max, Point3::new(11.0, 3.0, 7.0));
    }
}
