use std::f64::consts::PI;

use shooter_common::{Point3, TexCoord};

use crate::{Mesh, Triangle};

/// Tessellate a sphere of `radius` centred on the origin.
///
/// The surface is cut into `triangle_count / 2` latitude bands and
/// `triangle_count` longitude divisions; every cell emits two triangles
/// and three texture coordinates per triangle vertex. The result has
/// `(triangle_count / 2) * triangle_count * 2` triangles, which equals the
/// requested count squared only for even `triangle_count`.
pub fn uv_sphere(radius: f32, triangle_count: usize) -> Mesh {
    assert!(triangle_count >= 2, "uv_sphere needs at least 2 divisions");

    let bands = triangle_count / 2;
    let segments = triangle_count;
    let r = f64::from(radius);

    let mut triangles = Vec::with_capacity(bands * segments * 2);
    let mut texcoords = Vec::with_capacity(bands * segments * 6);

    let surface = |theta: f64, phi: f64| {
        Point3::new(
            (phi.cos() * theta.sin() * r) as f32,
            (phi.sin() * theta.sin() * r) as f32,
            (theta.cos() * r) as f32,
        )
    };

    for i in 0..bands {
        let theta0 = PI * i as f64 / bands as f64;
        let theta1 = PI * (i + 1) as f64 / bands as f64;
        let v0 = 1.0 - i as f32 / bands as f32;
        let v1 = 1.0 - (i + 1) as f32 / bands as f32;

        for j in 0..segments {
            let phi0 = 2.0 * PI * j as f64 / segments as f64 + PI;
            let phi1 = 2.0 * PI * (j + 1) as f64 / segments as f64 + PI;
            let u0 = j as f32 / segments as f32;
            let u1 = (j + 1) as f32 / segments as f32;

            triangles.push(Triangle::new([
                surface(theta0, phi0),
                surface(theta1, phi1),
                surface(theta0, phi1),
            ]));
            texcoords.extend([
                TexCoord::new(u0, v0),
                TexCoord::new(u1, v1),
                TexCoord::new(u1, v0),
            ]);

            triangles.push(Triangle::new([
                surface(theta0, phi0),
                surface(theta1, phi0),
                surface(theta1, phi1),
            ]));
            texcoords.extend([
                TexCoord::new(u0, v0),
                TexCoord::new(u0, v1),
                TexCoord::new(u1, v1),
            ]);
        }
    }

    tracing::trace!(
        radius,
        triangle_count,
        emitted = triangles.len(),
        "tessellated sphere"
    );

    Mesh::with_texcoords(triangles, texcoords)
}

/// Two triangles covering `[-half_size, half_size]²` on the `y = 0` plane.
pub fn floor_quad(half_size: f32) -> Mesh {
    let h = half_size;
    Mesh::new(vec![
        Triangle::new([
            Point3::new(-h, 0.0, -h),
            Point3::new(h, 0.0, h),
            Point3::new(h, 0.0, -h),
        ]),
        Triangle::new([
            Point3::new(h, 0.0, h),
            Point3::new(-h, 0.0, -h),
            Point3::new(-h, 0.0, h),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sphere_counts_for_even_request() {
        let mesh = uv_sphere(0.5, 20);
        assert_eq!(mesh.triangle_count(), 10 * 20 * 2);
        assert_eq!(mesh.triangle_count(), 400);
        assert_eq!(mesh.texcoords.len(), 1200);
    }

    #[test]
    fn sphere_rounds_bands_down_for_odd_request() {
        let mesh = uv_sphere(1.0, 7);
        assert_eq!(mesh.triangle_count(), 3 * 7 * 2);
        assert_eq!(mesh.texcoords.len(), mesh.vertex_count());
    }

    #[test]
    fn sphere_vertices_lie_on_surface() {
        let radius = 2.5;
        let mesh = uv_sphere(radius, 12);
        for t in &mesh.triangles {
            for p in t.points() {
                assert_abs_diff_eq!(p.length(), radius, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn sphere_texcoords_in_unit_square() {
        let mesh = uv_sphere(1.0, 10);
        for uv in &mesh.texcoords {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
        // First cell maps to the top-left corner of the texture.
        assert_eq!(mesh.texcoords[0], TexCoord::new(0.0, 1.0));
    }

    #[test]
    fn sphere_first_vertex_is_north_pole() {
        let mesh = uv_sphere(3.0, 8);
        let p = mesh.triangles[0].points()[0];
        assert_abs_diff_eq!(p.z, 3.0, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn sphere_rejects_degenerate_request() {
        uv_sphere(1.0, 1);
    }

    #[test]
    fn floor_is_flat_square() {
        let mesh = floor_quad(10.0);
        assert_eq!(mesh.triangle_count(), 2);
        for t in &mesh.triangles {
            for p in t.points() {
                assert_eq!(p.y, 0.0);
                assert_eq!(p.x.abs(), 10.0);
                assert_eq!(p.z.abs(), 10.0);
            }
        }
    }
}
