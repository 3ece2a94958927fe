use glam::Vec3;
use shooter_common::{Point3, Rgb, Tick};
use shooter_geom::{creature, floor_quad, uv_sphere, Mesh};
use shooter_render::{Drawable, FrameBuffer};

/// Per-kind payload of an [`Entity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Floor,
    Target {
        radius: f32,
        expires_at: Tick,
    },
    /// `expires_at` is `None` when fireballs live until they hit something.
    Fireball {
        radius: f32,
        expires_at: Option<Tick>,
    },
}

/// A drawable, movable scene object.
///
/// The centre is moved together with the mesh on every call to
/// [`move_by`](Self::move_by), so both always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    mesh: Mesh,
    color: Rgb,
    center: Point3,
    kind: EntityKind,
}

pub const FLOOR_COLOR: Rgb = Rgb::new(0.8, 0.7, 0.4);

impl Entity {
    pub fn floor(half_size: f32) -> Self {
        Self {
            mesh: floor_quad(half_size),
            color: FLOOR_COLOR,
            center: Point3::ZERO,
            kind: EntityKind::Floor,
        }
    }

    /// A creature scaled to `radius`, turned by `angle` and placed at
    /// `center`, in that order.
    pub fn target(center: Point3, radius: f32, angle: Vec3, color: Rgb, expires_at: Tick) -> Self {
        let mut mesh = creature();
        mesh.scale(radius);
        mesh.rotate(angle);
        mesh.translate(center);
        Self {
            mesh,
            color,
            center,
            kind: EntityKind::Target { radius, expires_at },
        }
    }

    /// A tessellated sphere centred on the origin. Callers move it into
    /// place with [`move_by`](Self::move_by).
    pub fn fireball(radius: f32, segments: usize, color: Rgb, expires_at: Option<Tick>) -> Self {
        Self {
            mesh: uv_sphere(radius, segments),
            color,
            center: Point3::ZERO,
            kind: EntityKind::Fireball { radius, expires_at },
        }
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.center += delta;
        self.mesh.translate(delta);
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Collision extent. The floor has none.
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Floor => None,
            EntityKind::Target { radius, .. } | EntityKind::Fireball { radius, .. } => Some(radius),
        }
    }

    pub fn expires_at(&self) -> Option<Tick> {
        match self.kind {
            EntityKind::Floor => None,
            EntityKind::Target { expires_at, .. } => Some(expires_at),
            EntityKind::Fireball { expires_at, .. } => expires_at,
        }
    }

    /// True at and after the expiry tick.
    pub fn expired(&self, tick: Tick) -> bool {
        self.expires_at().is_some_and(|at| tick >= at)
    }
}

impl Drawable for Entity {
    fn draw(&self, buffer: &mut FrameBuffer) {
        buffer.add(&self.mesh.triangles, self.color, &self.mesh.texcoords);
    }
}

/// Strict bounding-sphere overlap test.
pub fn spheres_overlap(a: Point3, ra: f32, b: Point3, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Whether two entities' bounding spheres overlap. Entities without a
/// radius never collide.
pub fn are_close(a: &Entity, b: &Entity) -> bool {
    match (a.radius(), b.radius()) {
        (Some(ra), Some(rb)) => spheres_overlap(a.center, ra, b.center, rb),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball_at(center: Point3, radius: f32) -> Entity {
        let mut f = Entity::fireball(radius, 4, Rgb::BLACK, None);
        f.move_by(center);
        f
    }

    #[test]
    fn move_keeps_center_and_mesh_consistent() {
        let mut f = Entity::fireball(1.0, 8, Rgb::BLACK, None);
        let before = f.mesh().clone();
        let delta = Vec3::new(1.5, -2.0, 0.25);
        f.move_by(delta);
        f.move_by(delta);
        assert_eq!(f.center(), delta * 2.0);
        for (a, b) in before.triangles.iter().zip(&f.mesh().triangles) {
            for (p, q) in a.points().iter().zip(b.points()) {
                assert!((*q - *p).abs_diff_eq(delta * 2.0, 1e-5));
            }
        }
    }

    #[test]
    fn target_is_placed_at_center() {
        let center = Point3::new(3.0, 1.0, -2.0);
        let t = Entity::target(center, 0.1, Vec3::new(0.3, 0.2, 0.1), Rgb::WHITE, 3000);
        assert_eq!(t.center(), center);
        assert_eq!(t.mesh().triangle_count(), 116);
        // Creature spans about 15 model units, so a 0.1 scale keeps every
        // vertex within 2 units of the centre.
        for tri in &t.mesh().triangles {
            for p in tri.points() {
                assert!(p.distance(center) < 2.0);
            }
        }
    }

    #[test]
    fn target_expiry_boundary() {
        let t = Entity::target(Point3::ZERO, 0.1, Vec3::ZERO, Rgb::WHITE, 3000);
        assert!(!t.expired(2999));
        assert!(t.expired(3000));
        assert!(t.expired(3001));
    }

    #[test]
    fn fireball_without_lifetime_never_expires() {
        let f = Entity::fireball(0.5, 4, Rgb::BLACK, None);
        assert!(!f.expired(Tick::MAX));
        let g = Entity::fireball(0.5, 4, Rgb::BLACK, Some(10));
        assert!(g.expired(10));
    }

    #[test]
    fn floor_has_no_radius_and_never_expires() {
        let floor = Entity::floor(10.0);
        assert_eq!(floor.radius(), None);
        assert!(!floor.expired(u64::MAX));
        assert_eq!(floor.color(), FLOOR_COLOR);
    }

    #[test]
    fn are_close_is_strict() {
        let a = fireball_at(Point3::ZERO, 1.0);
        let inside = fireball_at(Point3::new(2.5, 0.0, 0.0), 1.5 + 0.1);
        let touching = fireball_at(Point3::new(2.5, 0.0, 0.0), 1.5);
        let apart = fireball_at(Point3::new(2.5, 0.0, 0.0), 1.0);
        assert!(are_close(&a, &inside));
        assert!(!are_close(&a, &touching));
        assert!(!are_close(&a, &apart));
    }

    #[test]
    fn floor_never_collides() {
        let floor = Entity::floor(10.0);
        let f = fireball_at(Point3::ZERO, 100.0);
        assert!(!are_close(&floor, &f));
    }

    #[test]
    fn draw_appends_mesh() {
        let mut buf = FrameBuffer::new();
        let f = Entity::fireball(0.5, 20, Rgb::BLACK, None);
        f.draw(&mut buf);
        assert_eq!(buf.vertex_count(), 1200);
        assert_eq!(buf.texture_size(), 2400);

        let floor = Entity::floor(10.0);
        floor.draw(&mut buf);
        assert_eq!(buf.vertex_count(), 1206);
        assert_eq!(buf.texture_size(), 2400);
    }
}
