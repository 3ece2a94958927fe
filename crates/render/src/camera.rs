use glam::{Mat4, Vec3};

/// Camera that sits at the player and looks along their facing direction.
///
/// Produces the single model-view-projection uniform handed to the
/// external renderer alongside the frame streams.
#[derive(Debug, Clone, Copy)]
pub struct PlayerCamera {
    pub position: Vec3,
    pub direction: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PlayerCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 0.0),
            direction: Vec3::Z,
            fov: 45.0_f32.to_radians(),
            aspect: 4.0 / 3.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl PlayerCamera {
    pub fn looking(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
            ..Self::default()
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }

    /// Model matrix is identity: entity geometry is already in world space.
    pub fn mvp(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
