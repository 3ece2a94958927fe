use glam::Vec3;
use serde::{Deserialize, Serialize};
use shooter_common::Point3;

use crate::Action;

/// Turn steps per radian of heading.
pub const TURN_DIVISOR: f32 = 90.0;

/// What the simulation reads about the player each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Point3,
    /// Facing direction. Not normalised: the vertical component grows
    /// linearly with pitch steps.
    pub direction: Vec3,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 2.0, 0.0),
            direction: Vec3::Z,
        }
    }
}

/// Integrates turn and move actions into a [`PlayerState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controls {
    yaw_steps: f32,
    pitch_steps: f32,
    /// Walking speed in units per second.
    pub speed: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            yaw_steps: 0.0,
            pitch_steps: 0.0,
            speed: 3.0,
        }
    }
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    fn heading(&self) -> f32 {
        self.yaw_steps / TURN_DIVISOR
    }

    /// Horizontal unit vector the player walks along.
    pub fn forward(&self) -> Vec3 {
        let h = self.heading();
        Vec3::new(h.sin(), 0.0, h.cos())
    }

    /// Horizontal unit vector to the player's right.
    pub fn right(&self) -> Vec3 {
        let h = self.heading();
        Vec3::new(-h.cos(), 0.0, h.sin())
    }

    /// Facing direction, including pitch.
    pub fn direction(&self) -> Vec3 {
        let h = self.heading();
        Vec3::new(h.sin(), self.pitch_steps / TURN_DIVISOR, h.cos())
    }

    /// Apply this frame's actions. Returns whether a fire was requested.
    pub fn update(&mut self, player: &mut PlayerState, actions: &[Action], dt: f32) -> bool {
        let mut fire = false;
        for action in actions {
            match *action {
                Action::Fire => fire = true,
                Action::Move { forward, strafe } => {
                    let step = dt * self.speed;
                    player.position += self.forward() * forward * step;
                    player.position += self.right() * strafe * step;
                }
                Action::Turn { yaw, pitch } => {
                    self.yaw_steps += yaw;
                    self.pitch_steps += pitch;
                }
                Action::Noop => {}
            }
        }
        player.direction = self.direction();
        tracing::trace!(position = ?player.position, direction = ?player.direction, "controls updated");
        fire
    }
}
