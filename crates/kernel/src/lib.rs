//! Simulation kernel: scene entities, their lifecycle and the per-tick step.
//!
//! # Invariants
//! - The world is the sole owner of entity state; renderers only read the
//!   frame it produces.
//! - Entity ids are allocated monotonically and never reused, so id order
//!   is spawn order.
//! - Removal is two-phase: passes mark entities, then the store compacts.
//!   No entity is skipped or removed twice within a pass.
//! - At most one target/fireball pair is destroyed per tick.
//! - A seeded world driven by the same inputs produces the same ticks.

mod config;
mod entity;
pub mod random;
mod store;
mod world;

pub use config::{ConfigError, SimConfig};
pub use entity::{are_close, spheres_overlap, Entity, EntityKind, FLOOR_COLOR};
pub use random::{ScriptedSource, UniformSource};
pub use store::{EntityStore, Slot};
pub use world::{target_lifetime, Collision, TickReport, World, WorldEvent};

pub fn crate_info() -> &'static str {
    "shooter-kernel v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("kernel"));
    }
}
