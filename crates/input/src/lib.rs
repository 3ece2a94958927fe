//! Player input: actions, controls and the player state read by the simulation.
//!
//! # Invariants
//! - The simulation consumes `PlayerState` read-only, once per tick.
//! - Raw device input never reaches the kernel; only `Action`s do.

pub mod action;
mod controls;

pub use action::Action;
pub use controls::{Controls, PlayerState, TURN_DIVISOR};

pub fn crate_info() -> &'static str {
    "shooter-input v0.1.0"
}
