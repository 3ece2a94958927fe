/// A high-level action produced by whatever front end drives the game.
///
/// The controls and the simulation consume actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Request a fireball. Subject to the simulation's cooldown.
    Fire,
    /// Walk along the horizontal facing: `forward` ahead, `strafe` to the
    /// right. Units are fractions of full speed.
    Move { forward: f32, strafe: f32 },
    /// Turn by whole steps. Positive `yaw` turns left, positive `pitch`
    /// looks up.
    Turn { yaw: f32, pitch: f32 },
    /// Unbound input.
    Noop,
}
