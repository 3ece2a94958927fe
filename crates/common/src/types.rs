use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A point (or displacement) in world space.
pub type Point3 = Vec3;

/// A 2D texture coordinate.
pub type TexCoord = Vec2;

/// Discrete simulation step counter. One tick per rendered frame.
pub type Tick = u64;

/// Unique identifier for an entity in the scene.
///
/// Ids order by allocation, so iterating a map keyed by `EntityId` visits
/// entities in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Hands out fresh [`EntityId`]s in increasing order.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Errors from building a colour out of untyped data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("colour needs exactly {expected} channels, got {actual}")]
    Arity { expected: usize, actual: usize },
}

/// Flat RGB colour, channels nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from a channel list. Anything other than three
    /// channels is rejected rather than truncated or padded.
    pub fn try_from_slice(channels: &[f32]) -> Result<Self, ColorError> {
        match channels {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(ColorError::Arity {
                expected: 3,
                actual: channels.len(),
            }),
        }
    }

    /// Sum of the three channels ("brightness").
    pub fn sum(&self) -> f32 {
        self.r + self.g + self.b
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}
