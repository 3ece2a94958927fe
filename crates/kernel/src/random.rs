use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sequential source of uniform values in `[0, 1)`.
///
/// The simulation draws from one handle in a fixed order, so a seeded
/// source reproduces the same run.
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl UniformSource for StdRng {
    fn next_unit(&mut self) -> f32 {
        self.r#gen::<f32>()
    }
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// How many values have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
