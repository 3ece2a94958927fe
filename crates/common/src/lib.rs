//! Shared value types for the scene core.
//!
//! # Invariants
//! - Entity ids are allocated monotonically and never reused.
//! - A colour is always exactly one RGB triple.

mod types;

pub use types::{ColorError, EntityId, IdAllocator, Point3, Rgb, TexCoord, Tick};
