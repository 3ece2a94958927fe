use std::collections::BTreeMap;

use glam::Vec3;
use shooter_common::EntityId;
use shooter_render::{Drawable, FrameBuffer};

use crate::Entity;

/// An entity together with its per-tick velocity.
#[derive(Debug, Clone)]
pub struct Slot {
    pub entity: Entity,
    pub velocity: Vec3,
    marked: bool,
}

/// Storage for one kind of entity.
///
/// Entity and velocity share a slot, so they are inserted and removed
/// together. Removal is two-phase: scans [`mark_for_removal`] while
/// iterating, then [`compact`] drops every marked slot at once, so a scan
/// never skips a neighbour of a removed entry.
///
/// [`mark_for_removal`]: Self::mark_for_removal
/// [`compact`]: Self::compact
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    slots: BTreeMap<EntityId, Slot>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: EntityId, entity: Entity, velocity: Vec3) {
        self.slots.insert(
            id,
            Slot {
                entity,
                velocity,
                marked: false,
            },
        );
    }

    /// Number of slots, including any marked but not yet compacted.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Slot> {
        self.slots.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Unmarked slots in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Slot)> {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.marked)
            .map(|(id, slot)| (*id, slot))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Flag a slot for removal at the next [`compact`](Self::compact).
    /// Returns false if the id is unknown.
    pub fn mark_for_removal(&mut self, id: EntityId) -> bool {
        match self.slots.get_mut(&id) {
            Some(slot) => {
                slot.marked = true;
                true
            }
            None => false,
        }
    }

    pub fn is_marked(&self, id: EntityId) -> bool {
        self.slots.get(&id).is_some_and(|slot| slot.marked)
    }

    /// Drop every marked slot. Returns the removed ids in spawn order.
    pub fn compact(&mut self) -> Vec<EntityId> {
        let removed: Vec<EntityId> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.marked)
            .map(|(id, _)| *id)
            .collect();
        self.slots.retain(|_, slot| !slot.marked);
        removed
    }

    /// Advance every entity by its velocity, then draw it.
    pub fn advance_and_draw(&mut self, buffer: &mut FrameBuffer) {
        for slot in self.slots.values_mut().filter(|slot| !slot.marked) {
            slot.entity.move_by(slot.velocity);
            slot.entity.draw(buffer);
        }
    }
}
