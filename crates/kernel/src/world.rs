use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::Vec3;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use shooter_common::{EntityId, IdAllocator, Rgb, Tick};
use shooter_input::PlayerState;
use shooter_render::{ClearColor, Drawable, FrameBuffer, FrameView, PlayerCamera};

use crate::random::{self, UniformSource};
use crate::{are_close, ConfigError, Entity, EntityStore, SimConfig};

/// A record of every lifecycle change the simulation makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    TargetSpawned { id: EntityId, tick: Tick, expires_at: Tick },
    TargetExpired { id: EntityId, tick: Tick },
    FireballFired { id: EntityId, tick: Tick },
    FireballExpired { id: EntityId, tick: Tick },
    Collision { target: EntityId, fireball: EntityId, tick: Tick },
}

/// A target/fireball pair removed by a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub target: EntityId,
    pub fireball: EntityId,
}

/// What happened during one [`World::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub spawned: Option<EntityId>,
    pub expired_targets: Vec<EntityId>,
    pub expired_fireballs: Vec<EntityId>,
    pub collision: Option<Collision>,
    pub fired: Option<EntityId>,
}

impl TickReport {
    pub fn clear_color(&self) -> ClearColor {
        if self.collision.is_some() {
            ClearColor::Flash
        } else {
            ClearColor::Sky
        }
    }
}

/// The scene: floor, targets, fireballs and the tick counter.
///
/// The world is the only owner of entity state. Each [`step`](Self::step)
/// runs spawn, expiry, collision, fire and move/draw in that order, and
/// draws from the random source in a fixed sequence, so a seeded world
/// given the same player inputs replays identically.
#[derive(Debug)]
pub struct World<R = StdRng> {
    config: SimConfig,
    rng: R,
    ids: IdAllocator,
    floor: Entity,
    targets: EntityStore,
    fireballs: EntityStore,
    tick: Tick,
    last_fire: Tick,
    events: VecDeque<WorldEvent>,
}

impl World<StdRng> {
    /// Default configuration with a seeded generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SimConfig::default(), random::seeded(seed))
    }

    pub fn from_config(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, random::seeded(seed))
    }
}

impl<R: UniformSource> World<R> {
    pub fn with_source(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: SimConfig, rng: R) -> Self {
        Self {
            floor: Entity::floor(config.floor_half_size),
            config,
            rng,
            ids: IdAllocator::new(),
            targets: EntityStore::new(),
            fireballs: EntityStore::new(),
            tick: 0,
            last_fire: 0,
            events: VecDeque::new(),
        }
    }

    /// Current simulation tick.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn floor(&self) -> &Entity {
        &self.floor
    }

    pub fn targets(&self) -> &EntityStore {
        &self.targets
    }

    pub fn fireballs(&self) -> &EntityStore {
        &self.fireballs
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Read-only access to the event log, oldest first. Holds at most
    /// `event_log_capacity` entries.
    pub fn events(&self) -> &VecDeque<WorldEvent> {
        &self.events
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.events.drain(..).collect()
    }

    /// Append to the event log, dropping the oldest entry when full.
    fn record(&mut self, event: WorldEvent) {
        let capacity = self.config.event_log_capacity;
        if capacity == 0 {
            return;
        }
        if self.events.len() == capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Place a prepared target directly, bypassing the random roll.
    pub fn insert_target(&mut self, target: Entity, velocity: Vec3) -> EntityId {
        let id = self.ids.allocate();
        if let Some(expires_at) = target.expires_at() {
            self.record(WorldEvent::TargetSpawned {
                id,
                tick: self.tick,
                expires_at,
            });
        }
        self.targets.insert(id, target, velocity);
        id
    }

    /// Place a prepared fireball directly, bypassing the cooldown.
    pub fn insert_fireball(&mut self, fireball: Entity, velocity: Vec3) -> EntityId {
        let id = self.ids.allocate();
        self.fireballs.insert(id, fireball, velocity);
        self.record(WorldEvent::FireballFired {
            id,
            tick: self.tick,
        });
        id
    }

    /// Roll a new target around the player and add it.
    pub fn spawn_target(&mut self, player: &PlayerState) -> EntityId {
        let (target, velocity) = roll_target(&self.config, &mut self.rng, player, self.tick);
        tracing::debug!(
            center = ?target.center(),
            expires_at = ?target.expires_at(),
            "spawned target"
        );
        self.insert_target(target, velocity)
    }

    /// Whether the fire cooldown has elapsed.
    pub fn fire_available(&self) -> bool {
        self.tick.saturating_sub(self.last_fire) > self.config.fire_cooldown
    }

    /// Launch a fireball from just below the player along their facing
    /// direction. Returns `None` while the cooldown is running.
    pub fn fire(&mut self, player: &PlayerState) -> Option<EntityId> {
        if !self.fire_available() {
            return None;
        }
        self.last_fire = self.tick;

        let expires_at = self.config.fireball_lifetime.map(|life| self.tick + life);
        let mut fireball = Entity::fireball(
            self.config.fireball_radius,
            self.config.fireball_segments,
            Rgb::BLACK,
            expires_at,
        );
        fireball.move_by(player.position - Vec3::new(0.0, self.config.fireball_drop, 0.0));
        let velocity = player.direction * self.config.fireball_speed;

        let id = self.insert_fireball(fireball, velocity);
        tracing::info!(?id, tick = self.tick, "fire");
        Some(id)
    }

    /// Advance one tick and rebuild `buffer` with the resulting frame.
    pub fn step(&mut self, player: &PlayerState, fire: bool, buffer: &mut FrameBuffer) -> TickReport {
        let _span = tracing::info_span!("world_step", tick = self.tick).entered();
        buffer.clear();

        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        if self.rng.next_unit() < self.config.spawn_probability {
            report.spawned = Some(self.spawn_target(player));
        }

        report.expired_targets = self.expire_targets();
        report.expired_fireballs = self.expire_fireballs();
        report.collision = self.resolve_collision();

        if fire {
            report.fired = self.fire(player);
        }

        self.floor.draw(buffer);
        self.targets.advance_and_draw(buffer);
        self.fireballs.advance_and_draw(buffer);

        tracing::trace!(
            targets = self.targets.len(),
            fireballs = self.fireballs.len(),
            vertices = buffer.vertex_count(),
            "step complete"
        );
        self.tick += 1;
        report
    }

    fn expire_targets(&mut self) -> Vec<EntityId> {
        let tick = self.tick;
        let expired: Vec<EntityId> = self
            .targets
            .iter()
            .filter(|(_, slot)| slot.entity.expired(tick))
            .map(|(id, _)| id)
            .collect();
        for id in &expired {
            self.targets.mark_for_removal(*id);
        }
        let removed = self.targets.compact();
        for id in &removed {
            tracing::debug!(?id, tick, "target expired");
            self.record(WorldEvent::TargetExpired { id: *id, tick });
        }
        removed
    }

    fn expire_fireballs(&mut self) -> Vec<EntityId> {
        let tick = self.tick;
        let expired: Vec<EntityId> = self
            .fireballs
            .iter()
            .filter(|(_, slot)| slot.entity.expired(tick))
            .map(|(id, _)| id)
            .collect();
        for id in &expired {
            self.fireballs.mark_for_removal(*id);
        }
        let removed = self.fireballs.compact();
        for id in &removed {
            tracing::debug!(?id, tick, "fireball expired");
            self.record(WorldEvent::FireballExpired { id: *id, tick });
        }
        removed
    }

    /// Resolve at most one hit: the first overlapping pair in
    /// target-major, fireball-minor order.
    fn resolve_collision(&mut self) -> Option<Collision> {
        let fireballs = &self.fireballs;
        let hit = self.targets.iter().find_map(|(target, t)| {
            fireballs
                .iter()
                .find(|(_, f)| are_close(&t.entity, &f.entity))
                .map(|(fireball, _)| Collision { target, fireball })
        })?;

        self.targets.mark_for_removal(hit.target);
        self.fireballs.mark_for_removal(hit.fireball);
        self.targets.compact();
        self.fireballs.compact();

        tracing::info!(target = ?hit.target, fireball = ?hit.fireball, "collision");
        self.record(WorldEvent::Collision {
            target: hit.target,
            fireball: hit.fireball,
            tick: self.tick,
        });
        Some(hit)
    }

    /// Package the latest frame for a renderer.
    pub fn frame<'a>(
        &self,
        buffer: &'a FrameBuffer,
        report: &TickReport,
        player: &PlayerState,
    ) -> FrameView<'a> {
        FrameView {
            tick: report.tick,
            buffer,
            clear: report.clear_color(),
            mvp: PlayerCamera::looking(player.position, player.direction).mvp(),
            targets: self.targets.len(),
            fireballs: self.fireballs.len(),
        }
    }
}

/// Ticks a target of `color` lives: brighter targets last longer.
pub fn target_lifetime(config: &SimConfig, color: Rgb) -> Tick {
    (color.sum() * config.brightness_lifetime) as Tick
}

/// Draw a target and its velocity from `rng`.
///
/// Consumes exactly 12 values: azimuth, height, radius, three angles,
/// three colour channels, three velocity components.
fn roll_target<R: UniformSource>(
    config: &SimConfig,
    rng: &mut R,
    player: &PlayerState,
    tick: Tick,
) -> (Entity, Vec3) {
    let azimuth = rng.next_unit() * 2.0 * PI;
    let height = rng.next_unit();
    let ring = Vec3::new(
        config.spawn_ring_radius * azimuth.sin(),
        config.spawn_base_height + config.spawn_height * height,
        config.spawn_ring_radius * azimuth.cos(),
    );
    let radius = config.target_radius_min + config.target_radius_span * rng.next_unit();
    let angle = Vec3::new(
        rng.next_unit() * PI,
        rng.next_unit() * PI,
        rng.next_unit() * PI,
    );
    let color = Rgb::new(rng.next_unit(), rng.next_unit(), rng.next_unit());
    let expires_at = tick + target_lifetime(config, color);
    let velocity = Vec3::new(rng.next_unit(), rng.next_unit(), rng.next_unit())
        * config.target_speed_scale;

    let center = ring + player.position * 0.5;
    (
        Entity::target(center, radius, angle, color, expires_at),
        velocity,
    )
}
