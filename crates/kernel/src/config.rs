use serde::{Deserialize, Serialize};
use shooter_common::Tick;

/// Errors from loading or validating a [`SimConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("spawn_probability must be within [0, 1], got {0}")]
    SpawnProbability(f32),
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("fireball_segments must be at least 2, got {0}")]
    FireballSegments(usize),
}

/// Simulation tuning. Missing YAML fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Chance per tick that a new target appears.
    pub spawn_probability: f32,
    /// Distance of the spawn ring from the scene origin.
    pub spawn_ring_radius: f32,
    /// Spawn heights are `spawn_base_height + spawn_height * u`.
    pub spawn_base_height: f32,
    pub spawn_height: f32,
    /// Target radii are `target_radius_min + target_radius_span * u`.
    pub target_radius_min: f32,
    pub target_radius_span: f32,
    /// Per-axis target speed is `target_speed_scale * u` units per tick.
    pub target_speed_scale: f32,
    /// Ticks of life per unit of colour brightness.
    pub brightness_lifetime: f32,
    /// Ticks that must pass (strictly more than) between two fires.
    pub fire_cooldown: Tick,
    pub fireball_radius: f32,
    pub fireball_segments: usize,
    pub fireball_speed: f32,
    /// Fireballs launch this far below the player's eye.
    pub fireball_drop: f32,
    /// Ticks a fireball survives without a hit. `None` keeps it forever.
    pub fireball_lifetime: Option<Tick>,
    pub floor_half_size: f32,
    /// Most recent world events kept for inspection. Zero disables the log.
    pub event_log_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_probability: 0.03,
            spawn_ring_radius: 5.0,
            spawn_base_height: 0.1,
            spawn_height: 3.0,
            target_radius_min: 0.1,
            target_radius_span: 0.05,
            target_speed_scale: 0.01,
            brightness_lifetime: 1000.0,
            fire_cooldown: 20,
            fireball_radius: 0.5,
            fireball_segments: 20,
            fireball_speed: 0.5,
            fireball_drop: 1.0,
            fireball_lifetime: Some(600),
            floor_half_size: 10.0,
            event_log_capacity: 1024,
        }
    }
}

impl SimConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }
        for (field, value) in [
            ("spawn_ring_radius", self.spawn_ring_radius),
            ("spawn_base_height", self.spawn_base_height),
            ("spawn_height", self.spawn_height),
            ("target_speed_scale", self.target_speed_scale),
            ("fireball_drop", self.fireball_drop),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        // Written as negated comparisons so NaN fails them too.
        for (field, value) in [
            ("target_radius_min", self.target_radius_min),
            ("fireball_radius", self.fireball_radius),
            ("fireball_speed", self.fireball_speed),
            ("floor_half_size", self.floor_half_size),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("target_radius_span", self.target_radius_span),
            ("brightness_lifetime", self.brightness_lifetime),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.fireball_segments < 2 {
            return Err(ConfigError::FireballSegments(self.fireball_segments));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimConfig::default();
        assert_eq!(config.spawn_probability, 0.03);
        assert_eq!(config.fire_cooldown, 20);
        assert_eq!(config.fireball_segments, 20);
        assert_eq!(config.brightness_lifetime, 1000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = SimConfig::from_yaml_str("spawn_probability: 0.5\nfire_cooldown: 5\n").unwrap();
        assert_eq!(config.spawn_probability, 0.5);
        assert_eq!(config.fire_cooldown, 5);
        assert_eq!(config.fireball_radius, 0.5);
    }

    #[test]
    fn yaml_can_disable_fireball_lifetime() {
        let config = SimConfig::from_yaml_str("fireball_lifetime: null\n").unwrap();
        assert_eq!(config.fireball_lifetime, None);
    }

    #[test]
    fn rejects_bad_probability() {
        let err = SimConfig::from_yaml_str("spawn_probability: 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::SpawnProbability(p) if p == 1.5));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let config = SimConfig {
            fireball_radius: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "fireball_radius",
                ..
            })
        ));
    }

    #[test]
    fn rejects_degenerate_sphere() {
        let config = SimConfig {
            fireball_segments: 1,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::FireballSegments(1))));
    }

    #[test]
    fn rejects_negative_radius_span() {
        let config = SimConfig {
            target_radius_span: -1.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "target_radius_span",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_brightness_lifetime() {
        let config = SimConfig {
            brightness_lifetime: -5.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "brightness_lifetime",
                ..
            })
        ));
    }

    #[test]
    fn rejects_stationary_fireballs() {
        let config = SimConfig {
            fireball_speed: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "fireball_speed",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_from_yaml() {
        let err = SimConfig::from_yaml_str("target_radius_min: .nan\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "target_radius_min",
                ..
            }
        ));
        let err = SimConfig::from_yaml_str("brightness_lifetime: .nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Negative { .. }));
        let err = SimConfig::from_yaml_str("spawn_height: .inf\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotFinite {
                field: "spawn_height",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_probability() {
        let config = SimConfig {
            spawn_probability: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnProbability(_))
        ));
    }

    #[test]
    fn zero_span_is_allowed() {
        let config = SimConfig {
            target_radius_span: 0.0,
            event_log_capacity: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = SimConfig::from_yaml_str("spawn_probability: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
