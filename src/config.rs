//! World constants
//!
//! Everything the simulation tunes on lives here and is injected into
//! [`WorldState::new`](crate::sim::WorldState::new). Defaults mirror the
//! arcade feel of the game: a 4:3 virtual world 1080 units tall.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Asteroid speed never drops below `base_speed / SPEED_FLOOR_RATIO`
pub const SPEED_FLOOR_RATIO: f32 = 8.0;

/// World bounds (virtual units, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 1080.0,
        }
    }
}

/// Ship handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Width of the hull triangle's rear edge
    pub width: f32,
    /// Nose-to-tail length (also sets the spawn safe zone)
    pub length: f32,
    /// Turn rate (degrees/s)
    pub turn_rate: f32,
    /// Thrust acceleration (units/s²)
    pub thrust: f32,
    /// Speed cap applied after thrust (units/s)
    pub max_speed: f32,
    /// Exponential drag coefficient (1/s)
    pub friction: f32,
    /// Seconds spent exploded before respawning
    pub respawn_secs: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            length: 150.0,
            turn_rate: 180.0,
            thrust: 600.0,
            max_speed: 900.0,
            friction: 1.0,
            respawn_secs: 2.0,
        }
    }
}

/// Missile ring buffer and flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    pub speed: f32,
    pub radius: f32,
    /// Time-to-live after firing (seconds)
    pub lifetime_secs: f32,
    /// Grace period an exploded missile stays visible (seconds)
    pub explosion_secs: f32,
    /// Concurrent missile slots
    pub capacity: usize,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            speed: 1200.0,
            radius: 8.0,
            lifetime_secs: 1.0,
            explosion_secs: 0.3,
            capacity: 4,
        }
    }
}

/// Asteroid tiers and waves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    pub big_radius: f32,
    pub medium_radius: f32,
    pub small_radius: f32,
    /// Speed of a Small asteroid; bigger tiers scale down by radius
    pub base_speed: f32,
    /// Big asteroids spawned per wave
    pub wave_count: u32,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            big_radius: 120.0,
            medium_radius: 60.0,
            small_radius: 30.0,
            base_speed: 240.0,
            wave_count: 4,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub ship: ShipConfig,
    pub missile: MissileConfig,
    pub asteroid: AsteroidConfig,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot describe a playable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        let WorldConfig { width, height } = self.world;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::WorldSize { width, height });
        }

        positive("ship.width", self.ship.width)?;
        positive("ship.length", self.ship.length)?;
        non_negative("ship.turn_rate", self.ship.turn_rate)?;
        non_negative("ship.thrust", self.ship.thrust)?;
        positive("ship.max_speed", self.ship.max_speed)?;
        non_negative("ship.friction", self.ship.friction)?;
        positive("ship.respawn_secs", self.ship.respawn_secs)?;

        if self.missile.capacity == 0 {
            return Err(ConfigError::ZeroMissileCapacity);
        }
        positive("missile.speed", self.missile.speed)?;
        positive("missile.radius", self.missile.radius)?;
        positive("missile.lifetime_secs", self.missile.lifetime_secs)?;
        non_negative("missile.explosion_secs", self.missile.explosion_secs)?;

        let AsteroidConfig {
            big_radius: big,
            medium_radius: medium,
            small_radius: small,
            ..
        } = self.asteroid;
        let ordered = big > medium && medium > small && small > 0.0;
        if !(ordered && big.is_finite()) {
            return Err(ConfigError::TierRadii { big, medium, small });
        }
        // Speed bottoms out at base_speed / 8, reached once radius hits 8x small
        if medium >= small * SPEED_FLOOR_RATIO {
            return Err(ConfigError::TierSpeed { medium, small });
        }
        positive("asteroid.base_speed", self.asteroid.base_speed)?;

        Ok(())
    }
}
