//! World state and entity types
//!
//! Every entity carries its own small state machine in flags and timers:
//! - Asteroid: Alive -> Destroyed (`exploded`, removed at end of tick)
//! - Missile: Idle -> InFlight -> Exploded (fading), see [`MissileState`]
//! - Ship: Flying <-> Exploding (timed by `respawn_timer`)

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::spawn_wave;
use super::missile::MissileRack;
use super::torus::Torus;
use crate::config::{AsteroidConfig, ShipConfig, SimConfig};
use crate::error::ConfigError;
use crate::{nose_direction, normalize_degrees, rotate_deg};

/// Asteroid size class, ordered Small < Medium < Big
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidTier {
    Small,
    Medium,
    Big,
}

impl AsteroidTier {
    /// Tier produced when this one splits (None for Small)
    pub fn smaller(self) -> Option<Self> {
        match self {
            AsteroidTier::Big => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }

    /// Fixed radius for this tier
    pub fn radius(self, config: &AsteroidConfig) -> f32 {
        match self {
            AsteroidTier::Big => config.big_radius,
            AsteroidTier::Medium => config.medium_radius,
            AsteroidTier::Small => config.small_radius,
        }
    }
}

/// The player ship (singleton, reset in place)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Degrees, 0 = up, 90 = right
    pub rotation: f32,
    pub width: f32,
    pub length: f32,
    pub exploded: bool,
    /// Counts down while exploded
    pub respawn_timer: f32,
    /// Nose, rear-left, rear-right in world space
    pub hull: [Vec2; 3],
    /// Some hull point is past a world edge
    pub on_edge: bool,
}

impl Ship {
    pub fn new(pos: Vec2, rotation: f32, config: &ShipConfig) -> Self {
        let mut ship = Self {
            pos,
            vel: Vec2::ZERO,
            rotation: normalize_degrees(rotation),
            width: config.width,
            length: config.length,
            exploded: false,
            respawn_timer: config.respawn_secs,
            hull: [pos; 3],
            on_edge: false,
        };
        ship.hull = ship.hull_points();
        ship
    }

    /// Hull triangle rotated by heading and placed at the ship position
    pub fn hull_points(&self) -> [Vec2; 3] {
        let half_w = self.width / 2.0;
        [
            Vec2::new(0.0, -self.length / 2.0),
            Vec2::new(-half_w, half_w),
            Vec2::new(half_w, half_w),
        ]
        .map(|p| rotate_deg(p, self.rotation) + self.pos)
    }

    /// Recompute the cached hull and edge flag after moving
    pub fn refresh_hull(&mut self, space: &Torus) {
        self.hull = self.hull_points();
        self.on_edge = space.points_on_edge(&self.hull);
    }

    /// World-space tip of the ship (missile muzzle)
    pub fn nose(&self) -> Vec2 {
        self.pos + nose_direction(self.rotation) * (self.length / 2.0)
    }

    /// Enter the Exploding state
    pub fn explode(&mut self, respawn_secs: f32) {
        self.exploded = true;
        self.respawn_timer = respawn_secs;
    }

    /// Put the ship back at `pos`, stationary and flying
    pub fn reset(&mut self, pos: Vec2, rotation: f32, respawn_secs: f32, space: &Torus) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.rotation = normalize_degrees(rotation);
        self.exploded = false;
        self.respawn_timer = respawn_secs;
        self.refresh_hull(space);
    }
}

/// An asteroid (dense storage, compacted once per tick)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Travel heading in degrees
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    pub tier: AsteroidTier,
    /// Color/identity shared by every fragment of one wave rock
    pub tag: u32,
    /// Destroyed, pending removal
    pub exploded: bool,
    /// Circle crosses a world edge
    pub on_edge: bool,
}

impl Asteroid {
    pub fn velocity(&self) -> Vec2 {
        crate::direction_from_angle(self.angle) * self.speed
    }
}

/// Missile lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MissileState {
    /// Slot never fired
    Idle,
    /// Travelling; explodes when the timer runs out
    InFlight { despawn_timer: f32 },
    /// Frozen fading marker after impact or timeout
    Exploded { explosion_timer: f32 },
}

/// A missile occupying one ring-buffer slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
    /// Travel heading in degrees
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    pub state: MissileState,
    pub on_edge: bool,
}

impl Missile {
    pub fn idle(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: 0.0,
            radius,
            state: MissileState::Idle,
            on_edge: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, MissileState::InFlight { .. })
    }

    /// Idle slots count as exploded: neither can collide
    pub fn is_exploded(&self) -> bool {
        !self.in_flight()
    }

    pub fn velocity(&self) -> Vec2 {
        crate::direction_from_angle(self.angle) * self.speed
    }

    /// Switch to the fading Exploded state, freezing position
    pub fn explode(&mut self, explosion_secs: f32) {
        self.state = MissileState::Exploded {
            explosion_timer: explosion_secs,
        };
    }
}

/// What blew up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionKind {
    Asteroid(AsteroidTier),
    Ship,
}

/// Discrete per-tick events for audio/visual consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A missile left the given ring slot
    ShotFired { slot: usize },
    /// Something was destroyed at `pos`
    Exploded { kind: ExplosionKind, pos: Vec2 },
    /// Every asteroid of the wave was destroyed
    WaveCleared { wave: u32 },
    /// A fresh wave entered the field
    WaveSpawned { wave: u32, count: u32 },
    PauseToggled { paused: bool },
    /// Back intent: the UI should return to its menu
    MenuBack,
    /// Debug reset put the ship back at the center
    ShipReset,
}

/// Complete simulation state, exclusively owning all entities
#[derive(Debug, Clone)]
pub struct WorldState {
    pub config: SimConfig,
    pub space: Torus,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub missiles: MissileRack,
    /// Asteroids destroyed this wave
    pub destroyed_count: u32,
    /// Asteroids created this wave (initial rocks plus fragments)
    pub spawned_count: u32,
    /// Waves cleared so far
    pub wave_index: u32,
    pub paused: bool,
    /// Simulation ticks advanced (paused ticks excluded)
    pub time_ticks: u64,
    should_exit: bool,
    next_tag: u32,
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// Build a world from a validated config and spawn the first wave
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let space = Torus::from(config.world);
        let rotation = rng.random_range(0.0..360.0);
        let mut ship = Ship::new(space.center(), rotation, &config.ship);
        ship.refresh_hull(&space);

        let mut state = Self {
            missiles: MissileRack::new(config.missile.capacity, config.missile.radius),
            config,
            space,
            ship,
            asteroids: Vec::new(),
            destroyed_count: 0,
            spawned_count: 0,
            wave_index: 0,
            paused: false,
            time_ticks: 0,
            should_exit: false,
            next_tag: 0,
            rng,
        };

        let count = state.config.asteroid.wave_count;
        spawn_wave(&mut state, count, AsteroidTier::Big);
        log::info!("World created: seed={} wave_count={}", seed, count);

        Ok(state)
    }

    /// Wave is over once everything spawned has been destroyed
    pub fn wave_cleared(&self) -> bool {
        debug_assert!(self.destroyed_count <= self.spawned_count);
        self.spawned_count > 0 && self.destroyed_count == self.spawned_count
    }

    /// Ask the host loop to stop (set by the UI layer)
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Asteroids not yet destroyed
    pub fn live_asteroids(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter().filter(|a| !a.exploded)
    }

    /// Seeded RNG shared by spawning and splitting
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Allocate a color/identity tag for a freshly spawned wave rock
    pub fn next_tag(&mut self) -> u32 {
        let tag = self.next_tag;
        self.next_tag = self.next_tag.wrapping_add(1);
        tag
    }
}
