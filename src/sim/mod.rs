//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (array order decides collision ties)
//! - No rendering, audio or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod missile;
pub mod ship;
pub mod state;
pub mod tick;
pub mod torus;

pub use collision::{missile_vs_asteroid, ship_vs_asteroid};
pub use missile::MissileRack;
pub use state::{
    Asteroid, AsteroidTier, ExplosionKind, GameEvent, Missile, MissileState, Ship, WorldState,
};
pub use tick::{TickInput, tick};
pub use torus::Torus;
