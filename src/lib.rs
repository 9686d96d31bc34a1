//! Rock Drift - simulation core for a screen-wrapping asteroid shooter
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (kinematics, wrapping, collisions, waves)
//! - `config`: Injected world constants with construction-time validation
//! - `stepper`: Fixed timestep accumulator for host loops
//!
//! Rendering, audio, menus and input-device polling live outside this crate.
//! Hosts feed [`sim::TickInput`] snapshots in and read entity state plus
//! [`sim::GameEvent`]s back out.

pub mod config;
pub mod error;
pub mod sim;
pub mod stepper;

pub use config::SimConfig;
pub use error::ConfigError;
pub use stepper::FixedStepper;

use glam::Vec2;

/// Simulation timing constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz, matches the frame cap of the game)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the stepper will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate a vector clockwise on screen (y down) by `degrees`
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit travel direction for angle-driven entities (asteroids, missiles).
///
/// Angle 0 points down the screen (+y); the base vector is rotated like
/// every other entity in the world.
#[inline]
pub fn direction_from_angle(degrees: f32) -> Vec2 {
    rotate_deg(Vec2::Y, degrees)
}

/// Unit vector the ship's nose points along (rotation 0 = up, 90 = right)
#[inline]
pub fn nose_direction(rotation: f32) -> Vec2 {
    rotate_deg(Vec2::NEG_Y, rotation)
}

/// Rotation (degrees) that points a ship's nose along `dir`
#[inline]
pub fn aim_rotation(dir: Vec2) -> f32 {
    normalize_degrees(dir.y.atan2(dir.x).to_degrees() + 90.0)
}

/// Clamp a vector's magnitude to `max` (keeps direction)
#[inline]
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}
