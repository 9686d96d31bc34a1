//! Construction-time errors
//!
//! Ticking never fails; the only fallible step is building a world from a
//! configuration that cannot describe a playable game.

/// Invalid simulation configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// World must have a positive, finite size on both axes
    #[error("invalid world size {width}x{height}")]
    WorldSize { width: f32, height: f32 },

    /// Tier radii must shrink from Big to Small and stay positive
    #[error("asteroid radii must satisfy big > medium > small > 0 (got {big}, {medium}, {small})")]
    TierRadii { big: f32, medium: f32, small: f32 },

    /// Medium rocks so large that the speed floor catches them, tying Big and
    /// Medium speeds
    #[error("medium radius {medium} must be below 8x the small radius {small}")]
    TierSpeed { medium: f32, small: f32 },

    /// The missile ring buffer needs at least one slot
    #[error("missile capacity must be at least 1")]
    ZeroMissileCapacity,

    /// A scalar that must be strictly positive
    #[error("{field} must be positive and finite (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    /// A scalar that may be zero but not negative
    #[error("{field} must be non-negative and finite (got {value})")]
    Negative { field: &'static str, value: f32 },

    /// Config text could not be parsed
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
