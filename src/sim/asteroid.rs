//! Asteroid kinematics, wave spawning and fragmentation

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidTier, WorldState};
use super::torus::Torus;
use crate::config::{AsteroidConfig, SPEED_FLOOR_RATIO};
use crate::{direction_from_angle, normalize_degrees};

/// Safe zone around the ship, in ship lengths
pub const SAFE_ZONE_SHIP_LENGTHS: f32 = 3.0;

/// Speed for a radius: inverse to size, never below `base_speed / 8`
pub fn speed_for_radius(radius: f32, config: &AsteroidConfig) -> f32 {
    debug_assert!(radius > 0.0, "asteroid radius must be positive");
    let scaled = config.base_speed * config.small_radius / radius;
    scaled.max(config.base_speed / SPEED_FLOOR_RATIO)
}

/// Build an asteroid of `tier` with radius and speed derived from the tier
pub fn make_asteroid(
    pos: Vec2,
    angle: f32,
    tier: AsteroidTier,
    tag: u32,
    config: &AsteroidConfig,
    space: &Torus,
) -> Asteroid {
    let radius = tier.radius(config);
    Asteroid {
        pos,
        angle: normalize_degrees(angle),
        speed: speed_for_radius(radius, config),
        radius,
        tier,
        tag,
        exploded: false,
        on_edge: space.circle_on_edge(pos, radius),
    }
}

/// Advance one asteroid; destroyed ones are left untouched
pub fn step(asteroid: &mut Asteroid, space: &Torus, dt: f32) {
    if asteroid.exploded {
        return;
    }
    asteroid.pos = space.wrap(asteroid.pos + asteroid.velocity() * dt);
    asteroid.on_edge = space.circle_on_edge(asteroid.pos, asteroid.radius);
}

/// Push a spawn candidate out of the ship's safe zone.
///
/// One translation of `2 * safe_radius` per axis, away from the ship, then
/// wrap. Wrapping can occasionally land it near the ship again; that is
/// accepted rather than retrying.
pub fn relocate_from_safe_zone(
    candidate: Vec2,
    ship_pos: Vec2,
    safe_radius: f32,
    space: &Torus,
) -> Vec2 {
    let away = candidate - ship_pos;
    if away.length() >= safe_radius {
        return candidate;
    }
    let sign = |d: f32| if d < 0.0 { -1.0 } else { 1.0 };
    let shift = Vec2::new(sign(away.x), sign(away.y)) * (2.0 * safe_radius);
    space.wrap(candidate + shift)
}

/// Spawn `count` asteroids of `tier` at random spots away from the ship
pub fn spawn_wave(state: &mut WorldState, count: u32, tier: AsteroidTier) {
    let space = state.space;
    let config = state.config.asteroid;
    let ship_pos = state.ship.pos;
    let safe_radius = state.config.ship.length * SAFE_ZONE_SHIP_LENGTHS;

    state.asteroids.reserve(count as usize);
    for _ in 0..count {
        let tag = state.next_tag();
        let rng = state.rng_mut();
        let candidate = Vec2::new(
            rng.random_range(0.0..space.width),
            rng.random_range(0.0..space.height),
        );
        let angle = rng.random_range(0.0..360.0);
        let pos = relocate_from_safe_zone(candidate, ship_pos, safe_radius, &space);
        state
            .asteroids
            .push(make_asteroid(pos, angle, tier, tag, &config, &space));
    }
    state.spawned_count += count;

    log::info!(
        "Wave {}: spawned {} {:?} asteroids ({} alive)",
        state.wave_index,
        count,
        tier,
        state.asteroids.len()
    );
}

/// Break an asteroid into two children one tier smaller.
///
/// Children sit `radius / 2` either side of the parent center along one
/// random axis and fly apart along it. Small asteroids don't split.
pub fn split(
    parent: &Asteroid,
    config: &AsteroidConfig,
    space: &Torus,
    rng: &mut impl Rng,
) -> Option<[Asteroid; 2]> {
    let tier = parent.tier.smaller()?;
    let angle: f32 = rng.random_range(0.0..180.0);
    let offset = direction_from_angle(angle) * (parent.radius / 2.0);

    let child = |pos: Vec2, heading: f32| {
        make_asteroid(space.wrap(pos), heading, tier, parent.tag, config, space)
    };
    Some([
        child(parent.pos + offset, angle),
        child(parent.pos - offset, angle + 180.0),
    ])
}
