//! Ship handling and the explode/respawn cycle

use glam::Vec2;

use super::missile::MissileRack;
use super::state::{GameEvent, Ship};
use super::tick::TickInput;
use super::torus::Torus;
use crate::config::SimConfig;
use crate::{aim_rotation, clamp_length, normalize_degrees, nose_direction};

/// Whether the pointer should steer the ship this tick.
///
/// Aim follows the pointer unless the pilot is thrusting, already moving
/// away from the pointer, and more than one ship length from it (flying
/// past the target on purpose).
pub fn pointer_aim_applies(ship: &Ship, target: Vec2, thrusting: bool) -> bool {
    let to_target = target - ship.pos;
    if to_target == Vec2::ZERO {
        return false;
    }
    let moving_away = ship.vel.dot(to_target) < 0.0;
    let beyond_length = to_target.length() > ship.length;
    !(thrusting && moving_away && beyond_length)
}

/// Advance the ship one tick.
///
/// While exploded only the respawn countdown runs. Otherwise: steer, thrust
/// and clamp, exponential drag, integrate, wrap, rebuild hull, then fire on
/// the shoot edge.
pub fn step(
    ship: &mut Ship,
    input: &TickInput,
    dt: f32,
    config: &SimConfig,
    missiles: &mut MissileRack,
    events: &mut Vec<GameEvent>,
) {
    let space = Torus::from(config.world);
    let cfg = &config.ship;

    if ship.exploded {
        ship.respawn_timer -= dt;
        if ship.respawn_timer <= 0.0 {
            let rotation = ship.rotation;
            ship.reset(space.center(), rotation, cfg.respawn_secs, &space);
            log::debug!("Ship respawned at {:?}", ship.pos);
        }
        return;
    }

    match input.aim_at {
        Some(target) if pointer_aim_applies(ship, target, input.thrust) => {
            ship.rotation = aim_rotation(target - ship.pos);
        }
        _ => {}
    }
    // Turn intents stack on top of the pointer heading
    if input.turn_left {
        ship.rotation -= cfg.turn_rate * dt;
    }
    if input.turn_right {
        ship.rotation += cfg.turn_rate * dt;
    }
    ship.rotation = normalize_degrees(ship.rotation);

    if input.thrust {
        ship.vel += nose_direction(ship.rotation) * cfg.thrust * dt;
        ship.vel = clamp_length(ship.vel, cfg.max_speed);
    }
    ship.vel *= (-cfg.friction * dt).exp();

    ship.pos = space.wrap(ship.pos + ship.vel * dt);
    ship.refresh_hull(&space);

    if input.shoot {
        let slot = missiles.spawn(ship, &config.missile, &space);
        events.push(GameEvent::ShotFired { slot });
    }
}
