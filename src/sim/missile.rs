//! Missile ring buffer and flight
//!
//! Slots are picked by a wrapping cursor, so the (capacity + 1)th shot
//! always lands in slot 0 whether or not its previous occupant is still
//! flying.

use serde::{Deserialize, Serialize};

use super::state::{Missile, MissileState, Ship};
use super::torus::Torus;
use crate::config::MissileConfig;
use crate::normalize_degrees;

/// Fixed-capacity missile storage with a modulo cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileRack {
    slots: Vec<Missile>,
    cursor: usize,
}

impl MissileRack {
    pub fn new(capacity: usize, radius: f32) -> Self {
        debug_assert!(capacity > 0, "missile capacity must be at least 1");
        Self {
            slots: vec![Missile::idle(radius); capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next shot will occupy
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[Missile] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Missile] {
        &mut self.slots
    }

    /// Fire from the ship's nose, overwriting the slot under the cursor
    pub fn spawn(&mut self, ship: &Ship, config: &MissileConfig, space: &Torus) -> usize {
        let slot = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();

        let pos = ship.nose();
        self.slots[slot] = Missile {
            pos,
            // Travel vectors start from +y, so this points along the nose
            angle: normalize_degrees(ship.rotation + 180.0),
            speed: config.speed,
            radius: config.radius,
            state: MissileState::InFlight {
                despawn_timer: config.lifetime_secs,
            },
            on_edge: space.circle_on_edge(pos, config.radius),
        };
        log::debug!("Missile fired from slot {}", slot);
        slot
    }

    /// Explode the missile in `slot` (collision hit)
    pub fn explode(&mut self, slot: usize, explosion_secs: f32) {
        self.slots[slot].explode(explosion_secs);
    }

    /// Advance every slot by one tick
    pub fn step_all(&mut self, dt: f32, config: &MissileConfig, space: &Torus) {
        for missile in &mut self.slots {
            step(missile, dt, config, space);
        }
    }
}

/// Advance one missile: fly and count down, or fade if exploded
pub fn step(missile: &mut Missile, dt: f32, config: &MissileConfig, space: &Torus) {
    match missile.state {
        MissileState::Idle => {}
        MissileState::Exploded { explosion_timer } => {
            missile.state = MissileState::Exploded {
                explosion_timer: (explosion_timer - dt).max(0.0),
            };
        }
        MissileState::InFlight { despawn_timer } => {
            missile.pos = space.wrap(missile.pos + missile.velocity() * dt);
            missile.on_edge = space.circle_on_edge(missile.pos, missile.radius);

            let remaining = despawn_timer - dt;
            missile.state = if remaining <= 0.0 {
                MissileState::Exploded {
                    explosion_timer: config.explosion_secs,
                }
            } else {
                MissileState::InFlight {
                    despawn_timer: remaining,
                }
            };
        }
    }
}
