//! Fixed timestep world step
//!
//! One call advances the whole world in a fixed order:
//! 1. pause toggle (returns without physics)
//! 2. wave-clear check and respawn of the next wave
//! 3. paused worlds stop here
//! 4. asteroids move and are checked against missiles (may split)
//! 5. missiles move and time out, then the ship moves, fires, and is
//!    checked against asteroids
//! 6. destroyed asteroids are compacted and the frame's events returned

use glam::Vec2;
use rand::Rng;

use super::asteroid::{self, spawn_wave};
use super::collision::{first_missile_hit, first_ship_hit};
use super::ship;
use super::state::{AsteroidTier, ExplosionKind, GameEvent, WorldState};

/// Input intents for a single tick, already mapped from devices
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Fire (edge-triggered: true only on the press tick)
    pub shoot: bool,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
    /// Leave gameplay for the menu (edge-triggered)
    pub back: bool,
    /// Debug: put the ship back at the center (edge-triggered)
    pub reset_ship: bool,
    /// Pointer position in world coordinates, if the pointer moved or is held
    pub aim_at: Option<Vec2>,
}

impl TickInput {
    /// Drop edge-triggered intents once a tick has consumed them
    pub fn clear_edges(&mut self) {
        self.shoot = false;
        self.pause = false;
        self.back = false;
        self.reset_ship = false;
    }
}

/// Advance the world by one fixed timestep and return the frame's events
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be non-negative");
    let mut events = Vec::new();

    if input.pause {
        state.paused = !state.paused;
        log::debug!("Paused: {}", state.paused);
        events.push(GameEvent::PauseToggled {
            paused: state.paused,
        });
        return events;
    }

    if input.back {
        events.push(GameEvent::MenuBack);
        return events;
    }

    if state.wave_cleared() {
        start_next_wave(state, &mut events);
    }

    if state.paused {
        return events;
    }

    state.time_ticks += 1;

    if input.reset_ship {
        let rotation = state.rng_mut().random_range(0.0..360.0);
        let center = state.space.center();
        let respawn_secs = state.config.ship.respawn_secs;
        let space = state.space;
        state.ship.reset(center, rotation, respawn_secs, &space);
        events.push(GameEvent::ShipReset);
    }

    advance_asteroids(state, dt, &mut events);

    state
        .missiles
        .step_all(dt, &state.config.missile, &state.space);

    ship::step(
        &mut state.ship,
        input,
        dt,
        &state.config,
        &mut state.missiles,
        &mut events,
    );
    check_ship_collision(state, &mut events);

    // Compact once per tick, never mid-iteration
    state.asteroids.retain(|a| !a.exploded);

    events
}

/// Move every live asteroid and resolve missile strikes against it
fn advance_asteroids(state: &mut WorldState, dt: f32, events: &mut Vec<GameEvent>) {
    let space = state.space;
    let asteroid_config = state.config.asteroid;
    let explosion_secs = state.config.missile.explosion_secs;
    let mut fragments = Vec::new();
    let mut destroyed = 0;

    for rock in state.asteroids.iter_mut() {
        if rock.exploded {
            continue;
        }
        asteroid::step(rock, &space, dt);

        let Some(slot) = first_missile_hit(rock, state.missiles.slots(), &space) else {
            continue;
        };
        state.missiles.explode(slot, explosion_secs);
        rock.exploded = true;
        destroyed += 1;
        events.push(GameEvent::Exploded {
            kind: ExplosionKind::Asteroid(rock.tier),
            pos: rock.pos,
        });
        log::debug!("Missile {} destroyed {:?} asteroid at {:?}", slot, rock.tier, rock.pos);

        if let Some(children) = asteroid::split(rock, &asteroid_config, &space, &mut state.rng) {
            fragments.extend(children);
        }
    }

    state.destroyed_count += destroyed;
    state.spawned_count += fragments.len() as u32;
    // Fragments join after the pass so they don't move until next tick
    state.asteroids.append(&mut fragments);
}

/// Ship against asteroids; ship strikes destroy without splitting
fn check_ship_collision(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let Some(idx) = first_ship_hit(&state.ship, &state.asteroids, &state.space) else {
        return;
    };
    let rock = &mut state.asteroids[idx];
    rock.exploded = true;
    state.destroyed_count += 1;
    events.push(GameEvent::Exploded {
        kind: ExplosionKind::Asteroid(rock.tier),
        pos: rock.pos,
    });

    state.ship.explode(state.config.ship.respawn_secs);
    events.push(GameEvent::Exploded {
        kind: ExplosionKind::Ship,
        pos: state.ship.pos,
    });
    log::debug!("Ship destroyed at {:?}", state.ship.pos);
}

/// Reset counters, recenter the ship and spawn a fresh wave of Big rocks
fn start_next_wave(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let cleared = state.wave_index;
    log::info!(
        "Wave {} cleared ({} asteroids destroyed)",
        cleared,
        state.destroyed_count
    );
    events.push(GameEvent::WaveCleared { wave: cleared });

    state.destroyed_count = 0;
    state.spawned_count = 0;
    state.wave_index += 1;
    state.asteroids.clear();

    let rotation = state.ship.rotation;
    let center = state.space.center();
    let respawn_secs = state.config.ship.respawn_secs;
    let space = state.space;
    state.ship.reset(center, rotation, respawn_secs, &space);

    let count = state.config.asteroid.wave_count;
    spawn_wave(state, count, AsteroidTier::Big);
    events.push(GameEvent::WaveSpawned {
        wave: state.wave_index,
        count,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::consts::SIM_DT;
    use crate::sim::asteroid::make_asteroid;
    use crate::sim::state::{Missile, MissileState};

    fn world(wave_count: u32, seed: u64) -> WorldState {
        let mut config = SimConfig::default();
        config.asteroid.wave_count = wave_count;
        WorldState::new(config, seed).unwrap()
    }

    /// Park an in-flight, motionless missile on top of an asteroid
    fn arm_missile_on(state: &mut WorldState, idx: usize) {
        let pos = state.asteroids[idx].pos;
        let radius = state.config.missile.radius;
        state.missiles.slots_mut()[0] = Missile {
            pos,
            angle: 0.0,
            speed: 0.0,
            radius,
            state: MissileState::InFlight { despawn_timer: 1.0 },
            on_edge: false,
        };
    }

    #[test]
    fn test_pause_toggle_returns_without_physics() {
        let mut state = world(3, 12345);
        let before: Vec<_> = state.asteroids.iter().map(|a| a.pos).collect();

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        let events = tick(&mut state, &pause, SIM_DT);
        assert!(state.paused);
        assert_eq!(events, vec![GameEvent::PauseToggled { paused: true }]);

        // Paused ticks don't move anything
        tick(&mut state, &TickInput::default(), SIM_DT);
        let after: Vec<_> = state.asteroids.iter().map(|a| a.pos).collect();
        assert_eq!(before, after);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause, SIM_DT);
        assert!(!state.paused);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_back_signals_menu() {
        let mut state = world(3, 1);
        let input = TickInput {
            back: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, SIM_DT), vec![GameEvent::MenuBack]);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_missile_hit_splits_and_counts() {
        let mut state = world(1, 5);
        state.ship.explode(100.0);
        arm_missile_on(&mut state, 0);

        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.destroyed_count, 1);
        assert_eq!(state.spawned_count, 3);
        assert_eq!(state.asteroids.len(), 2);
        assert!(state.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium));
        assert!(state.missiles.slots()[0].is_exploded());
        assert!(matches!(
            events[0],
            GameEvent::Exploded {
                kind: ExplosionKind::Asteroid(AsteroidTier::Big),
                ..
            }
        ));
    }

    #[test]
    fn test_one_missile_destroys_only_first_asteroid() {
        let mut state = world(0, 5);
        state.ship.explode(100.0);
        let config = state.config.asteroid;
        let space = state.space;
        let pos = Vec2::new(200.0, 200.0);
        for tag in 0..2 {
            state
                .asteroids
                .push(make_asteroid(pos, 0.0, AsteroidTier::Small, tag, &config, &space));
        }
        state.spawned_count = 2;
        arm_missile_on(&mut state, 0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.destroyed_count, 1);
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].tag, 1);
    }

    #[test]
    fn test_two_missiles_one_asteroid_first_slot_wins() {
        let mut state = world(1, 8);
        state.ship.explode(100.0);
        arm_missile_on(&mut state, 0);
        let mut second = state.missiles.slots()[0].clone();
        second.pos += Vec2::new(5.0, 0.0);
        state.missiles.slots_mut()[1] = second;

        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.missiles.slots()[0].is_exploded());
        // Slot 1 may hit a fragment next tick, but not the parent twice
        assert_eq!(state.destroyed_count, 1);
    }

    #[test]
    fn test_ship_collision_destroys_without_split() {
        let mut state = world(0, 2);
        let config = state.config.asteroid;
        let space = state.space;
        let on_ship = make_asteroid(state.ship.pos, 0.0, AsteroidTier::Big, 0, &config, &space);
        state.asteroids.push(on_ship);
        state.spawned_count = 1;

        let events = tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.ship.exploded);
        assert!(state.asteroids.is_empty());
        assert_eq!(state.destroyed_count, 1);
        assert_eq!(state.spawned_count, 1);
        assert!(events.contains(&GameEvent::Exploded {
            kind: ExplosionKind::Ship,
            pos: state.ship.pos,
        }));
    }

    #[test]
    fn test_wave_clear_scenario() {
        let mut state = world(3, 42);
        // Keep the ship out of the way for the whole scenario
        state.ship.explode(1_000.0);
        assert_eq!(state.asteroids.len(), 3);

        let mut hits = 0;
        while !state.asteroids.is_empty() {
            arm_missile_on(&mut state, 0);
            tick(&mut state, &TickInput::default(), 0.0);
            hits += 1;
            assert!(hits <= 21, "too many hits");
        }
        assert_eq!(hits, 21);
        assert_eq!(state.destroyed_count, 21);
        assert_eq!(state.spawned_count, 21);
        assert!(state.wave_cleared());

        // Pause first so the respawned wave is observed before anything moves
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, 0.0);
        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(events.contains(&GameEvent::WaveCleared { wave: 0 }));
        assert!(events.contains(&GameEvent::WaveSpawned { wave: 1, count: 3 }));
        assert_eq!(state.asteroids.len(), 3);
        assert!(state.asteroids.iter().all(|a| a.tier == AsteroidTier::Big));
        assert_eq!(state.destroyed_count, 0);
        assert_eq!(state.spawned_count, 3);
        assert_eq!(state.wave_index, 1);
        assert!(!state.ship.exploded);
    }

    #[test]
    fn test_shoot_fires_and_missile_flies_next_tick() {
        let mut state = world(0, 9);
        let shoot = TickInput {
            shoot: true,
            ..Default::default()
        };
        let events = tick(&mut state, &shoot, SIM_DT);
        assert!(events.contains(&GameEvent::ShotFired { slot: 0 }));
        let fired_at = state.missiles.slots()[0].pos;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_ne!(state.missiles.slots()[0].pos, fired_at);
    }

    #[test]
    fn test_reset_ship_intent() {
        let mut state = world(0, 4);
        state.ship.pos = Vec2::new(10.0, 10.0);
        state.ship.vel = Vec2::new(100.0, 100.0);
        let input = TickInput {
            reset_ship: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert!(events.contains(&GameEvent::ShipReset));
        assert_eq!(state.ship.pos, state.space.center());
        assert_eq!(state.ship.vel, Vec2::ZERO);
    }

    #[test]
    fn test_clear_edges() {
        let mut input = TickInput {
            shoot: true,
            pause: true,
            back: true,
            reset_ship: true,
            thrust: true,
            ..Default::default()
        };
        input.clear_edges();
        assert!(!input.shoot && !input.pause && !input.back && !input.reset_ship);
        assert!(input.thrust);
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed and inputs stay identical
        let mut a = world(4, 99999);
        let mut b = world(4, 99999);

        let inputs = [
            TickInput {
                thrust: true,
                turn_left: true,
                ..Default::default()
            },
            TickInput {
                shoot: true,
                ..Default::default()
            },
            TickInput {
                aim_at: Some(Vec2::new(100.0, 100.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                assert_eq!(tick(&mut a, input, SIM_DT), tick(&mut b, input, SIM_DT));
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        assert_eq!(a.ship.pos, b.ship.pos);
        assert_eq!(a.destroyed_count, b.destroyed_count);
    }
}
