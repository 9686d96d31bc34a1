//! Rock Drift - headless runner
//!
//! Drives the simulation with a scripted pilot at 60 fps and logs what
//! happens. Usage: `rock-drift [config.json] [seed]`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use rock_drift::sim::{ExplosionKind, GameEvent, TickInput, WorldState};
    use rock_drift::{FixedStepper, SimConfig};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const RUN_SECS: f32 = 20.0;
    const FIRE_EVERY_FRAMES: u32 = 10;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {}", path);
            SimConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => SimConfig::default(),
    };
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?.unwrap_or(0x5eed);

    let mut state = WorldState::new(config, seed)?;
    let mut stepper = FixedStepper::new();
    log::info!("Rock Drift running headless with seed {}", seed);

    let (mut shots, mut rocks_destroyed, mut ship_losses, mut waves) = (0u32, 0u32, 0u32, 0u32);
    let frames = (RUN_SECS / FRAME_DT) as u32;

    for frame in 0..frames {
        if state.should_exit() {
            break;
        }

        // Aim at the closest rock, fire on a fixed cadence, thrust when far
        let target = state
            .live_asteroids()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(state.ship.pos)
                    .total_cmp(&b.pos.distance_squared(state.ship.pos))
            })
            .map(|a| a.pos);
        let input = TickInput {
            aim_at: target,
            thrust: target.is_some_and(|t| t.distance(state.ship.pos) > 500.0),
            shoot: frame % FIRE_EVERY_FRAMES == 0,
            ..Default::default()
        };

        for event in stepper.advance(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::ShotFired { .. } => shots += 1,
                GameEvent::Exploded {
                    kind: ExplosionKind::Ship,
                    ..
                } => ship_losses += 1,
                GameEvent::Exploded { .. } => rocks_destroyed += 1,
                GameEvent::WaveCleared { .. } => waves += 1,
                _ => {}
            }
            log::trace!("frame {}: {:?}", frame, event);
        }
    }

    log::info!(
        "Done after {} ticks: {} shots, {} rocks destroyed, {} ships lost, {} waves cleared, {} rocks alive",
        state.time_ticks,
        shots,
        rocks_destroyed,
        ship_losses,
        waves,
        state.asteroids.len()
    );
    Ok(())
}
