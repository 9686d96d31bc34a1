//! Property tests for the simulation core

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use rock_drift::config::{AsteroidConfig, ShipConfig, SimConfig};
use rock_drift::sim::asteroid::{make_asteroid, speed_for_radius, split};
use rock_drift::sim::{AsteroidTier, MissileRack, Ship, Torus};

const W: f32 = 1440.0;
const H: f32 = 1080.0;

proptest! {
    /// Within one world size of the bounds, wrapping settles in one step
    #[test]
    fn wrap_is_idempotent(x in -W..2.0 * W, y in -H..2.0 * H) {
        let space = Torus::new(W, H);
        let once = space.wrap(Vec2::new(x, y));
        prop_assert_eq!(space.wrap(once), once);
        prop_assert!(once.x >= 0.0 && once.x <= W);
        prop_assert!(once.y >= 0.0 && once.y <= H);
    }

    /// Bigger tiers are strictly slower for every config that validates
    #[test]
    fn tier_speed_is_monotonic(
        small in 5.0f32..40.0,
        medium_ratio in 1.1f32..7.5,
        big_gap in 1.0f32..120.0,
        base_speed in 10.0f32..500.0,
    ) {
        let medium = small * medium_ratio;
        let config = AsteroidConfig {
            small_radius: small,
            medium_radius: medium,
            big_radius: medium + big_gap,
            base_speed,
            ..AsteroidConfig::default()
        };
        let sim = SimConfig { asteroid: config, ..SimConfig::default() };
        prop_assert!(sim.validate().is_ok());

        let speeds: Vec<f32> = [AsteroidTier::Big, AsteroidTier::Medium, AsteroidTier::Small]
            .iter()
            .map(|t| speed_for_radius(t.radius(&config), &config))
            .collect();
        prop_assert!(speeds[0] < speeds[1] && speeds[1] < speeds[2]);
        prop_assert!(speeds.iter().all(|s| *s >= base_speed / 8.0));
    }

    /// Splits produce two smaller children placed symmetrically
    #[test]
    fn split_is_symmetric(seed in any::<u64>(), x in 200.0f32..1200.0, y in 200.0f32..880.0, medium in any::<bool>()) {
        let config = AsteroidConfig::default();
        let space = Torus::new(W, H);
        let tier = if medium { AsteroidTier::Medium } else { AsteroidTier::Big };
        let parent = make_asteroid(Vec2::new(x, y), 0.0, tier, 1, &config, &space);
        let mut rng = Pcg32::seed_from_u64(seed);

        let [a, b] = split(&parent, &config, &space, &mut rng).expect("non-small splits");
        prop_assert_eq!(Some(a.tier), tier.smaller());
        prop_assert_eq!(Some(b.tier), tier.smaller());
        prop_assert!(((a.pos - parent.pos) + (b.pos - parent.pos)).length() < 1e-2);
    }

    /// The (capacity + 1)th shot always reuses slot 0
    #[test]
    fn ring_reuses_first_slot(capacity in 1usize..16) {
        let space = Torus::new(W, H);
        let ship = Ship::new(space.center(), 0.0, &ShipConfig::default());
        let config = rock_drift::config::MissileConfig { capacity, ..Default::default() };
        let mut rack = MissileRack::new(capacity, config.radius);
        for expected in 0..capacity {
            prop_assert_eq!(rack.spawn(&ship, &config, &space), expected);
        }
        prop_assert_eq!(rack.spawn(&ship, &config, &space), 0);
    }
}

#[test]
fn small_asteroids_never_split() {
    let config = AsteroidConfig::default();
    let space = Torus::new(W, H);
    let small = make_asteroid(Vec2::new(500.0, 500.0), 45.0, AsteroidTier::Small, 0, &config, &space);
    let mut rng = Pcg32::seed_from_u64(1);
    assert!(split(&small, &config, &space, &mut rng).is_none());
}
