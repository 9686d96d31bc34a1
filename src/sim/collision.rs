//! Collision detection across the wrapped world
//!
//! Collisions are detect-and-destroy: no response forces, just a yes/no per
//! pair. An asteroid flagged `on_edge` is also tested at its 8 ghost
//! positions so overlaps across a seam are caught. Scans run in array order
//! and the first hit wins.

use glam::Vec2;

use super::state::{Asteroid, Missile, Ship};
use super::torus::Torus;

/// Every position the asteroid currently occupies (real + ghosts)
#[inline]
fn asteroid_images(asteroid: &Asteroid, space: &Torus) -> impl Iterator<Item = Vec2> {
    space.images(asteroid.pos, asteroid.on_edge)
}

/// True if any ship hull point lies inside the asteroid or one of its ghosts.
///
/// Ghosts exist only while the asteroid itself is on an edge. A hull point
/// poking past an edge does not reach a rock resting just inside the
/// opposite edge.
pub fn ship_vs_asteroid(ship: &Ship, asteroid: &Asteroid, space: &Torus) -> bool {
    let r2 = asteroid.radius * asteroid.radius;
    asteroid_images(asteroid, space)
        .any(|center| ship.hull.iter().any(|p| p.distance_squared(center) <= r2))
}

/// Circle-circle overlap between a missile and the asteroid or its ghosts
pub fn missile_vs_asteroid(missile: &Missile, asteroid: &Asteroid, space: &Torus) -> bool {
    let reach = missile.radius + asteroid.radius;
    let reach2 = reach * reach;
    asteroid_images(asteroid, space).any(|center| missile.pos.distance_squared(center) <= reach2)
}

/// First in-flight missile (by slot) that hits a live asteroid
pub fn first_missile_hit(asteroid: &Asteroid, missiles: &[Missile], space: &Torus) -> Option<usize> {
    if asteroid.exploded {
        return None;
    }
    missiles
        .iter()
        .position(|m| m.in_flight() && missile_vs_asteroid(m, asteroid, space))
}

/// First live asteroid (by index) that a flying ship touches
pub fn first_ship_hit(ship: &Ship, asteroids: &[Asteroid], space: &Torus) -> Option<usize> {
    if ship.exploded {
        return None;
    }
    asteroids
        .iter()
        .position(|a| !a.exploded && ship_vs_asteroid(ship, a, space))
}
