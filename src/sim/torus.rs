//! Toroidal world geometry
//!
//! The world is a rectangle whose opposite edges are glued together. An
//! entity straddling an edge is also tested (and drawn) at its 8 translated
//! copies so overlaps across the seam are seen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;

/// Rectangular wrap-around world `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub width: f32,
    pub height: f32,
}

impl From<WorldConfig> for Torus {
    fn from(world: WorldConfig) -> Self {
        Self::new(world.width, world.height)
    }
}

impl Torus {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// World center (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Bring a position back into bounds with one add/subtract per axis.
    ///
    /// Only displacements of up to one world dimension per tick are folded
    /// back fully; anything faster stays out of bounds until later ticks.
    pub fn wrap(&self, mut pos: Vec2) -> Vec2 {
        if pos.x < 0.0 {
            pos.x += self.width;
        } else if pos.x > self.width {
            pos.x -= self.width;
        }
        if pos.y < 0.0 {
            pos.y += self.height;
        } else if pos.y > self.height {
            pos.y -= self.height;
        }
        pos
    }

    /// True if a circle crosses any world edge
    pub fn circle_on_edge(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius < 0.0
            || pos.x + radius > self.width
            || pos.y - radius < 0.0
            || pos.y + radius > self.height
    }

    /// True if any point lies outside the world (ship hull test)
    pub fn points_on_edge(&self, points: &[Vec2]) -> bool {
        points
            .iter()
            .any(|p| p.x < 0.0 || p.x > self.width || p.y < 0.0 || p.y > self.height)
    }

    /// Translations to the 8 neighbouring copies of the world
    pub fn neighbor_offsets(&self) -> [Vec2; 8] {
        let (w, h) = (self.width, self.height);
        [
            Vec2::new(w, 0.0),
            Vec2::new(-w, 0.0),
            Vec2::new(0.0, -h),
            Vec2::new(0.0, h),
            Vec2::new(w, -h),
            Vec2::new(-w, -h),
            Vec2::new(w, h),
            Vec2::new(-w, h),
        ]
    }

    /// The real position followed by its 8 ghosts when `on_edge`
    pub fn images(&self, pos: Vec2, on_edge: bool) -> impl Iterator<Item = Vec2> {
        let ghosts = if on_edge { 8 } else { 0 };
        std::iter::once(pos).chain(
            self.neighbor_offsets()
                .into_iter()
                .take(ghosts)
                .map(move |offset| pos + offset),
        )
    }
}
