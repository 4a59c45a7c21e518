//! Collision geometry for the range
//!
//! Everything the ball can touch is either a circle or an axis-aligned box,
//! so hit tests are plain point containment checks against the ball centre.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Build from a `(min_x, max_x, min_y, max_y)` constant
    pub fn from_extents(extents: (f64, f64, f64, f64)) -> Self {
        let (min_x, max_x, min_y, max_y) = extents;
        Self::new(DVec2::new(min_x, min_y), DVec2::new(max_x, max_y))
    }

    /// Inclusive containment (edges count)
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Exclusive containment (edges don't count)
    #[inline]
    pub fn contains_strict(&self, p: DVec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// Circle hit region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Squared-distance test, no square root
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }
}

/// A rectangular piece of scenery that turns the ball around
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub name: &'static str,
    pub bounds: Aabb,
}

/// The fixed scenery: target stand, overhead beam, wall segment
pub fn obstacles() -> [Obstacle; 3] {
    [
        Obstacle {
            name: "stand",
            bounds: Aabb::from_extents(STAND_BOUNDS),
        },
        Obstacle {
            name: "beam",
            bounds: Aabb::from_extents(BEAM_BOUNDS),
        },
        Obstacle {
            name: "wall",
            bounds: Aabb::from_extents(WALL_BOUNDS),
        },
    ]
}

/// Index of the first obstacle containing `p`
pub fn obstacle_at(obstacles: &[Obstacle], p: DVec2) -> Option<usize> {
    obstacles.iter().position(|o| o.bounds.contains(p))
}

/// World extents; leaving them ends the flight
pub fn world_bounds() -> Aabb {
    Aabb::new(
        DVec2::new(WORLD_LEFT, WORLD_BOTTOM),
        DVec2::new(WORLD_RIGHT, WORLD_TOP),
    )
}

/// True once the ball is strictly past any world edge
#[inline]
pub fn out_of_world(p: DVec2) -> bool {
    !world_bounds().contains(p)
}

/// True when the ball is at or below the ground line
#[inline]
pub fn touches_ground(p: DVec2) -> bool {
    p.y <= GROUND_Y
}
