//! Closed-form ball kinematics
//!
//! Positions are always evaluated from elapsed time, never accumulated
//! frame-by-frame, so a flight traces the same curve at any frame rate.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading;

/// One parabolic segment: start point and initial velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ballistic {
    pub origin: DVec2,
    pub velocity: DVec2,
}

impl Ballistic {
    pub fn new(origin: DVec2, velocity: DVec2) -> Self {
        Self { origin, velocity }
    }

    /// Segment for a ball fired at `angle_deg` with `speed`
    pub fn from_launch(origin: DVec2, angle_deg: f64, speed: f64) -> Self {
        Self::new(origin, heading(angle_deg) * speed)
    }

    /// Position `t` seconds into the segment
    #[inline]
    pub fn position_at(&self, t: f64) -> DVec2 {
        DVec2::new(
            self.origin.x + self.velocity.x * t,
            self.origin.y + self.velocity.y * t - 0.5 * GRAVITY * t * t,
        )
    }

    /// Velocity `t` seconds into the segment
    #[inline]
    pub fn velocity_at(&self, t: f64) -> DVec2 {
        DVec2::new(self.velocity.x, self.velocity.y - GRAVITY * t)
    }

    /// New segment starting at time `t` with the horizontal velocity reversed
    pub fn deflected_at(&self, t: f64) -> Self {
        let v = self.velocity_at(t);
        Self::new(self.position_at(t), DVec2::new(-v.x, v.y))
    }
}

/// Ball position `t` seconds after a launch. Pure: identical inputs give
/// bit-identical output.
pub fn launch_position(origin: DVec2, angle_deg: f64, speed: f64, t: f64) -> DVec2 {
    Ballistic::from_launch(origin, angle_deg, speed).position_at(t)
}

/// Ball rolling along the ground after touchdown, slowed by friction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roll {
    /// Touchdown point (on the ground line)
    pub contact: DVec2,
    /// +1.0 rolls right, -1.0 rolls left
    pub direction: f64,
    /// Rolling speed at touchdown (the launch speed)
    pub speed: f64,
}

impl Roll {
    pub fn new(contact: DVec2, direction: f64, speed: f64) -> Self {
        Self {
            contact: DVec2::new(contact.x, GROUND_Y),
            direction: if direction < 0.0 { -1.0 } else { 1.0 },
            speed,
        }
    }

    fn deceleration() -> f64 {
        ROLL_FRICTION_SCALE * GRAVITY
    }

    /// Position `t` seconds after touchdown
    pub fn position_at(&self, t: f64) -> DVec2 {
        let travelled = self.speed * t - 0.5 * Self::deceleration() * t * t;
        DVec2::new(self.contact.x + self.direction * travelled, GROUND_Y)
    }

    /// Remaining rolling energy `t` seconds after touchdown
    pub fn residual_energy(&self, t: f64) -> f64 {
        self.speed - Self::deceleration() * t
    }

    pub fn is_spent(&self, t: f64) -> bool {
        self.residual_energy(t) < ROLL_SPENT_THRESHOLD
    }
}
