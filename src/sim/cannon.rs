//! Cannon aiming and power charging
//!
//! Both integrate held intents once per tick with fixed steps (not scaled by
//! frame time) and clamp at the mutation site.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::Sign;

/// The launcher barrel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cannon {
    /// Barrel angle in degrees, within [0, 90]
    pub angle: f64,
}

impl Default for Cannon {
    fn default() -> Self {
        Self {
            angle: CANNON_MIN_ANGLE,
        }
    }
}

impl Cannon {
    /// Rotate one step in the given direction (positive raises)
    pub fn aim(&mut self, direction: Option<Sign>) {
        match direction {
            Some(Sign::Positive) => {
                self.angle = (self.angle + CANNON_STEP).min(CANNON_MAX_ANGLE);
            }
            Some(Sign::Negative) => {
                self.angle = (self.angle - CANNON_STEP).max(CANNON_MIN_ANGLE);
            }
            None => {}
        }
    }
}

/// Launch speed and the cosmetic charge indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerState {
    pub launch_speed: f64,
    /// Indicator level in [0, 4]
    pub charge_level: f64,
}

impl Default for PowerState {
    fn default() -> Self {
        Self {
            launch_speed: INITIAL_LAUNCH_SPEED,
            charge_level: 0.0,
        }
    }
}

impl PowerState {
    /// Charge (positive) or discharge (negative) one step. Only while the
    /// cannon is loaded; a ball in flight ignores it.
    pub fn charge(&mut self, direction: Option<Sign>, loaded: bool) {
        if !loaded {
            return;
        }

        match direction {
            Some(Sign::Positive) => {
                self.launch_speed += CHARGE_RATE;
                self.charge_level = (self.charge_level + CHARGE_LEVEL_STEP).min(CHARGE_LEVEL_MAX);
            }
            Some(Sign::Negative) => {
                self.launch_speed = (self.launch_speed - CHARGE_RATE).max(MIN_LAUNCH_SPEED);
                self.charge_level = (self.charge_level - CHARGE_LEVEL_STEP).max(0.0);
            }
            None => {}
        }
    }

    /// Indicator drains when a ball leaves the barrel
    pub fn on_launch(&mut self) {
        self.charge_level = 0.0;
    }

    /// Default speed restored after a finished flight
    pub fn on_flight_end(&mut self) {
        self.launch_speed = RESET_LAUNCH_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_clamps_top() {
        let mut cannon = Cannon { angle: 89.5 };
        cannon.aim(Some(Sign::Positive));
        assert_eq!(cannon.angle, 90.0);
        cannon.aim(Some(Sign::Positive));
        assert_eq!(cannon.angle, 90.0);
    }

    #[test]
    fn test_aim_clamps_bottom() {
        let mut cannon = Cannon::default();
        cannon.aim(Some(Sign::Negative));
        assert_eq!(cannon.angle, 0.0);
        cannon.aim(Some(Sign::Positive));
        cannon.aim(Some(Sign::Positive));
        assert_eq!(cannon.angle, 2.0);
        cannon.aim(None);
        assert_eq!(cannon.angle, 2.0);
    }

    #[test]
    fn test_charge_raises_speed_and_level() {
        let mut power = PowerState::default();
        for _ in 0..3 {
            power.charge(Some(Sign::Positive), true);
        }
        assert!((power.launch_speed - (INITIAL_LAUNCH_SPEED + 3.0 * CHARGE_RATE)).abs() < 1e-9);
        assert!((power.charge_level - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_charge_level_caps() {
        let mut power = PowerState::default();
        for _ in 0..200 {
            power.charge(Some(Sign::Positive), true);
        }
        assert_eq!(power.charge_level, CHARGE_LEVEL_MAX);
        // Speed has no ceiling
        assert!(power.launch_speed > 49.0);
    }

    #[test]
    fn test_discharge_floors() {
        let mut power = PowerState::default();
        for _ in 0..100 {
            power.charge(Some(Sign::Negative), true);
        }
        assert_eq!(power.launch_speed, MIN_LAUNCH_SPEED);
        assert_eq!(power.charge_level, 0.0);
    }

    #[test]
    fn test_ignored_in_flight() {
        let mut power = PowerState::default();
        power.charge(Some(Sign::Positive), false);
        power.charge(Some(Sign::Negative), false);
        assert_eq!(power.launch_speed, INITIAL_LAUNCH_SPEED);
        assert_eq!(power.charge_level, 0.0);
    }

    #[test]
    fn test_flight_lifecycle_hooks() {
        let mut power = PowerState::default();
        power.charge(Some(Sign::Positive), true);
        power.on_launch();
        assert_eq!(power.charge_level, 0.0);
        power.on_flight_end();
        assert_eq!(power.launch_speed, RESET_LAUNCH_SPEED);
    }
}
