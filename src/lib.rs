//! Cannon Range - A 2D artillery target range
//!
//! Core modules:
//! - `sim`: Simulation (aiming, charging, viewport, trajectory, targets, session tick)
//! - `input`: Semantic input signals and the control state they drive
//! - `settings`: Headless driver configuration
//! - `script`: Timed input scripts for unattended runs

pub mod input;
pub mod script;
pub mod settings;
pub mod sim;

pub use script::InputScript;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Tick rate of the headless driver (Hz)
    pub const DEFAULT_FRAME_RATE_HZ: u32 = 60;

    /// Gravitational acceleration (world units/s²)
    pub const GRAVITY: f64 = 9.8;
    /// Ground line; a falling ball at or below this starts rolling
    pub const GROUND_Y: f64 = -7.25;

    /// World extents (a ball strictly outside is gone)
    pub const WORLD_LEFT: f64 = -16.0;
    pub const WORLD_RIGHT: f64 = 16.0;
    pub const WORLD_BOTTOM: f64 = -8.0;
    pub const WORLD_TOP: f64 = 8.0;

    /// Cannon pivot and barrel geometry
    pub const CANNON_PIVOT: (f64, f64) = (-12.0, -6.5);
    pub const MUZZLE_DISTANCE: f64 = 2.0;
    /// Barrel is 2 long and 0.5 tall; balls leave from its upper edge
    pub const MUZZLE_ANGLE_OFFSET: f64 = 0.244_978_663_126_864_14; // atan(0.5 / 2)

    /// Aiming limits (degrees) and per-tick step
    pub const CANNON_MIN_ANGLE: f64 = 0.0;
    pub const CANNON_MAX_ANGLE: f64 = 90.0;
    pub const CANNON_STEP: f64 = 1.0;

    /// Launch speed at session start
    pub const INITIAL_LAUNCH_SPEED: f64 = 10.0;
    /// Launch speed restored after every finished flight
    pub const RESET_LAUNCH_SPEED: f64 = 5.0;
    /// Launch speed can never be discharged below this
    pub const MIN_LAUNCH_SPEED: f64 = 0.2;
    /// Speed gained/lost per tick of charging/discharging
    pub const CHARGE_RATE: f64 = 0.2;
    /// Charge indicator (cosmetic)
    pub const CHARGE_LEVEL_MAX: f64 = 4.0;
    pub const CHARGE_LEVEL_STEP: f64 = 0.05;

    /// Rolling uses a tenth of gravity as friction
    pub const ROLL_FRICTION_SCALE: f64 = 0.1;
    /// Residual rolling energy below which the ball is spent
    pub const ROLL_SPENT_THRESHOLD: f64 = 0.02;
    /// Where a spent ball is parked (outside the world, so the next bounds check clears it)
    pub const RESTING_POSITION: (f64, f64) = (19.0, -10.0);

    /// Default viewport (orthographic bounds)
    pub const VIEW_LEFT: f64 = -16.0;
    pub const VIEW_RIGHT: f64 = 16.0;
    pub const VIEW_BOTTOM: f64 = -8.0;
    pub const VIEW_TOP: f64 = 8.0;
    /// Pan/zoom step per tick
    pub const VIEW_STEP: f64 = 0.1;
    /// Zooming in stops before either span gets this small
    pub const VIEW_MIN_EXTENT: f64 = 1.0;

    /// Target geometry
    pub const TARGET_RADIUS: f64 = 1.25;
    pub const TARGET_ONE_CENTER: (f64, f64) = (0.0, -3.25);
    pub const TARGET_TWO_BOUNDS: (f64, f64, f64, f64) = (6.75, 9.25, -6.25, -3.75); // (min_x, max_x, min_y, max_y)
    pub const TARGET_THREE_CENTER: (f64, f64) = (9.0, 4.0);
    pub const TARGET_COUNT: usize = 3;

    /// Obstacle zones (min_x, max_x, min_y, max_y)
    pub const STAND_BOUNDS: (f64, f64, f64, f64) = (-2.0, 1.0, -6.0, -4.0);
    pub const BEAM_BOUNDS: (f64, f64, f64, f64) = (7.0, 11.0, 2.75, 3.25);
    pub const WALL_BOUNDS: (f64, f64, f64, f64) = (12.0, 13.0, -6.0, -2.0);
}

/// Unit vector pointing at `degrees` (counter-clockwise from +x)
#[inline]
pub fn heading(degrees: f64) -> DVec2 {
    let radians = degrees.to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

/// Convert a `(x, y)` tuple constant into a vector
#[inline]
pub fn point(xy: (f64, f64)) -> DVec2 {
    DVec2::new(xy.0, xy.1)
}

/// World position of the cannon muzzle for a barrel angle in degrees
pub fn muzzle_position(angle_deg: f64) -> DVec2 {
    let theta = angle_deg.to_radians() + consts::MUZZLE_ANGLE_OFFSET;
    point(consts::CANNON_PIVOT) + DVec2::new(theta.cos(), theta.sin()) * consts::MUZZLE_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muzzle_offset_matches_barrel_edge() {
        assert!((consts::MUZZLE_ANGLE_OFFSET - (0.5f64 / 2.0).atan()).abs() < 1e-12);
    }

    #[test]
    fn test_muzzle_position_level_barrel() {
        let muzzle = muzzle_position(0.0);
        // Slightly above the pivot, about two units to the right
        assert!(muzzle.x > -10.1 && muzzle.x < -10.0);
        assert!(muzzle.y > -6.5);
        assert!((muzzle.distance(point(consts::CANNON_PIVOT)) - consts::MUZZLE_DISTANCE).abs() < 1e-9);
    }

    #[test]
    fn test_heading() {
        let up = heading(90.0);
        assert!(up.x.abs() < 1e-12);
        assert!((up.y - 1.0).abs() < 1e-12);
    }
}
