//! Projectile flight state machine
//!
//! Idle → (fire) → Flying. A flight is Airborne until it touches the ground,
//! then Rolling until friction spends it. Leaving the world at any point
//! ends the flight and returns to Idle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Obstacle, obstacle_at, obstacles, out_of_world, touches_ground};
use super::trajectory::{Ballistic, Roll};
use crate::consts::*;
use crate::{muzzle_position, point};

/// Launch parameters frozen at the moment of firing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSnapshot {
    pub origin: DVec2,
    pub angle_deg: f64,
    pub speed: f64,
    /// Wall-clock time of launch (seconds)
    pub time: f64,
}

impl LaunchSnapshot {
    /// Snapshot for a ball leaving the cannon muzzle
    pub fn from_cannon(angle_deg: f64, speed: f64, time: f64) -> Self {
        Self {
            origin: muzzle_position(angle_deg),
            angle_deg,
            speed,
            time,
        }
    }
}

/// What the ball is doing during a flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Free flight along a parabola that began at `segment_start`
    Airborne {
        path: Ballistic,
        segment_start: f64,
        /// Inside an obstacle zone (deflection is edge-triggered)
        inside_obstacle: bool,
    },
    /// On the ground since `contact_time`
    Rolling { roll: Roll, contact_time: f64 },
}

/// An in-progress flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub launch: LaunchSnapshot,
    pub phase: FlightPhase,
    pub position: DVec2,
    /// Seconds since launch
    pub elapsed: f64,
    pub deflections: u32,
}

/// Projectile state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileState {
    Idle,
    Flying(Flight),
}

/// Why a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightEnd {
    /// Rolled to a stop
    Spent,
    /// Left the world
    OutOfBounds,
}

/// Notable transitions from one update
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FlightEvent {
    Landed { at: DVec2 },
    Deflected { obstacle: &'static str, at: DVec2 },
    Ended { reason: FlightEnd, last: DVec2 },
}

/// The single ball
#[derive(Debug, Clone)]
pub struct Projectile {
    state: ProjectileState,
    obstacles: [Obstacle; 3],
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

impl Projectile {
    pub fn new() -> Self {
        Self {
            state: ProjectileState::Idle,
            obstacles: obstacles(),
        }
    }

    pub fn state(&self) -> &ProjectileState {
        &self.state
    }

    pub fn flight(&self) -> Option<&Flight> {
        match &self.state {
            ProjectileState::Flying(flight) => Some(flight),
            ProjectileState::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ProjectileState::Idle)
    }

    pub fn is_flying(&self) -> bool {
        !self.is_idle()
    }

    /// Current ball position (origin while idle)
    pub fn position(&self) -> DVec2 {
        self.flight().map(|f| f.position).unwrap_or(DVec2::ZERO)
    }

    /// Fire from the cannon. Ignored (returns `None`) while a flight is in progress.
    pub fn launch(&mut self, angle_deg: f64, speed: f64, now: f64) -> Option<LaunchSnapshot> {
        let snapshot = LaunchSnapshot::from_cannon(angle_deg, speed, now);
        self.launch_with(snapshot).then_some(snapshot)
    }

    /// Start a flight from explicit launch parameters
    pub fn launch_with(&mut self, launch: LaunchSnapshot) -> bool {
        if self.is_flying() {
            return false;
        }

        self.state = ProjectileState::Flying(Flight {
            launch,
            phase: FlightPhase::Airborne {
                path: Ballistic::from_launch(launch.origin, launch.angle_deg, launch.speed),
                segment_start: launch.time,
                inside_obstacle: false,
            },
            position: launch.origin,
            elapsed: 0.0,
            deflections: 0,
        });
        true
    }

    /// Drop any flight and go back to Idle
    pub fn reset(&mut self) {
        self.state = ProjectileState::Idle;
    }

    /// Advance the flight to wall-clock time `now`
    pub fn update(&mut self, now: f64) -> Option<FlightEvent> {
        let ProjectileState::Flying(flight) = &mut self.state else {
            return None;
        };

        flight.elapsed = (now - flight.launch.time).max(0.0);
        let mut spent = false;

        let event = match flight.phase {
            FlightPhase::Airborne {
                path,
                segment_start,
                inside_obstacle,
            } => {
                let t = (now - segment_start).max(0.0);
                let pos = path.position_at(t);

                // Ground first, then bounds (below), then scenery
                if touches_ground(pos) {
                    let roll = Roll::new(pos, path.velocity_at(t).x, flight.launch.speed);
                    flight.position = roll.contact;
                    flight.phase = FlightPhase::Rolling {
                        roll,
                        contact_time: now,
                    };
                    Some(FlightEvent::Landed { at: roll.contact })
                } else {
                    flight.position = pos;
                    match obstacle_at(&self.obstacles, pos) {
                        Some(index) if !inside_obstacle && !out_of_world(pos) => {
                            flight.phase = FlightPhase::Airborne {
                                path: path.deflected_at(t),
                                segment_start: now,
                                inside_obstacle: true,
                            };
                            flight.deflections += 1;
                            Some(FlightEvent::Deflected {
                                obstacle: self.obstacles[index].name,
                                at: pos,
                            })
                        }
                        Some(_) => None,
                        None => {
                            flight.phase = FlightPhase::Airborne {
                                path,
                                segment_start,
                                inside_obstacle: false,
                            };
                            None
                        }
                    }
                }
            }
            FlightPhase::Rolling { roll, contact_time } => {
                let t = (now - contact_time).max(0.0);
                if roll.is_spent(t) {
                    spent = true;
                    flight.position = point(RESTING_POSITION);
                } else {
                    flight.position = roll.position_at(t);
                }
                None
            }
        };

        if out_of_world(flight.position) {
            let last = flight.position;
            let reason = if spent {
                FlightEnd::Spent
            } else {
                FlightEnd::OutOfBounds
            };
            self.reset();
            return Some(FlightEvent::Ended { reason, last });
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn fly_until_idle(projectile: &mut Projectile, start: f64, max_secs: f64) -> Vec<FlightEvent> {
        let mut events = Vec::new();
        let mut now = start;
        while projectile.is_flying() && now - start < max_secs {
            now += DT;
            if let Some(event) = projectile.update(now) {
                events.push(event);
            }
        }
        events
    }

    #[test]
    fn test_launch_only_when_idle() {
        let mut projectile = Projectile::new();
        assert!(projectile.is_idle());
        assert_eq!(projectile.position(), DVec2::ZERO);

        let snapshot = projectile.launch(30.0, 8.0, 100.0).expect("idle cannon fires");
        assert_eq!(snapshot.origin, muzzle_position(30.0));
        assert_eq!(projectile.position(), snapshot.origin);
        assert!(projectile.launch(60.0, 12.0, 100.5).is_none());
        assert_eq!(projectile.flight().unwrap().launch, snapshot);
    }

    #[test]
    fn test_elapsed_is_wall_clock() {
        let mut projectile = Projectile::new();
        projectile.launch(45.0, 10.0, 50.0);
        projectile.update(50.25);
        let flight = projectile.flight().unwrap();
        assert!((flight.elapsed - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_bounds_resets_immediately() {
        let mut projectile = Projectile::new();
        // Straight up and fast: leaves the top of the world
        projectile.launch_with(LaunchSnapshot {
            origin: DVec2::new(0.0, 0.0),
            angle_deg: 90.0,
            speed: 30.0,
            time: 0.0,
        });
        assert_eq!(projectile.update(0.1), None);
        let event = projectile.update(0.5);
        assert!(matches!(
            event,
            Some(FlightEvent::Ended {
                reason: FlightEnd::OutOfBounds,
                ..
            })
        ));
        assert!(projectile.is_idle());
        assert_eq!(projectile.position(), DVec2::ZERO);
    }

    #[test]
    fn test_ground_contact_then_spent() {
        let mut projectile = Projectile::new();
        projectile.launch_with(LaunchSnapshot {
            origin: DVec2::new(-12.0, -6.5),
            angle_deg: 0.0,
            speed: 2.0,
            time: 0.0,
        });

        let events = fly_until_idle(&mut projectile, 0.0, 10.0);
        assert!(matches!(events.first(), Some(FlightEvent::Landed { .. })));
        assert!(matches!(
            events.last(),
            Some(FlightEvent::Ended {
                reason: FlightEnd::Spent,
                ..
            })
        ));
        assert!(projectile.is_idle());
    }

    #[test]
    fn test_rolling_stays_on_ground_line() {
        let mut projectile = Projectile::new();
        projectile.launch_with(LaunchSnapshot {
            origin: DVec2::new(-12.0, -7.0),
            angle_deg: 0.0,
            speed: 3.0,
            time: 0.0,
        });
        let mut now = 0.0;
        while !matches!(
            projectile.flight().map(|f| f.phase),
            Some(FlightPhase::Rolling { .. })
        ) {
            now += DT;
            projectile.update(now);
        }
        let x0 = projectile.position().x;
        projectile.update(now + 0.5);
        assert_eq!(projectile.position().y, GROUND_Y);
        assert!(projectile.position().x > x0);
    }

    #[test]
    fn test_wall_deflects_once_per_entry() {
        let mut projectile = Projectile::new();
        // Level shot straight into the wall at x = 12
        projectile.launch_with(LaunchSnapshot {
            origin: DVec2::new(10.0, -3.0),
            angle_deg: 0.0,
            speed: 20.0,
            time: 0.0,
        });

        let mut deflections = Vec::new();
        let mut now = 0.0;
        for _ in 0..30 {
            now += DT;
            match projectile.update(now) {
                Some(FlightEvent::Deflected { obstacle, at }) => deflections.push((obstacle, at)),
                Some(FlightEvent::Ended { .. }) => break,
                _ => {}
            }
        }

        assert_eq!(deflections.len(), 1);
        assert_eq!(deflections[0].0, "wall");
        // Heading back left after the bounce
        assert!(projectile.position().x < deflections[0].1.x);
        assert_eq!(projectile.flight().unwrap().deflections, 1);
    }

    #[test]
    fn test_ground_checked_before_bounds() {
        let mut projectile = Projectile::new();
        // A long frame gap: the evaluated point is below both the ground
        // line and the bottom of the world
        projectile.launch_with(LaunchSnapshot {
            origin: DVec2::new(5.0, -7.0),
            angle_deg: 0.0,
            speed: 0.1,
            time: 0.0,
        });
        let event = projectile.update(1.0);
        assert!(matches!(event, Some(FlightEvent::Landed { .. })));
        assert!(projectile.is_flying());
        assert_eq!(projectile.position().y, GROUND_Y);
    }
}
