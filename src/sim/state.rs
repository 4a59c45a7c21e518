//! Game session state
//!
//! One session per process. The session owns every piece of mutable game
//! state; nothing lives in globals.

use serde::Serialize;

use super::cannon::{Cannon, PowerState};
use super::projectile::{FlightEnd, FlightEvent, LaunchSnapshot, Projectile};
use super::snapshot::{ProjectileView, RenderSnapshot};
use super::targets::TargetRegistry;
use super::viewport::Viewport;
use crate::input::ControlState;

/// Session-level milestones, reported by `tick` in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Launched(LaunchSnapshot),
    Flight(FlightEvent),
    TargetHit { id: u8, score: u32 },
    AllTargetsDown,
    QuitRequested,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub control: ControlState,
    pub cannon: Cannon,
    pub power: PowerState,
    pub viewport: Viewport,
    pub projectile: Projectile,
    pub targets: TargetRegistry,
    /// Retired targets (0-3)
    pub score: u32,
    /// True once every target is down; never cleared
    pub over: bool,
    pub quit_requested: bool,
    /// Ticks processed so far
    pub time_ticks: u64,
    /// Balls fired this session
    pub shots_fired: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            control: ControlState::new(),
            cannon: Cannon::default(),
            power: PowerState::default(),
            viewport: Viewport::default(),
            projectile: Projectile::new(),
            targets: TargetRegistry::standard(),
            score: 0,
            over: false,
            quit_requested: false,
            time_ticks: 0,
            shots_fired: 0,
        }
    }

    /// Fire with the current aim and power. No-op while a ball is in flight.
    pub fn fire(&mut self, now: f64) -> Option<LaunchSnapshot> {
        let Some(launch) = self
            .projectile
            .launch(self.cannon.angle, self.power.launch_speed, now)
        else {
            log::debug!("Fire ignored: ball already in flight");
            return None;
        };

        self.power.on_launch();
        self.shots_fired += 1;
        log::info!(
            "Shot {} away: angle {:.0}°, speed {:.2}",
            self.shots_fired,
            launch.angle_deg,
            launch.speed
        );
        Some(launch)
    }

    /// Bookkeeping for a projectile transition
    pub fn on_flight_event(&mut self, event: &FlightEvent) {
        match *event {
            FlightEvent::Landed { at } => {
                log::debug!("Ball hit the ground at x = {:.2}, rolling", at.x);
            }
            FlightEvent::Deflected { obstacle, at } => {
                log::debug!("Ball bounced off the {} at ({:.2}, {:.2})", obstacle, at.x, at.y);
            }
            FlightEvent::Ended { reason, last } => {
                match reason {
                    FlightEnd::Spent => log::debug!("Ball rolled to a stop"),
                    FlightEnd::OutOfBounds => {
                        log::debug!("Ball left the range at ({:.2}, {:.2})", last.x, last.y)
                    }
                }
                self.power.on_flight_end();
            }
        }
    }

    /// Hit-test the ball against the targets and update score/over.
    /// Returns the ids retired this call.
    pub fn evaluate_hits(&mut self) -> Vec<u8> {
        let Some(flight) = self.projectile.flight() else {
            return Vec::new();
        };

        let hits = self.targets.register_hits(flight.position);
        self.score = self.targets.score();
        for id in &hits {
            log::info!("Target {} down! Score: {}", id, self.score);
        }

        if !self.over && self.targets.all_down() {
            self.over = true;
            log::info!("All targets down in {} shots", self.shots_fired);
        }
        hits
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.time_ticks,
            cannon_angle: self.cannon.angle,
            launch_speed: self.power.launch_speed,
            charge_level: self.power.charge_level,
            viewport: self.viewport,
            projectile: ProjectileView {
                flying: self.projectile.is_flying(),
                position: self.projectile.position(),
            },
            targets: self.targets.active_flags(),
            score: self.score,
            over: self.over,
            quit: self.quit_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::DVec2;

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.score, 0);
        assert!(!session.over);
        assert!(session.projectile.is_idle());
        assert_eq!(session.cannon.angle, 0.0);
        assert_eq!(session.power.launch_speed, INITIAL_LAUNCH_SPEED);
    }

    #[test]
    fn test_fire_twice_only_launches_once() {
        let mut session = GameSession::new();
        assert!(session.fire(0.0).is_some());
        assert!(session.fire(0.1).is_none());
        assert_eq!(session.shots_fired, 1);
    }

    #[test]
    fn test_flight_end_restores_speed() {
        let mut session = GameSession::new();
        session.power.launch_speed = 17.0;
        session.on_flight_event(&FlightEvent::Ended {
            reason: FlightEnd::OutOfBounds,
            last: DVec2::new(20.0, 0.0),
        });
        assert_eq!(session.power.launch_speed, RESET_LAUNCH_SPEED);
    }

    #[test]
    fn test_evaluate_hits_idle_is_noop() {
        let mut session = GameSession::new();
        assert!(session.evaluate_hits().is_empty());
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = GameSession::new();
        session.cannon.angle = 30.0;
        session.power.charge_level = 1.5;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.cannon_angle, 30.0);
        assert_eq!(snapshot.charge_level, 1.5);
        assert!(!snapshot.projectile.flying);
        assert_eq!(snapshot.projectile.position, DVec2::ZERO);
        assert_eq!(snapshot.targets, [true; 3]);
    }
}
