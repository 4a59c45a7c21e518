//! Per-frame simulation tick
//!
//! Order within a tick:
//! 1. drain input events into the control state (fire/quit are triggers)
//! 2. launch if fire arrived, using the aim and power as they stood
//! 3. step aim, power and viewport from the held intents
//! 4. advance the ball to `now`
//! 5. hit-test targets and update score
//! 6. hand back a snapshot for the renderer

use super::snapshot::RenderSnapshot;
use super::state::{GameEvent, GameSession};
use crate::input::{InputEvent, Trigger};

/// Input events gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn single(event: InputEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub snapshot: RenderSnapshot,
    pub events: Vec<GameEvent>,
}

/// Advance the session by one frame. `now` is wall-clock seconds from a
/// monotonic source; only flights read it.
pub fn tick(session: &mut GameSession, input: &TickInput, now: f64) -> TickOutput {
    session.time_ticks += 1;
    let mut events = Vec::new();

    let mut fire = false;
    for event in &input.events {
        match session.control.apply(event) {
            Some(Trigger::Fire) => fire = true,
            Some(Trigger::Quit) => {
                if !session.quit_requested {
                    session.quit_requested = true;
                    log::info!("Quit requested. Score: {}", session.score);
                    events.push(GameEvent::QuitRequested);
                }
            }
            None => {}
        }
    }

    if fire {
        if let Some(launch) = session.fire(now) {
            events.push(GameEvent::Launched(launch));
        }
    }

    session.cannon.aim(session.control.aim_direction());
    let loaded = session.projectile.is_idle();
    session.power.charge(session.control.power_direction(), loaded);
    let nudge = session.control.take_zoom_nudge();
    session.viewport.update(
        session.control.zoom_direction(),
        nudge,
        session.control.pan_direction(),
    );

    if let Some(event) = session.projectile.update(now) {
        session.on_flight_event(&event);
        events.push(GameEvent::Flight(event));
    }

    let was_over = session.over;
    for id in session.evaluate_hits() {
        events.push(GameEvent::TargetHit {
            id,
            score: session.score,
        });
    }
    if session.over && !was_over {
        events.push(GameEvent::AllTargetsDown);
    }

    TickOutput {
        snapshot: session.snapshot(),
        events,
    }
}
