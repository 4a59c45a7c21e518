//! Timed input scripts
//!
//! A script is a list of input events keyed by frame number, used to drive a
//! session without a human at the controls.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{InputEvent, Signal};

/// One scripted event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Frame (tick index, starting at 0) on which the event is delivered
    pub frame: u64,
    pub event: InputEvent,
}

/// Frame-ordered input events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        // Stable: same-frame events keep their authored order
        steps.sort_by_key(|s| s.frame);
        Self { steps }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let script: InputScript = serde_json::from_str(json)?;
        Ok(Self::new(script.steps))
    }

    /// Load a script file, falling back to the built-in demo
    pub fn load_or_demo(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::demo();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(script) => {
                    log::info!("Loaded {} scripted events from {}", script.steps.len(), path.display());
                    script
                }
                Err(e) => {
                    log::warn!("Invalid script {}: {}; using demo", path.display(), e);
                    Self::demo()
                }
            },
            Err(e) => {
                log::warn!("Can't read script {}: {}; using demo", path.display(), e);
                Self::demo()
            }
        }
    }

    /// Events for a given frame, in authored order
    pub fn events_at(&self, frame: u64) -> Vec<InputEvent> {
        self.steps
            .iter()
            .filter(|s| s.frame == frame)
            .map(|s| s.event)
            .collect()
    }

    /// Last frame with an event
    pub fn last_frame(&self) -> Option<u64> {
        self.steps.last().map(|s| s.frame)
    }

    /// Two shots that clear the range at 60 Hz, then quit
    pub fn demo() -> Self {
        let step = |frame, event| ScriptStep { frame, event };
        Self::new(vec![
            // 30° at 13.6: through the stand ball, then the box
            step(0, InputEvent::press(Signal::AimUp)),
            step(30, InputEvent::release(Signal::AimUp)),
            step(30, InputEvent::press(Signal::Charge)),
            step(48, InputEvent::release(Signal::Charge)),
            step(60, InputEvent::fire()),
            // 50° at 17.6 (from the post-flight 5.0): the ball under the beam
            step(240, InputEvent::press(Signal::AimUp)),
            step(240, InputEvent::press(Signal::Charge)),
            step(260, InputEvent::release(Signal::AimUp)),
            step(303, InputEvent::release(Signal::Charge)),
            step(320, InputEvent::fire()),
            step(600, InputEvent::quit()),
        ])
    }
}
