//! Input vocabulary

use serde::{Deserialize, Serialize};

/// Held signals; each stays active from press until release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Raise the barrel (counter-clockwise)
    AimUp,
    /// Lower the barrel (clockwise)
    AimDown,
    /// Build up launch speed
    Charge,
    /// Bleed off launch speed
    Discharge,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

/// Discrete one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Launch the ball (only honoured while no ball is in flight)
    Fire,
    /// End the session
    Quit,
}

/// One input event as delivered by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A held signal changed
    Signal { signal: Signal, pressed: bool },
    /// A one-shot command
    Trigger { trigger: Trigger },
    /// Primary pointer button: hold to charge, release to fire
    PrimaryButton { pressed: bool },
    /// Secondary pointer button: while held, horizontal scroll pans
    SecondaryButton { pressed: bool },
    /// Scroll wheel / trackpad delta
    Scroll { dx: f64, dy: f64 },
}

impl InputEvent {
    pub fn press(signal: Signal) -> Self {
        InputEvent::Signal {
            signal,
            pressed: true,
        }
    }

    pub fn release(signal: Signal) -> Self {
        InputEvent::Signal {
            signal,
            pressed: false,
        }
    }

    pub fn fire() -> Self {
        InputEvent::Trigger {
            trigger: Trigger::Fire,
        }
    }

    pub fn quit() -> Self {
        InputEvent::Trigger {
            trigger: Trigger::Quit,
        }
    }
}
