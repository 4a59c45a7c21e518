//! Control state
//!
//! Every pair of opposing signals is one axis. Flags persist until their
//! release event; when both directions are held, the most recent press wins.

use serde::{Deserialize, Serialize};

use super::signals::{InputEvent, Signal, Trigger};

/// Direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn opposite(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    /// -1.0 or +1.0
    pub fn factor(self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }
}

/// Held state of two opposing signals plus which one was pressed last
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisIntent {
    negative: bool,
    positive: bool,
    latest: Option<Sign>,
}

impl AxisIntent {
    fn held(&self, sign: Sign) -> bool {
        match sign {
            Sign::Negative => self.negative,
            Sign::Positive => self.positive,
        }
    }

    /// Record a press or release of one direction
    pub fn set(&mut self, sign: Sign, pressed: bool) {
        match sign {
            Sign::Negative => self.negative = pressed,
            Sign::Positive => self.positive = pressed,
        }

        if pressed {
            self.latest = Some(sign);
        } else if self.latest == Some(sign) {
            let other = sign.opposite();
            self.latest = self.held(other).then_some(other);
        }
    }

    /// The direction currently in effect, if any
    pub fn resolve(&self) -> Option<Sign> {
        match (self.negative, self.positive) {
            (true, true) => self.latest,
            (true, false) => Some(Sign::Negative),
            (false, true) => Some(Sign::Positive),
            (false, false) => None,
        }
    }
}

/// Current player intents, fed by input events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Positive raises the barrel
    pub aim: AxisIntent,
    /// Positive charges, negative discharges
    pub power: AxisIntent,
    /// Positive pans right
    pub pan: AxisIntent,
    /// Positive zooms in
    pub zoom: AxisIntent,
    /// Secondary pointer button held (scroll pans instead of zooming only)
    pub secondary_held: bool,
    /// Pan set by horizontal scroll; lasts until the secondary button is released
    scroll_pan: Option<Sign>,
    /// One-tick zoom nudge from a scroll notch, taken by the viewport
    zoom_nudge: Option<Sign>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a held-signal change
    pub fn apply_signal(&mut self, signal: Signal, pressed: bool) {
        let (axis, sign) = match signal {
            Signal::AimUp => (&mut self.aim, Sign::Positive),
            Signal::AimDown => (&mut self.aim, Sign::Negative),
            Signal::Charge => (&mut self.power, Sign::Positive),
            Signal::Discharge => (&mut self.power, Sign::Negative),
            Signal::PanRight => (&mut self.pan, Sign::Positive),
            Signal::PanLeft => (&mut self.pan, Sign::Negative),
            Signal::ZoomIn => (&mut self.zoom, Sign::Positive),
            Signal::ZoomOut => (&mut self.zoom, Sign::Negative),
        };
        axis.set(sign, pressed);
    }

    /// Apply one input event. Triggers are handed back to the caller.
    pub fn apply(&mut self, event: &InputEvent) -> Option<Trigger> {
        match *event {
            InputEvent::Signal { signal, pressed } => {
                self.apply_signal(signal, pressed);
                None
            }
            InputEvent::Trigger { trigger } => Some(trigger),
            InputEvent::PrimaryButton { pressed } => {
                self.apply_signal(Signal::Charge, pressed);
                (!pressed).then_some(Trigger::Fire)
            }
            InputEvent::SecondaryButton { pressed } => {
                self.secondary_held = pressed;
                if !pressed {
                    self.scroll_pan = None;
                }
                None
            }
            InputEvent::Scroll { dx, dy } => {
                if dy > 0.0 {
                    self.zoom_nudge = Some(Sign::Positive);
                } else if dy < 0.0 {
                    self.zoom_nudge = Some(Sign::Negative);
                }

                if self.secondary_held {
                    if dx > 0.0 {
                        self.scroll_pan = Some(Sign::Positive);
                    } else if dx < 0.0 {
                        self.scroll_pan = Some(Sign::Negative);
                    }
                }
                None
            }
        }
    }

    pub fn aim_direction(&self) -> Option<Sign> {
        self.aim.resolve()
    }

    pub fn power_direction(&self) -> Option<Sign> {
        self.power.resolve()
    }

    /// Held pan keys take precedence over a scroll-driven pan
    pub fn pan_direction(&self) -> Option<Sign> {
        self.pan.resolve().or(self.scroll_pan)
    }

    pub fn zoom_direction(&self) -> Option<Sign> {
        self.zoom.resolve()
    }

    /// Take the pending scroll nudge (cleared once read)
    pub fn take_zoom_nudge(&mut self) -> Option<Sign> {
        self.zoom_nudge.take()
    }
}
