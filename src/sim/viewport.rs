//! Viewport controller
//!
//! The visible orthographic rectangle. Zoom moves all four edges toward or
//! away from the centre; pan slides left/right together.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::Sign;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            left: VIEW_LEFT,
            right: VIEW_RIGHT,
            bottom: VIEW_BOTTOM,
            top: VIEW_TOP,
        }
    }
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// One zoom step; positive zooms in. Zooming in stops at the minimum extent.
    pub fn zoom(&mut self, direction: Sign) {
        let step = match direction {
            Sign::Positive => {
                let min_span = self.width().min(self.height());
                if min_span - 2.0 * VIEW_STEP < VIEW_MIN_EXTENT {
                    return;
                }
                VIEW_STEP
            }
            Sign::Negative => -VIEW_STEP,
        };

        self.left += step;
        self.right -= step;
        self.bottom += step;
        self.top -= step;
    }

    /// One pan step; positive moves the view right
    pub fn pan(&mut self, direction: Sign) {
        let delta = direction.factor() * VIEW_STEP;
        self.left += delta;
        self.right += delta;
    }

    /// Apply this tick's intents. A scroll nudge adds a zoom step unless it
    /// duplicates the held zoom direction.
    pub fn update(&mut self, zoom: Option<Sign>, nudge: Option<Sign>, pan: Option<Sign>) {
        if let Some(direction) = zoom {
            self.zoom(direction);
        }
        if let Some(direction) = nudge {
            if zoom != Some(direction) {
                self.zoom(direction);
            }
        }
        if let Some(direction) = pan {
            self.pan(direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_and_out_symmetric() {
        let mut view = Viewport::default();
        view.zoom(Sign::Positive);
        assert!((view.left - -15.9).abs() < 1e-9);
        assert!((view.right - 15.9).abs() < 1e-9);
        assert!((view.bottom - -7.9).abs() < 1e-9);
        assert!((view.top - 7.9).abs() < 1e-9);

        view.zoom(Sign::Negative);
        assert!((view.left - VIEW_LEFT).abs() < 1e-9);
        assert!((view.top - VIEW_TOP).abs() < 1e-9);
    }

    #[test]
    fn test_pan_keeps_width() {
        let mut view = Viewport::default();
        let width = view.width();
        view.pan(Sign::Negative);
        view.pan(Sign::Negative);
        assert!((view.left - -16.2).abs() < 1e-9);
        assert!((view.width() - width).abs() < 1e-9);
        assert_eq!(view.bottom, VIEW_BOTTOM);
    }

    #[test]
    fn test_zoom_in_never_inverts() {
        let mut view = Viewport::default();
        for _ in 0..1000 {
            view.zoom(Sign::Positive);
        }
        assert!(view.right > view.left);
        assert!(view.top > view.bottom);
        assert!(view.height() >= VIEW_MIN_EXTENT);
    }

    #[test]
    fn test_zoom_and_pan_same_tick() {
        let mut view = Viewport::default();
        view.update(Some(Sign::Positive), None, Some(Sign::Positive));
        assert!((view.left - -15.8).abs() < 1e-9);
        assert!((view.right - 16.0).abs() < 1e-9);
        assert!((view.top - 7.9).abs() < 1e-9);
    }

    #[test]
    fn test_nudge_does_not_double_held_zoom() {
        let mut held = Viewport::default();
        held.update(Some(Sign::Positive), Some(Sign::Positive), None);
        let mut single = Viewport::default();
        single.zoom(Sign::Positive);
        assert_eq!(held, single);

        let mut nudged = Viewport::default();
        nudged.update(None, Some(Sign::Negative), None);
        assert!((nudged.left - -16.1).abs() < 1e-9);
    }
}
