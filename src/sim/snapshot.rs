//! Renderable snapshot
//!
//! Everything the renderer needs for one frame, copied out of the session.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::viewport::Viewport;
use crate::consts::TARGET_COUNT;

/// Ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// False while the cannon is loaded (nothing to draw)
    pub flying: bool,
    pub position: DVec2,
}

/// Per-frame view of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub cannon_angle: f64,
    pub launch_speed: f64,
    pub charge_level: f64,
    pub viewport: Viewport,
    pub projectile: ProjectileView,
    /// Active flag per target, in id order
    pub targets: [bool; TARGET_COUNT],
    pub score: u32,
    pub over: bool,
    pub quit: bool,
}

impl RenderSnapshot {
    /// Single-line JSON for trace logging
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
