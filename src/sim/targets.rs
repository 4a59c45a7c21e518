//! Targets and scoring
//!
//! Three fixed targets, each with its own hit geometry. A hit retires the
//! target for the rest of the session; score is the number retired.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Circle};
use crate::consts::*;
use crate::point;

/// Hit geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetShape {
    Circle(Circle),
    /// Edges excluded
    Rect(Aabb),
}

impl TargetShape {
    pub fn contains(&self, p: DVec2) -> bool {
        match self {
            TargetShape::Circle(circle) => circle.contains(p),
            TargetShape::Rect(bounds) => bounds.contains_strict(p),
        }
    }
}

/// A single target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u8,
    pub shape: TargetShape,
    pub active: bool,
}

impl Target {
    pub fn new(id: u8, shape: TargetShape) -> Self {
        Self {
            id,
            shape,
            active: true,
        }
    }

    /// Retire the target if `p` is inside it. Returns true only on the
    /// active → inactive transition.
    pub fn try_hit(&mut self, p: DVec2) -> bool {
        if self.active && self.shape.contains(p) {
            self.active = false;
            return true;
        }
        false
    }
}

/// The three targets on the range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl TargetRegistry {
    /// Standard layout: ball on the stand, box by the wall, ball under the beam
    pub fn standard() -> Self {
        Self::with_shapes([
            TargetShape::Circle(Circle::new(point(TARGET_ONE_CENTER), TARGET_RADIUS)),
            TargetShape::Rect(Aabb::from_extents(TARGET_TWO_BOUNDS)),
            TargetShape::Circle(Circle::new(point(TARGET_THREE_CENTER), TARGET_RADIUS)),
        ])
    }

    /// Targets numbered 1..=N in the given order
    pub fn with_shapes(shapes: [TargetShape; TARGET_COUNT]) -> Self {
        let targets = shapes
            .into_iter()
            .enumerate()
            .map(|(i, shape)| Target::new(i as u8 + 1, shape))
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Hit-test every active target; returns the ids retired by this call
    pub fn register_hits(&mut self, p: DVec2) -> Vec<u8> {
        self.targets
            .iter_mut()
            .filter_map(|target| target.try_hit(p).then_some(target.id))
            .collect()
    }

    /// Active flag per target, in id order
    pub fn active_flags(&self) -> [bool; TARGET_COUNT] {
        let mut flags = [false; TARGET_COUNT];
        for (flag, target) in flags.iter_mut().zip(&self.targets) {
            *flag = target.active;
        }
        flags
    }

    /// Number of retired targets
    pub fn score(&self) -> u32 {
        self.targets.iter().filter(|t| !t.active).count() as u32
    }

    pub fn all_down(&self) -> bool {
        self.targets.iter().all(|t| !t.active)
    }
}
