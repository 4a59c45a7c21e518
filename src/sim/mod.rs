//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Aiming, charging and viewport steps are fixed per tick
//! - Ball positions are closed-form functions of wall-clock time
//! - One `tick` per frame advances everything exactly once

pub mod cannon;
pub mod collision;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod targets;
pub mod tick;
pub mod trajectory;
pub mod viewport;

pub use cannon::{Cannon, PowerState};
pub use collision::{Aabb, Circle, Obstacle, obstacles};
pub use projectile::{Flight, FlightEnd, FlightEvent, FlightPhase, LaunchSnapshot, Projectile, ProjectileState};
pub use snapshot::{ProjectileView, RenderSnapshot};
pub use state::{GameEvent, GameSession};
pub use targets::{Target, TargetRegistry, TargetShape};
pub use tick::{TickInput, TickOutput, tick};
pub use trajectory::{Ballistic, Roll, launch_position};
pub use viewport::Viewport;
