//! Input handling
//!
//! Physical bindings (keys, buttons) belong to the frontend. The engine only
//! sees semantic signals:
//! - `signals`: the input vocabulary (held signals, triggers, pointer gestures)
//! - `control`: the control state those signals drive

pub mod control;
pub mod signals;

pub use control::{AxisIntent, ControlState, Sign};
pub use signals::{InputEvent, Signal, Trigger};
