//! Scroll-triggered reveal model
//!
//! Everything here is plain data and arithmetic; the browser side lives in
//! `ui::motion`.

pub mod binding;
pub mod dispatcher;
pub mod trigger;
pub mod tween;

pub use binding::{Action, Binding, Effect, Mode, Region, Targets, ToggleActions, ToggleState};
pub use dispatcher::{BindingId, ScrollDispatcher, Update};
pub use trigger::{
    Anchor, Axis, Keyword, Position, Rect, TriggerParseError, TriggerPoint, TriggerWindow,
    Viewport,
};
pub use tween::{ColorTween, Easing, Pose, Rgb, Tween, css_number, stagger_progress};
