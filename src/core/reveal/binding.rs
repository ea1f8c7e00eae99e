//! Reveal bindings: what animates, when, and how
//!
//! A binding couples a [`TriggerWindow`] with an effect. In toggle mode
//! crossing the window's edges plays or reverses the effect; in scrub mode
//! the effect tracks scroll progress directly.

use std::str::FromStr;

use super::trigger::{TriggerParseError, TriggerWindow};
use super::tween::{ColorTween, Tween};

/// What a toggle does when its window edge is crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the tween towards its `to` pose
    Play,
    /// Run the tween back towards its `from` pose
    Reverse,
    NoOp,
}

impl FromStr for Action {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Action::Play),
            "reverse" => Ok(Action::Reverse),
            "none" => Ok(Action::NoOp),
            _ => Err(TriggerParseError::BadActions(s.to_string())),
        }
    }
}

/// Actions for the four edge crossings of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: Action,
    pub on_leave: Action,
    pub on_enter_back: Action,
    pub on_leave_back: Action,
}

impl ToggleActions {
    /// `"play none none none"`
    pub const PLAY_ONCE: Self = Self::new(Action::Play, Action::NoOp, Action::NoOp, Action::NoOp);
    /// `"play none none reverse"`
    pub const PLAY_REVERSE: Self =
        Self::new(Action::Play, Action::NoOp, Action::NoOp, Action::Reverse);
    /// `"play reverse play reverse"`
    pub const BOTH_WAYS: Self =
        Self::new(Action::Play, Action::Reverse, Action::Play, Action::Reverse);

    pub const fn new(
        on_enter: Action,
        on_leave: Action,
        on_enter_back: Action,
        on_leave_back: Action,
    ) -> Self {
        Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl FromStr for ToggleActions {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Action>, _>>()?;
        match actions.as_slice() {
            [enter, leave, enter_back, leave_back] => {
                Ok(Self::new(*enter, *leave, *enter_back, *leave_back))
            }
            _ => Err(TriggerParseError::BadActions(s.to_string())),
        }
    }
}

/// Where the scroll position sits relative to a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Before,
    Inside,
    After,
}

impl Region {
    pub fn of(raw_progress: f64) -> Self {
        if raw_progress <= 0.0 {
            Region::Before
        } else if raw_progress >= 1.0 {
            Region::After
        } else {
            Region::Inside
        }
    }
}

/// Edge-crossing state of a toggle binding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    region: Option<Region>,
}

impl ToggleState {
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Move to the region for `raw_progress` and return the action to run.
    ///
    /// Jumping over the whole window in one step fires the far edge's
    /// action, falling back to the near edge's when the far one is a no-op.
    /// The first observation counts as coming from before the window.
    pub fn advance(&mut self, raw_progress: f64, actions: &ToggleActions) -> Action {
        let next = Region::of(raw_progress);
        let previous = self.region.replace(next).unwrap_or(Region::Before);

        let resolve = |near: Action, far: Action| match far {
            Action::NoOp => near,
            other => other,
        };

        match (previous, next) {
            (Region::Before, Region::Inside) => actions.on_enter,
            (Region::Before, Region::After) => resolve(actions.on_enter, actions.on_leave),
            (Region::Inside, Region::After) => actions.on_leave,
            (Region::After, Region::Inside) => actions.on_enter_back,
            (Region::After, Region::Before) => resolve(actions.on_enter_back, actions.on_leave_back),
            (Region::Inside, Region::Before) => actions.on_leave_back,
            _ => Action::NoOp,
        }
    }
}

/// How a binding responds to its window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Toggle(ToggleActions),
    Scrub,
}

/// What a binding animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Tween(Tween),
    /// Background colour of the element
    Backdrop(ColorTween),
}

/// Which nodes receive the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Targets {
    /// The bound element itself
    #[default]
    Element,
    /// Every split glyph inside the bound element, staggered in order
    Glyphs,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub window: TriggerWindow,
    pub mode: Mode,
    pub effect: Effect,
    pub targets: Targets,
}

impl Binding {
    pub const fn toggle(window: TriggerWindow, actions: ToggleActions, tween: Tween) -> Self {
        Self {
            window,
            mode: Mode::Toggle(actions),
            effect: Effect::Tween(tween),
            targets: Targets::Element,
        }
    }

    pub const fn scrub(window: TriggerWindow, tween: Tween) -> Self {
        Self {
            window,
            mode: Mode::Scrub,
            effect: Effect::Tween(tween),
            targets: Targets::Element,
        }
    }

    pub const fn backdrop(window: TriggerWindow, fade: ColorTween) -> Self {
        Self {
            window,
            mode: Mode::Scrub,
            effect: Effect::Backdrop(fade),
            targets: Targets::Element,
        }
    }

    /// Apply the effect to split glyphs instead of the element
    pub const fn on_glyphs(mut self) -> Self {
        self.targets = Targets::Glyphs;
        self
    }

    pub fn is_scrub(&self) -> bool {
        matches!(self.mode, Mode::Scrub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_actions() {
        let actions: ToggleActions = "play none none reverse".parse().unwrap();
        assert_eq!(actions, ToggleActions::PLAY_REVERSE);
        let both: ToggleActions = "play reverse play reverse".parse().unwrap();
        assert_eq!(both, ToggleActions::BOTH_WAYS);
    }

    #[test]
    fn test_parse_toggle_actions_rejects_bad_input() {
        assert!("play none".parse::<ToggleActions>().is_err());
        assert!("play stop none none".parse::<ToggleActions>().is_err());
    }

    #[test]
    fn test_region_boundaries() {
        assert_eq!(Region::of(-0.5), Region::Before);
        assert_eq!(Region::of(0.0), Region::Before);
        assert_eq!(Region::of(0.5), Region::Inside);
        assert_eq!(Region::of(1.0), Region::After);
    }

    #[test]
    fn test_play_reverse_cycle() {
        let actions = ToggleActions::PLAY_REVERSE;
        let mut state = ToggleState::default();

        assert_eq!(state.advance(-1.0, &actions), Action::NoOp);
        assert_eq!(state.advance(0.5, &actions), Action::Play);
        assert_eq!(state.advance(1.5, &actions), Action::NoOp);
        assert_eq!(state.advance(0.5, &actions), Action::NoOp);
        assert_eq!(state.advance(-0.5, &actions), Action::Reverse);
    }

    #[test]
    fn test_first_observation_past_window_plays() {
        let mut state = ToggleState::default();
        assert_eq!(
            state.advance(3.0, &ToggleActions::PLAY_ONCE),
            Action::Play
        );
        assert_eq!(state.region(), Some(Region::After));
    }

    #[test]
    fn test_jump_over_window_uses_far_edge() {
        let actions = ToggleActions::BOTH_WAYS;
        let mut state = ToggleState::default();
        state.advance(-1.0, &actions);
        assert_eq!(state.advance(2.0, &actions), Action::Reverse);
        assert_eq!(state.advance(-2.0, &actions), Action::Reverse);
    }

    #[test]
    fn test_same_region_is_noop() {
        let mut state = ToggleState::default();
        state.advance(0.3, &ToggleActions::BOTH_WAYS);
        assert_eq!(
            state.advance(0.6, &ToggleActions::BOTH_WAYS),
            Action::NoOp
        );
    }
}
