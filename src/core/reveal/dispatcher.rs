//! Scroll dispatcher
//!
//! Keeps every live binding with its target and, on each scroll frame,
//! works out which bindings need their effect re-applied. The dispatcher
//! knows nothing about the DOM: measuring and applying are callbacks, so
//! the same code runs in the browser and in tests.

use super::binding::{Action, Binding, Mode, ToggleState};
use super::trigger::{Rect, Viewport};

/// Handle returned by [`ScrollDispatcher::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Work produced for a binding by one dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    /// Scrub progress in [0, 1]
    Scrub(f64),
    /// Toggle action to play
    Toggle(Action),
}

struct Entry<T> {
    id: BindingId,
    binding: Binding,
    target: T,
    toggle: ToggleState,
    last_progress: Option<f64>,
}

pub struct ScrollDispatcher<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for ScrollDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScrollDispatcher<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, binding: Binding, target: T) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            binding,
            target,
            toggle: ToggleState::default(),
            last_progress: None,
        });
        id
    }

    /// Drop a binding; returns its target if it was still registered
    pub fn release(&mut self, id: BindingId) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).target)
    }

    /// Forget cached scrub progress so the next dispatch re-applies every
    /// scrub binding. Called after the layout changes.
    pub fn invalidate(&mut self) {
        for entry in &mut self.entries {
            entry.last_progress = None;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn target(&self, id: BindingId) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.target)
    }

    /// Run one frame.
    ///
    /// `measure` returns the target's rectangle, or `None` once the target
    /// has left the document; such bindings are cancelled. `apply` is called
    /// for every binding whose state changed. Returns the number of bindings
    /// cancelled.
    pub fn dispatch<M, A>(&mut self, viewport: &Viewport, mut measure: M, mut apply: A) -> usize
    where
        M: FnMut(&T) -> Option<Rect>,
        A: FnMut(&T, &Binding, Update),
    {
        let before = self.entries.len();

        self.entries.retain_mut(|entry| {
            let Some(rect) = measure(&entry.target) else {
                return false;
            };
            let raw = entry.binding.window.raw_progress(&rect, viewport);

            match entry.binding.mode {
                Mode::Scrub => {
                    let progress = raw.clamp(0.0, 1.0);
                    if entry.last_progress != Some(progress) {
                        entry.last_progress = Some(progress);
                        apply(&entry.target, &entry.binding, Update::Scrub(progress));
                    }
                }
                Mode::Toggle(actions) => {
                    let action = entry.toggle.advance(raw, &actions);
                    if action != Action::NoOp {
                        apply(&entry.target, &entry.binding, Update::Toggle(action));
                    }
                }
            }
            true
        });

        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reveal::binding::ToggleActions;
    use crate::core::reveal::trigger::{TriggerPoint, TriggerWindow};
    use crate::core::reveal::tween::{Pose, Tween};

    fn window() -> TriggerWindow {
        TriggerWindow::new(TriggerPoint::TOP_80, TriggerPoint::TOP_50)
    }

    fn fade() -> Tween {
        Tween::enter(Pose::IDENTITY.with_opacity(0.0))
    }

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 1000.0)
    }

    fn at(top: f64) -> Option<Rect> {
        Some(Rect::new(0.0, top, 100.0, 100.0))
    }

    #[test]
    fn test_scrub_applies_only_on_change() {
        let mut dispatcher = ScrollDispatcher::new();
        dispatcher.register(Binding::scrub(window(), fade()), "a");

        let mut seen = Vec::new();
        dispatcher.dispatch(&viewport(), |_| at(650.0), |_, _, u| seen.push(u));
        dispatcher.dispatch(&viewport(), |_| at(650.0), |_, _, u| seen.push(u));
        assert_eq!(seen, vec![Update::Scrub(0.5)]);

        dispatcher.invalidate();
        dispatcher.dispatch(&viewport(), |_| at(650.0), |_, _, u| seen.push(u));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_scrub_clamps_outside_window() {
        let mut dispatcher = ScrollDispatcher::new();
        dispatcher.register(Binding::scrub(window(), fade()), ());

        let mut seen = Vec::new();
        dispatcher.dispatch(&viewport(), |_| at(2000.0), |_, _, u| seen.push(u));
        dispatcher.dispatch(&viewport(), |_| at(-500.0), |_, _, u| seen.push(u));
        assert_eq!(seen, vec![Update::Scrub(0.0), Update::Scrub(1.0)]);
    }

    #[test]
    fn test_toggle_reports_actions() {
        let mut dispatcher = ScrollDispatcher::new();
        let binding = Binding::toggle(window(), ToggleActions::PLAY_REVERSE, fade());
        dispatcher.register(binding, ());

        let mut seen = Vec::new();
        for top in [900.0, 700.0, 300.0, 900.0] {
            dispatcher.dispatch(&viewport(), |_| at(top), |_, _, u| seen.push(u));
        }
        assert_eq!(
            seen,
            vec![
                Update::Toggle(Action::Play),
                Update::Toggle(Action::Reverse)
            ]
        );
    }

    #[test]
    fn test_detached_targets_are_cancelled() {
        let mut dispatcher = ScrollDispatcher::new();
        dispatcher.register(Binding::scrub(window(), fade()), 1);
        dispatcher.register(Binding::scrub(window(), fade()), 2);

        let cancelled = dispatcher.dispatch(
            &viewport(),
            |target| if *target == 1 { None } else { at(650.0) },
            |_, _, _| {},
        );
        assert_eq!(cancelled, 1);
        assert_eq!(dispatcher.len(), 1);
    }

    #[test]
    fn test_release_returns_target() {
        let mut dispatcher = ScrollDispatcher::new();
        let first = dispatcher.register(Binding::scrub(window(), fade()), "first");
        let second = dispatcher.register(Binding::scrub(window(), fade()), "second");
        assert_ne!(first, second);

        assert_eq!(dispatcher.release(first), Some("first"));
        assert_eq!(dispatcher.release(first), None);
        assert_eq!(dispatcher.target(second), Some(&"second"));
        assert!(!dispatcher.is_empty());
    }
}
