//! Typewriter role cycle
//!
//! Types a role out one character at a time, holds it, deletes it, then
//! moves on to the next role. The state machine only counts characters;
//! the UI owns the timer and calls [`Typewriter::tick`] each time it fires.

use std::time::Duration;

use crate::core::config::TypewriterTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(roles: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            timing,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    fn current(&self) -> &str {
        self.roles.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Text currently on screen: a prefix of the current role
    pub fn display(&self) -> &str {
        let role = self.current();
        match role.char_indices().nth(self.visible) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    /// Delay before the first tick
    pub fn initial_delay(&self) -> Duration {
        self.timing.type_delay()
    }

    /// Apply one timer firing; returns the delay until the next one.
    ///
    /// The hold starts on the tick that completes the role and the next
    /// role starts on the tick after the text empties, with no extra idle
    /// tick on either side. A full cycle is therefore a type or delete
    /// delay shorter at each turn than a loop that waits one tick before
    /// deciding to hold or advance.
    pub fn tick(&mut self) -> Duration {
        if self.roles.is_empty() {
            return self.timing.hold_delay();
        }

        match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(self.current_len());
                if self.visible == self.current_len() {
                    self.phase = Phase::Deleting;
                    self.timing.hold_delay()
                } else {
                    self.timing.type_delay()
                }
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    self.timing.type_delay()
                } else {
                    self.timing.delete_delay()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_types_then_holds() {
        let mut tw = Typewriter::new(["QA"], TypewriterTiming::default());
        assert_eq!(tw.display(), "");
        assert_eq!(tw.tick(), ms(100));
        assert_eq!(tw.display(), "Q");
        assert_eq!(tw.tick(), ms(2000));
        assert_eq!(tw.display(), "QA");
        assert_eq!(tw.phase(), Phase::Deleting);
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = Typewriter::new(["ab", "c"], TypewriterTiming::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.tick(), ms(50));
        assert_eq!(tw.display(), "a");
        assert_eq!(tw.tick(), ms(100));
        assert_eq!(tw.display(), "");
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_roles_stay_blank() {
        let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default());
        for _ in 0..5 {
            tw.tick();
            assert_eq!(tw.display(), "");
        }
    }

    #[test]
    fn test_prefix_is_char_based() {
        let mut tw = Typewriter::new(["Qé✓"], TypewriterTiming::default());
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "Qé");
        tw.tick();
        assert_eq!(tw.display(), "Qé✓");
    }

    #[test]
    fn test_custom_timing() {
        let timing = TypewriterTiming {
            type_ms: 10,
            delete_ms: 5,
            hold_ms: 40,
        };
        let mut tw = Typewriter::new(["x"], timing);
        assert_eq!(tw.initial_delay(), ms(10));
        assert_eq!(tw.tick(), ms(40));
    }
}
