//! Percentage loader shown while the page starts up

/// Result of one loader tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStep {
    /// Progress moved to the given percentage
    Advanced(u8),
    /// Progress just hit 100; the grace period starts now
    Reached,
    /// Already at 100
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loader {
    progress: u8,
    completed: bool,
}

impl Loader {
    pub const MAX: u8 = 100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Advance by exactly one percent
    pub fn tick(&mut self) -> LoaderStep {
        if self.progress >= Self::MAX {
            return LoaderStep::Done;
        }
        self.progress += 1;
        if self.progress == Self::MAX {
            LoaderStep::Reached
        } else {
            LoaderStep::Advanced(self.progress)
        }
    }

    /// Mark the loader complete once the grace period has passed.
    ///
    /// Returns true exactly once, and only after reaching 100.
    pub fn finish(&mut self) -> bool {
        if self.progress < Self::MAX || self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    /// Whether the overlay should still be shown
    pub fn is_loading(&self) -> bool {
        !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_by_one() {
        let mut loader = Loader::new();
        assert_eq!(loader.tick(), LoaderStep::Advanced(1));
        assert_eq!(loader.tick(), LoaderStep::Advanced(2));
        assert_eq!(loader.progress(), 2);
    }

    #[test]
    fn test_reaches_hundred_after_hundred_ticks() {
        let mut loader = Loader::new();
        for _ in 0..99 {
            assert!(matches!(loader.tick(), LoaderStep::Advanced(_)));
        }
        assert_eq!(loader.tick(), LoaderStep::Reached);
        assert_eq!(loader.tick(), LoaderStep::Done);
        assert_eq!(loader.progress(), 100);
    }

    #[test]
    fn test_finish_requires_full_progress() {
        let mut loader = Loader::new();
        loader.tick();
        assert!(!loader.finish());
        assert!(loader.is_loading());
    }

    #[test]
    fn test_finish_fires_once() {
        let mut loader = Loader::new();
        while loader.tick() != LoaderStep::Done {}
        assert!(loader.finish());
        assert!(!loader.finish());
        assert!(!loader.is_loading());
    }
}
