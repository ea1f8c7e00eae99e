//! Pointer smoothing and idle detection for the custom cursor
//!
//! [`Follower`] eases the cursor outline towards the real pointer once per
//! animation frame. [`IdleTracker`] tracks time since the last input and
//! moves through idle stages so the cursor can show particles and hints.
//! Times are milliseconds from any monotonic clock.

use std::fmt;

use crate::core::config::CursorTuning;

/// Distance under which the follower snaps onto its target
const SNAP_DISTANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Exponentially smoothed position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    position: Point,
    target: Point,
    gain: f64,
}

impl Follower {
    pub fn new(gain: f64) -> Self {
        Self {
            position: Point::default(),
            target: Point::default(),
            gain: gain.clamp(f64::EPSILON, 1.0),
        }
    }

    /// Place both position and target, skipping the easing
    pub fn jump_to(&mut self, point: Point) {
        self.position = point;
        self.target = point;
    }

    pub fn set_target(&mut self, point: Point) {
        self.target = point;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Advance one frame and return the new position
    pub fn step(&mut self) -> Point {
        self.position.x += (self.target.x - self.position.x) * self.gain;
        self.position.y += (self.target.y - self.position.y) * self.gain;

        if self.distance() < SNAP_DISTANCE {
            self.position = self.target;
        }
        self.position
    }

    /// Remaining distance to the target
    pub fn distance(&self) -> f64 {
        self.position.distance(&self.target)
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target
    }
}

/// How long the pointer has been left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdleStage {
    Active,
    Idle,
    /// Hint tier, starting at 1
    Hint(u8),
}

impl IdleStage {
    pub fn is_idle(&self) -> bool {
        !matches!(self, IdleStage::Active)
    }

    /// Hint tier index into the hint messages, if any
    pub fn hint(&self) -> Option<usize> {
        match self {
            IdleStage::Hint(tier) => tier.checked_sub(1).map(usize::from),
            _ => None,
        }
    }
}

impl fmt::Display for IdleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdleStage::Active => write!(f, "active"),
            IdleStage::Idle => write!(f, "idle"),
            IdleStage::Hint(tier) => write!(f, "hint-{tier}"),
        }
    }
}

/// Idle stage machine driven by input timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct IdleTracker {
    last_input_ms: f64,
    idle_after_ms: f64,
    hint_after_ms: Vec<f64>,
    stage: IdleStage,
}

impl IdleTracker {
    pub fn new(tuning: &CursorTuning, now_ms: f64) -> Self {
        Self {
            last_input_ms: now_ms,
            idle_after_ms: tuning.idle_after_ms as f64,
            hint_after_ms: tuning.hint_after_ms.iter().map(|ms| *ms as f64).collect(),
            stage: IdleStage::Active,
        }
    }

    /// Any pointer, key or scroll input; cancels every pending stage.
    ///
    /// Returns true if the tracker was idle and is now active again.
    pub fn record_input(&mut self, now_ms: f64) -> bool {
        self.last_input_ms = now_ms;
        let was_idle = self.stage.is_idle();
        self.stage = IdleStage::Active;
        was_idle
    }

    /// Stage that applies at `now_ms`, without changing state
    pub fn stage_at(&self, now_ms: f64) -> IdleStage {
        let elapsed = now_ms - self.last_input_ms;
        let reached = self
            .hint_after_ms
            .iter()
            .take_while(|threshold| elapsed >= **threshold)
            .count();

        if reached > 0 {
            IdleStage::Hint(reached.min(u8::MAX as usize) as u8)
        } else if elapsed >= self.idle_after_ms {
            IdleStage::Idle
        } else {
            IdleStage::Active
        }
    }

    /// Update to the stage for `now_ms`; returns true if it changed
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let next = self.stage_at(now_ms);
        if next != self.stage {
            self.stage = next;
            return true;
        }
        false
    }

    pub fn stage(&self) -> IdleStage {
        self.stage
    }

    /// Absolute time of the next stage change, if one is still ahead
    pub fn next_deadline(&self) -> Option<f64> {
        std::iter::once(self.idle_after_ms)
            .chain(self.hint_after_ms.iter().copied())
            .map(|threshold| self.last_input_ms + threshold)
            .find(|deadline| self.stage_at(*deadline) > self.stage)
    }
}

/// Offsets of `count` particles evenly spaced on a circle of `radius`,
/// rotated by `phase_deg`
pub fn particle_ring(count: usize, radius: f64, phase_deg: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let step = std::f64::consts::TAU / count as f64;
    let phase = phase_deg.to_radians();
    (0..count)
        .map(|i| {
            let angle = phase + step * i as f64;
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_moves_by_gain() {
        let mut follower = Follower::new(0.15);
        follower.set_target(Point::new(100.0, 0.0));
        let p = follower.step();
        assert!((p.x - 15.0).abs() < 1e-9);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_follower_converges_monotonically_and_snaps() {
        let mut follower = Follower::new(0.15);
        follower.set_target(Point::new(300.0, -120.0));
        let mut last = follower.distance();
        for _ in 0..200 {
            follower.step();
            let d = follower.distance();
            assert!(d <= last);
            last = d;
        }
        assert!(follower.is_settled());
        assert_eq!(follower.position(), Point::new(300.0, -120.0));
    }

    #[test]
    fn test_jump_to_skips_easing() {
        let mut follower = Follower::new(0.15);
        follower.jump_to(Point::new(5.0, 5.0));
        assert!(follower.is_settled());
    }

    #[test]
    fn test_idle_stages_progress() {
        let tracker = IdleTracker::new(&CursorTuning::default(), 0.0);
        assert_eq!(tracker.stage_at(1999.0), IdleStage::Active);
        assert_eq!(tracker.stage_at(2000.0), IdleStage::Idle);
        assert_eq!(tracker.stage_at(20_000.0), IdleStage::Hint(1));
        assert_eq!(tracker.stage_at(40_000.0), IdleStage::Hint(2));
        assert_eq!(tracker.stage_at(60_000.0), IdleStage::Hint(3));
        assert_eq!(tracker.stage_at(600_000.0), IdleStage::Hint(3));
    }

    #[test]
    fn test_input_resets_stage() {
        let mut tracker = IdleTracker::new(&CursorTuning::default(), 0.0);
        assert!(tracker.poll(25_000.0));
        assert_eq!(tracker.stage(), IdleStage::Hint(1));

        assert!(tracker.record_input(25_000.0));
        assert_eq!(tracker.stage(), IdleStage::Active);
        assert!(!tracker.poll(26_000.0));
        assert_eq!(tracker.next_deadline(), Some(27_000.0));
    }

    #[test]
    fn test_input_reports_reset_from_any_idle_stage() {
        let mut tracker = IdleTracker::new(&CursorTuning::default(), 0.0);
        assert!(!tracker.record_input(1_000.0));

        assert!(tracker.poll(3_000.0));
        assert_eq!(tracker.stage(), IdleStage::Idle);
        assert!(tracker.record_input(3_100.0));
        assert_eq!(tracker.stage(), IdleStage::Active);

        assert!(tracker.poll(60_000.0));
        assert!(matches!(tracker.stage(), IdleStage::Hint(_)));
        assert!(tracker.record_input(60_100.0));
        assert_eq!(tracker.stage(), IdleStage::Active);
        assert!(!tracker.record_input(60_200.0));
    }

    #[test]
    fn test_next_deadline_walks_thresholds() {
        let mut tracker = IdleTracker::new(&CursorTuning::default(), 1000.0);
        assert_eq!(tracker.next_deadline(), Some(3000.0));
        tracker.poll(3000.0);
        assert_eq!(tracker.next_deadline(), Some(21_000.0));
        tracker.poll(61_000.0);
        assert_eq!(tracker.next_deadline(), None);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(IdleStage::Active.to_string(), "active");
        assert_eq!(IdleStage::Hint(2).to_string(), "hint-2");
        assert_eq!(IdleStage::Hint(2).hint(), Some(1));
        assert_eq!(IdleStage::Idle.hint(), None);
        assert_eq!(IdleStage::Hint(0).hint(), None);
    }

    #[test]
    fn test_particle_ring() {
        let ring = particle_ring(4, 10.0, 0.0);
        assert_eq!(ring.len(), 4);
        assert!((ring[0].x - 10.0).abs() < 1e-9);
        assert!((ring[1].y - 10.0).abs() < 1e-9);
        for p in &ring {
            assert!((p.distance(&Point::default()) - 10.0).abs() < 1e-9);
        }
        assert!(particle_ring(0, 10.0, 0.0).is_empty());
    }
}
