//! Pinned horizontal carousel geometry
//!
//! While the carousel is pinned, vertical scrolling drives a horizontal
//! translation of the card track. `scrolled` below is always the vertical
//! distance scrolled past the top of the carousel wrapper.

/// Where the page is relative to the pinned stretch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Before,
    Pinned,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    card_count: usize,
    card_width: f64,
    gap: f64,
    viewport_width: f64,
    scroll_multiplier: f64,
}

impl Carousel {
    pub fn new(
        card_count: usize,
        card_width: f64,
        gap: f64,
        viewport_width: f64,
        scroll_multiplier: f64,
    ) -> Self {
        Self {
            card_count,
            card_width: card_width.max(0.0),
            gap: gap.max(0.0),
            viewport_width: viewport_width.max(0.0),
            scroll_multiplier: scroll_multiplier.max(0.0),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Rebuild the geometry after the viewport or card size changed
    pub fn resize(&mut self, viewport_width: f64, card_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.card_width = card_width.max(0.0);
    }

    fn step(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn track_width(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        let n = self.card_count as f64;
        n * self.card_width + (n - 1.0) * self.gap
    }

    /// Furthest the track moves left
    pub fn max_translate(&self) -> f64 {
        (self.track_width() - self.viewport_width).max(0.0)
    }

    /// Vertical scroll spent while pinned; zero when nothing overflows
    pub fn scroll_distance(&self) -> f64 {
        if self.max_translate() <= 0.0 {
            return 0.0;
        }
        let steps = self.card_count.saturating_sub(1).max(1) as f64;
        self.scroll_multiplier * steps * self.viewport_width
    }

    pub fn progress(&self, scrolled: f64) -> f64 {
        let distance = self.scroll_distance();
        if distance <= 0.0 {
            return 0.0;
        }
        (scrolled / distance).clamp(0.0, 1.0)
    }

    /// Horizontal translation of the track, in `[-max_translate, 0]`
    pub fn translate_for(&self, scrolled: f64) -> f64 {
        let translate = -self.progress(scrolled) * self.max_translate();
        // keep 0 rather than -0 for CSS output
        if translate == 0.0 { 0.0 } else { translate }
    }

    pub fn pin_state(&self, scrolled: f64) -> PinState {
        if scrolled < 0.0 {
            PinState::Before
        } else if scrolled > self.scroll_distance() {
            PinState::Released
        } else {
            PinState::Pinned
        }
    }

    /// Offsets (positive, leftward) at which a card lines up with the
    /// viewport's left edge, ending with the fully scrolled position
    pub fn card_boundaries(&self) -> Vec<f64> {
        let max = self.max_translate();
        let mut boundaries: Vec<f64> = Vec::with_capacity(self.card_count);
        for i in 0..self.card_count {
            let offset = (i as f64 * self.step()).min(max);
            if boundaries.last().is_none_or(|last| (offset - last).abs() > f64::EPSILON) {
                boundaries.push(offset);
            }
        }
        if boundaries.last().is_some_and(|last| *last < max) {
            boundaries.push(max);
        }
        boundaries
    }

    /// Boundary nearest to a leftward offset
    pub fn snap_translate(&self, offset: f64) -> f64 {
        self.card_boundaries()
            .into_iter()
            .min_by(|a, b| (a - offset).abs().total_cmp(&(b - offset).abs()))
            .unwrap_or(0.0)
    }

    /// Scroll position that lands the track on the nearest card boundary.
    ///
    /// Returns `scrolled` unchanged outside the pinned stretch.
    pub fn snap_offset(&self, scrolled: f64) -> f64 {
        let max = self.max_translate();
        if max <= 0.0 || self.pin_state(scrolled) != PinState::Pinned {
            return scrolled;
        }
        let offset = self.progress(scrolled) * max;
        self.snap_translate(offset) / max * self.scroll_distance()
    }

    /// Index of the card nearest the viewport's left edge
    pub fn active_card(&self, scrolled: f64) -> usize {
        if self.card_count == 0 || self.step() <= 0.0 {
            return 0;
        }
        let offset = -self.translate_for(scrolled);
        ((offset / self.step()).round() as usize).min(self.card_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // three 800px cards in a 1000px viewport
    fn carousel() -> Carousel {
        Carousel::new(3, 800.0, 0.0, 1000.0, 3.0)
    }

    #[test]
    fn test_track_geometry() {
        let c = Carousel::new(3, 800.0, 20.0, 1000.0, 3.0);
        assert_eq!(c.track_width(), 2440.0);
        assert_eq!(c.max_translate(), 1440.0);
        assert_eq!(c.scroll_distance(), 6000.0);
    }

    #[test]
    fn test_translate_is_linear_and_clamped() {
        let c = carousel();
        assert_eq!(c.translate_for(-100.0), 0.0);
        assert_eq!(c.translate_for(0.0), 0.0);
        assert_eq!(c.translate_for(3000.0), -700.0);
        assert_eq!(c.translate_for(6000.0), -1400.0);
        assert_eq!(c.translate_for(99_999.0), -1400.0);
    }

    #[test]
    fn test_pin_state() {
        let c = carousel();
        assert_eq!(c.pin_state(-1.0), PinState::Before);
        assert_eq!(c.pin_state(0.0), PinState::Pinned);
        assert_eq!(c.pin_state(6000.0), PinState::Pinned);
        assert_eq!(c.pin_state(6001.0), PinState::Released);
    }

    #[test]
    fn test_no_overflow_means_no_pin_budget() {
        let c = Carousel::new(1, 800.0, 0.0, 1000.0, 3.0);
        assert_eq!(c.max_translate(), 0.0);
        assert_eq!(c.scroll_distance(), 0.0);
        assert_eq!(c.translate_for(500.0), 0.0);
        assert_eq!(c.snap_offset(10.0), 10.0);
    }

    #[test]
    fn test_card_boundaries_end_at_max() {
        let c = carousel();
        assert_eq!(c.card_boundaries(), vec![0.0, 800.0, 1400.0]);
    }

    #[test]
    fn test_snap_offset_picks_nearest_card() {
        let c = carousel();
        // offset 300 snaps back to 0
        assert_eq!(c.snap_offset(300.0 / 1400.0 * 6000.0), 0.0);
        // offset 700 snaps forward to 800
        let snapped = c.snap_offset(3000.0);
        assert!((snapped - 800.0 / 1400.0 * 6000.0).abs() < 1e-6);
        // outside the pin nothing moves
        assert_eq!(c.snap_offset(-50.0), -50.0);
    }

    #[test]
    fn test_active_card() {
        let c = carousel();
        assert_eq!(c.active_card(0.0), 0);
        assert_eq!(c.active_card(6000.0), 2);
    }

    #[test]
    fn test_resize_keeps_bounds() {
        let mut c = carousel();
        c.resize(600.0, 500.0);
        assert_eq!(c.max_translate(), 900.0);
        assert_eq!(c.translate_for(1e9), -900.0);
    }

    #[test]
    fn test_empty_carousel() {
        let c = Carousel::new(0, 800.0, 0.0, 1000.0, 3.0);
        assert_eq!(c.track_width(), 0.0);
        assert!(c.card_boundaries().is_empty());
        assert_eq!(c.active_card(100.0), 0);
    }
}
