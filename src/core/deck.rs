//! Certification deck selection
//!
//! Cards sit collapsed side by side; selecting one widens it and dims the
//! rest. Cards near either edge of the deck shift inward while expanded so
//! they stay fully on screen.

use std::time::Duration;

pub const COLLAPSED_WIDTH: f64 = 120.0;
pub const EXPANDED_WIDTH: f64 = 500.0;
/// An expanded card collapses on its own after this long
pub const AUTO_CLOSE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDeck {
    count: usize,
    selected: Option<usize>,
}

impl CardDeck {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Toggle a card; returns true if it is now expanded
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        if self.selected == Some(index) {
            self.selected = None;
            false
        } else {
            self.selected = Some(index);
            true
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Number of cards on each side treated as edge cards
    fn edge(&self) -> usize {
        self.count * 3 / 8
    }

    /// Horizontal shift of an expanded card, in pixels
    pub fn shift_for(&self, index: usize) -> f64 {
        if !self.is_selected(index) {
            return 0.0;
        }
        let half = (EXPANDED_WIDTH - COLLAPSED_WIDTH) / 2.0;
        let edge = self.edge();
        if index < edge {
            half
        } else if index >= self.count - edge {
            -half
        } else {
            0.0
        }
    }

    /// Whether a card is dimmed because another one is expanded
    pub fn is_dimmed(&self, index: usize) -> bool {
        self.selected.is_some_and(|selected| selected != index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_toggles() {
        let mut deck = CardDeck::new(8);
        assert!(deck.select(2));
        assert_eq!(deck.selected(), Some(2));
        assert!(!deck.select(2));
        assert_eq!(deck.selected(), None);
    }

    #[test]
    fn test_selecting_another_card_switches() {
        let mut deck = CardDeck::new(8);
        deck.select(1);
        assert!(deck.select(4));
        assert!(deck.is_dimmed(1));
        assert!(!deck.is_dimmed(4));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut deck = CardDeck::new(3);
        assert!(!deck.select(3));
        assert_eq!(deck.selected(), None);
    }

    #[test]
    fn test_edge_cards_shift_inward() {
        let mut deck = CardDeck::new(8);
        deck.select(0);
        assert_eq!(deck.shift_for(0), 190.0);
        deck.select(7);
        assert_eq!(deck.shift_for(7), -190.0);
        deck.select(4);
        assert_eq!(deck.shift_for(4), 0.0);
        assert_eq!(deck.shift_for(0), 0.0);
    }

    #[test]
    fn test_close_clears_dimming() {
        let mut deck = CardDeck::new(4);
        deck.select(1);
        deck.close();
        assert!(!deck.is_dimmed(0));
    }
}
