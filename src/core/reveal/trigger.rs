//! Trigger points and scroll progress
//!
//! A trigger point pairs a position on the element with a line in the
//! viewport, written the way scroll-animation libraries usually spell it:
//! `"top 80%"` fires when the element's top edge reaches 80% of the way down
//! the viewport. Two trigger points form a window, and progress through the
//! window is what bindings animate against.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Errors from parsing trigger syntax
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TriggerParseError {
    #[error("expected \"<element> <viewport>\", got {0:?}")]
    TokenCount(String),
    #[error("unknown anchor {0:?}")]
    UnknownAnchor(String),
    #[error("invalid offset in {0:?}")]
    BadOffset(String),
    #[error("invalid toggle actions {0:?}")]
    BadActions(String),
}

/// Scroll axis a window is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    /// Used for elements moving inside the horizontal carousel
    Horizontal,
}

/// Bounding rectangle relative to the viewport, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

/// Named anchor positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Keyword {
    #[display("top")]
    Top,
    #[display("center")]
    Center,
    #[display("bottom")]
    Bottom,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl Keyword {
    fn fraction(self) -> f64 {
        match self {
            Keyword::Top | Keyword::Left => 0.0,
            Keyword::Center => 0.5,
            Keyword::Bottom | Keyword::Right => 1.0,
        }
    }
}

/// Base position of an anchor along an extent
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Position {
    #[display("{_0}")]
    Keyword(Keyword),
    #[display("{_0}%")]
    Percent(f64),
    #[display("{_0}px")]
    Px(f64),
}

/// A position along an extent plus an optional pixel offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Position,
    pub offset: f64,
}

impl Anchor {
    pub const fn keyword(keyword: Keyword) -> Self {
        Self {
            position: Position::Keyword(keyword),
            offset: 0.0,
        }
    }

    pub const fn percent(percent: f64) -> Self {
        Self {
            position: Position::Percent(percent),
            offset: 0.0,
        }
    }

    pub const fn px(px: f64) -> Self {
        Self {
            position: Position::Px(px),
            offset: 0.0,
        }
    }

    pub const fn offset_by(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Resolve to pixels from the start of an extent
    pub fn resolve(&self, extent: f64) -> f64 {
        let base = match self.position {
            Position::Keyword(keyword) => keyword.fraction() * extent,
            Position::Percent(percent) => percent / 100.0 * extent,
            Position::Px(px) => px,
        };
        base + self.offset
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)?;
        if self.offset > 0.0 {
            write!(f, "+={}", self.offset)?;
        } else if self.offset < 0.0 {
            write!(f, "-={}", -self.offset)?;
        }
        Ok(())
    }
}

impl FromStr for Anchor {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Skip the first byte so a leading minus ("-200px") is not an offset
        let split = s
            .get(1..)
            .and_then(|rest| rest.find("+=").or_else(|| rest.find("-=")))
            .map(|i| i + 1);

        let (base, offset) = match split {
            Some(i) => {
                let sign = if s[i..].starts_with('-') { -1.0 } else { 1.0 };
                let amount = s[i + 2..].trim_end_matches("px");
                let amount: f64 = amount
                    .parse()
                    .map_err(|_| TriggerParseError::BadOffset(s.to_string()))?;
                (&s[..i], sign * amount)
            }
            None => (s, 0.0),
        };

        let position = match base {
            "top" => Position::Keyword(Keyword::Top),
            "center" => Position::Keyword(Keyword::Center),
            "bottom" => Position::Keyword(Keyword::Bottom),
            "left" => Position::Keyword(Keyword::Left),
            "right" => Position::Keyword(Keyword::Right),
            other => {
                let unknown = || TriggerParseError::UnknownAnchor(s.to_string());
                if let Some(percent) = other.strip_suffix('%') {
                    Position::Percent(percent.parse().map_err(|_| unknown())?)
                } else {
                    let px = other.strip_suffix("px").unwrap_or(other);
                    Position::Px(px.parse().map_err(|_| unknown())?)
                }
            }
        };

        Ok(Anchor { position, offset })
    }
}

/// Element anchor meeting a viewport anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TriggerPoint {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPoint {
    /// `"top 80%"`
    pub const TOP_80: Self = Self::new(Anchor::keyword(Keyword::Top), Anchor::percent(80.0));
    /// `"top 50%"`
    pub const TOP_50: Self = Self::new(Anchor::keyword(Keyword::Top), Anchor::percent(50.0));

    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Signed scroll distance still needed to reach this point.
    ///
    /// Positive before the point, zero on it, negative past it.
    pub fn distance(&self, rect: &Rect, viewport: &Viewport, axis: Axis) -> f64 {
        let element = rect.start(axis) + self.element.resolve(rect.extent(axis));
        let line = self.viewport.resolve(viewport.extent(axis));
        element - line
    }
}

impl fmt::Display for TriggerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl FromStr for TriggerPoint {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [element, viewport] => Ok(Self::new(element.parse()?, viewport.parse()?)),
            _ => Err(TriggerParseError::TokenCount(s.to_string())),
        }
    }
}

impl TryFrom<String> for TriggerPoint {
    type Error = TriggerParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TriggerPoint> for String {
    fn from(point: TriggerPoint) -> Self {
        point.to_string()
    }
}

/// Window between two trigger points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerWindow {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
    pub axis: Axis,
}

impl TriggerWindow {
    pub const fn new(start: TriggerPoint, end: TriggerPoint) -> Self {
        Self {
            start,
            end,
            axis: Axis::Vertical,
        }
    }

    /// Window that starts and ends at the same point
    pub const fn at(point: TriggerPoint) -> Self {
        Self::new(point, point)
    }

    pub const fn horizontal(mut self) -> Self {
        self.axis = Axis::Horizontal;
        self
    }

    /// Unclamped progress: below 0 before the window, above 1 past it.
    ///
    /// A window with no length acts as a step at its start point.
    pub fn raw_progress(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        let to_start = self.start.distance(rect, viewport, self.axis);
        let to_end = self.end.distance(rect, viewport, self.axis);
        let span = to_end - to_start;

        if span <= f64::EPSILON {
            return if to_start <= 0.0 { 1.0 } else { 0.0 };
        }

        let raw = -to_start / span;
        if raw.is_finite() { raw } else { 0.0 }
    }

    /// Progress clamped to [0, 1]
    pub fn progress(&self, rect: &Rect, viewport: &Viewport) -> f64 {
        self.raw_progress(rect, viewport).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(s: &str) -> TriggerPoint {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_keyword_and_percent() {
        let point = tp("top 80%");
        assert_eq!(point, TriggerPoint::TOP_80);
        assert_eq!(point.to_string(), "top 80%");
    }

    #[test]
    fn test_parse_pixels_and_offsets() {
        let point = tp("top bottom-=100");
        assert_eq!(point.viewport.position, Position::Keyword(Keyword::Bottom));
        assert_eq!(point.viewport.offset, -100.0);
        assert_eq!(point.to_string(), "top bottom-=100");

        let point = tp("top -200px");
        assert_eq!(point.viewport.position, Position::Px(-200.0));
        assert_eq!(point.viewport.offset, 0.0);

        let point = tp("center 180px");
        assert_eq!(point.element.position, Position::Keyword(Keyword::Center));
        assert_eq!(point.to_string(), "center 180px");

        let point = tp("left right+=20px");
        assert_eq!(point.viewport.offset, 20.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "top".parse::<TriggerPoint>(),
            Err(TriggerParseError::TokenCount(_))
        ));
        assert!(matches!(
            "middle 50%".parse::<TriggerPoint>(),
            Err(TriggerParseError::UnknownAnchor(_))
        ));
        assert!(matches!(
            "top bottom-=abc".parse::<TriggerPoint>(),
            Err(TriggerParseError::BadOffset(_))
        ));
    }

    #[test]
    fn test_progress_inside_window_is_linear() {
        // "top 80%" → "top 50%" on a 1000px viewport spans 300px of scroll
        let window = TriggerWindow::new(TriggerPoint::TOP_80, TriggerPoint::TOP_50);
        let viewport = Viewport::new(1200.0, 1000.0);

        let at = |top: f64| window.progress(&Rect::new(0.0, top, 100.0, 200.0), &viewport);
        assert_eq!(at(800.0), 0.0);
        assert!((at(650.0) - 0.5).abs() < 1e-9);
        assert_eq!(at(500.0), 1.0);
    }

    #[test]
    fn test_progress_is_clamped_outside_window() {
        let window = TriggerWindow::new(TriggerPoint::TOP_80, TriggerPoint::TOP_50);
        let viewport = Viewport::new(1200.0, 1000.0);

        for top in [5000.0, 801.0, 499.0, -3000.0] {
            let rect = Rect::new(0.0, top, 100.0, 200.0);
            let p = window.progress(&rect, &viewport);
            assert!((0.0..=1.0).contains(&p), "progress {p} for top {top}");
        }
        assert!(window.raw_progress(&Rect::new(0.0, 5000.0, 0.0, 0.0), &viewport) < 0.0);
        assert!(window.raw_progress(&Rect::new(0.0, -3000.0, 0.0, 0.0), &viewport) > 1.0);
    }

    #[test]
    fn test_zero_length_window_is_a_step() {
        let window = TriggerWindow::at(tp("top bottom-=100"));
        let viewport = Viewport::new(1200.0, 1000.0);

        assert_eq!(window.progress(&Rect::new(0.0, 950.0, 10.0, 10.0), &viewport), 0.0);
        assert_eq!(window.progress(&Rect::new(0.0, 900.0, 10.0, 10.0), &viewport), 1.0);
    }

    #[test]
    fn test_horizontal_axis_uses_left_edge() {
        let window = TriggerWindow::new(tp("left 80%"), tp("left 20%")).horizontal();
        let viewport = Viewport::new(1000.0, 800.0);

        let p = window.progress(&Rect::new(500.0, -900.0, 1000.0, 800.0), &viewport);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_keyword_uses_element_extent() {
        let window = TriggerWindow::new(tp("bottom 60%"), tp("bottom 20%"));
        let viewport = Viewport::new(1000.0, 1000.0);

        // bottom edge at 600 → start of window
        let p = window.progress(&Rect::new(0.0, 400.0, 100.0, 200.0), &viewport);
        assert_eq!(p, 0.0);
        let p = window.progress(&Rect::new(0.0, 0.0, 100.0, 200.0), &viewport);
        assert_eq!(p, 1.0);
    }
}
