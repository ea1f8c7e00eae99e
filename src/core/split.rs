//! Character splitting for per-letter animation
//!
//! Text reveals animate every character on its own, so headings and
//! paragraphs are split into glyphs before rendering. Splitting is pure:
//! the same string always yields the same ordered glyph sequence.

/// Non-breaking space used in place of ordinary spaces so inline-block
/// glyphs keep their width.
pub const NBSP: char = '\u{00A0}';

/// A single positioned character of a split string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Position of the character in the source string (in chars)
    pub index: usize,
    /// The source character
    pub ch: char,
}

impl Glyph {
    /// Whether the glyph is whitespace in the source text
    pub fn is_space(&self) -> bool {
        self.ch.is_whitespace()
    }

    /// Character to render; spaces become non-breaking spaces
    pub fn rendered(&self) -> char {
        if self.ch == ' ' { NBSP } else { self.ch }
    }
}

/// Split text into an ordered sequence of glyphs
pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| Glyph { index, ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        let glyphs = split_glyphs("Info");
        let chars: String = glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, "Info");
        assert_eq!(glyphs[3].index, 3);
    }

    #[test]
    fn test_spaces_render_as_nbsp() {
        let glyphs = split_glyphs("a b");
        assert!(glyphs[1].is_space());
        assert_eq!(glyphs[1].rendered(), NBSP);
        assert_eq!(glyphs[0].rendered(), 'a');
    }

    #[test]
    fn test_multibyte_characters_are_single_glyphs() {
        let glyphs = split_glyphs("é✓");
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[1].ch, '✓');
    }

    #[test]
    fn test_empty_string() {
        assert!(split_glyphs("").is_empty());
    }
}
