//! Platform-free models for the portfolio page: content, timing state
//! machines and scroll geometry

pub mod carousel;
pub mod config;
pub mod content;
pub mod deck;
pub mod loader;
pub mod pointer;
pub mod reveal;
pub mod split;
pub mod typewriter;
#[cfg(test)]
mod tests;

pub use carousel::{Carousel, PinState};
pub use config::{ConfigError, MotionConfig};
pub use deck::CardDeck;
pub use loader::{Loader, LoaderStep};
pub use pointer::{Follower, IdleStage, IdleTracker, Point};
pub use split::{Glyph, split_glyphs};
pub use typewriter::{Phase, Typewriter};
