pub mod clipboard;
pub mod cursor;
pub mod icon;
pub mod loader;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod split_text;
pub mod styles;

pub use cursor::CustomCursor;
pub use icon::{Icon, icons};
pub use loader::LoaderOverlay;
pub use motion::{EngineError, provide_motion_config, use_motion_config};
pub use pages::{HomePage, NotFoundPage};
pub use split_text::SplitText;
pub use styles::PortfolioStyles;
