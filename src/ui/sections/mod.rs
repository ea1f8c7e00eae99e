//! Page sections, top to bottom
//!
//! Each section owns its markup and registers its own scroll bindings
//! through [`crate::ui::motion`].

mod certifications;
mod experience;
mod footer;
mod hero;
mod image;
mod info;
mod navbar;
mod projects;
mod quote;
mod skills;

pub use certifications::CertificationsSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use image::ImageSection;
pub use info::InfoSection;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use quote::QuoteSection;
pub use skills::SkillsSection;

use crate::core::reveal::{Anchor, Keyword, TriggerPoint};

/// Element edge `edge` meets `percent` of the viewport
const fn edge_at(edge: Keyword, percent: f64) -> TriggerPoint {
    TriggerPoint::new(Anchor::keyword(edge), Anchor::percent(percent))
}

/// Element edge `edge` meets `px` pixels from the viewport start
const fn edge_at_px(edge: Keyword, px: f64) -> TriggerPoint {
    TriggerPoint::new(Anchor::keyword(edge), Anchor::px(px))
}

/// Element edge `edge` meets viewport edge `viewport`, shifted by `offset` pixels
const fn edges(edge: Keyword, viewport: Keyword, offset: f64) -> TriggerPoint {
    TriggerPoint::new(
        Anchor::keyword(edge),
        Anchor::keyword(viewport).offset_by(offset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_match_string_form() {
        assert_eq!(edge_at(Keyword::Top, 75.0), "top 75%".parse::<TriggerPoint>().unwrap());
        assert_eq!(edge_at_px(Keyword::Top, 180.0), "top 180px".parse::<TriggerPoint>().unwrap());
        assert_eq!(
            edges(Keyword::Top, Keyword::Bottom, -100.0),
            "top bottom-=100".parse::<TriggerPoint>().unwrap()
        );
        assert_eq!(
            edges(Keyword::Bottom, Keyword::Top, 0.0).to_string(),
            "bottom top"
        );
    }
}
