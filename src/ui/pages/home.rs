//! The portfolio page
//!
//! Sections in scroll order, with the loader on top until it completes.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::loader::LoaderOverlay;
use crate::ui::sections::{
    CertificationsSection, ExperienceSection, Footer, HeroSection, ImageSection, InfoSection,
    ProjectsSection, QuoteSection, SkillsSection,
};

pub const PAGE_TITLE: &str = "Vysakh | Quality Analyst";
pub const PAGE_DESCRIPTION: &str = "Portfolio and insights of Vysakh, Quality Analyst focused on \
    software testing, QA processes, and ensuring high-quality product releases.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <LoaderOverlay />

        <main class="bg-black text-white">
            <HeroSection />
            <ImageSection />
            <InfoSection />
            <SkillsSection />
            <ExperienceSection />
            <QuoteSection />
            <CertificationsSection />
            <ProjectsSection />
            <Footer />
        </main>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:type" content="website" />
        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"Person","name":"Vysakh","jobTitle":"Quality Analyst","email":"mailto:hi@vysakh.com","knowsAbout":["Software testing","Test automation","Tricentis Tosca","Quality assurance"]}"#></script>
    }
}
