//! Per-character text rendering

use leptos::prelude::*;

use crate::core::split::split_glyphs;

/// Render `text` as one inline-block span per character.
///
/// Every span carries the `glyph` class, which the motion engine uses to
/// find and stagger the characters of a glyph binding.
#[component]
pub fn SplitText(
    text: &'static str,
    /// Extra classes for every glyph span
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "glyph".to_string()
    } else {
        format!("glyph {class}")
    };

    split_glyphs(text)
        .into_iter()
        .map(|glyph| {
            view! {
                <span class=class.clone() aria-hidden="true">
                    {glyph.rendered().to_string()}
                </span>
            }
        })
        .collect_view()
}
