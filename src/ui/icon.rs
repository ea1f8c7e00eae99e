use leptos::prelude::*;

/// Inline stroke icon drawn from a fixed set of paths
#[component]
pub fn Icon(
    /// One of the names in [`icons`]
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            {icons::paths(name)
                .iter()
                .map(|d| {
                    view! { <path stroke-linecap="round" stroke-linejoin="round" d=*d /> }
                })
                .collect_view()}
        </svg>
    }
}

pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const COPY: &str = "copy";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MAIL: &str = "mail";

    /// Path data for an icon name; unknown names draw nothing
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            ARROW_RIGHT => &["M5 12h14", "M13 6l6 6-6 6"],
            ARROW_UP_RIGHT => &["M7 17L17 7", "M8 7h9v9"],
            CHEVRON_RIGHT => &["M9 5l7 7-7 7"],
            COPY => &[
                "M8 8h11a1 1 0 011 1v11a1 1 0 01-1 1H8a1 1 0 01-1-1V9a1 1 0 011-1z",
                "M4 16V5a1 1 0 011-1h11",
            ],
            CHECK => &["M5 13l4 4L19 7"],
            X => &["M6 18L18 6", "M6 6l12 12"],
            MAIL => &[
                "M3 8l7.89 5.26a2 2 0 002.22 0L21 8",
                "M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            ],
            _ => &[],
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_known_icons_have_paths() {
            for name in [ARROW_RIGHT, ARROW_UP_RIGHT, CHEVRON_RIGHT, COPY, CHECK, X, MAIL] {
                assert!(!paths(name).is_empty(), "{name} has no paths");
            }
        }

        #[test]
        fn test_unknown_icon_is_empty() {
            assert!(paths("nope").is_empty());
        }
    }
}
