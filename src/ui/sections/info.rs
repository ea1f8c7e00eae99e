use leptos::html::{Div, H2, P};
use leptos::prelude::*;

use super::{edge_at, edges};
use crate::core::content::PROFILE;
use crate::core::reveal::{
    Binding, ColorTween, Keyword, Pose, Rgb, ToggleActions, TriggerWindow, Tween,
};
use crate::ui::motion::{default_window, use_motion_config, use_reveal};
use crate::ui::split_text::SplitText;

/// About block: three per-letter reveals over a black-to-white backdrop
#[component]
pub fn InfoSection() -> impl IntoView {
    let section = NodeRef::<Div>::new();
    let title = NodeRef::<H2>::new();
    let headline = NodeRef::<P>::new();
    let description = NodeRef::<P>::new();
    let window = default_window(&use_motion_config());

    use_reveal(
        title,
        Binding::toggle(
            window,
            ToggleActions::PLAY_ONCE,
            Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(50.0))
                .duration(500)
                .stagger(100),
        )
        .on_glyphs(),
    );
    use_reveal(
        headline,
        Binding::toggle(
            TriggerWindow::new(edge_at(Keyword::Top, 75.0), edge_at(Keyword::Top, 45.0)),
            ToggleActions::PLAY_ONCE,
            Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(30.0))
                .duration(600)
                .stagger(30),
        )
        .on_glyphs(),
    );
    use_reveal(
        description,
        Binding::toggle(
            window,
            ToggleActions::PLAY_ONCE,
            Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(20.0))
                .duration(400)
                .stagger(10),
        )
        .on_glyphs(),
    );
    use_reveal(
        section,
        Binding::backdrop(
            TriggerWindow::new(
                edge_at(Keyword::Top, 20.0),
                edges(Keyword::Bottom, Keyword::Top, 0.0),
            ),
            ColorTween::new(Rgb::BLACK, Rgb::WHITE),
        ),
    );

    view! {
        <div
            id="info"
            node_ref=section
            class="relative min-h-screen text-white py-20 px-8 z-10"
            style="background-color: rgb(0, 0, 0);"
        >
            <div class="space-y-6 w-full">
                <h2
                    node_ref=title
                    class="text-5xl md:text-7xl font-bold text-cyan-400 mb-12 overflow-hidden"
                    aria-label=PROFILE.info_title
                >
                    <SplitText text=PROFILE.info_title />
                </h2>

                <div class="relative overflow-hidden">
                    <div class="text-4xl md:text-6xl lg:text-7xl font-bold leading-tight">
                        <div class="relative">
                            <p class="text-gray-700" aria-hidden="true">{PROFILE.info_headline}</p>
                            <p
                                node_ref=headline
                                class="absolute top-0 left-0 text-cyan-400"
                                aria-label=PROFILE.info_headline
                            >
                                <SplitText text=PROFILE.info_headline />
                            </p>
                        </div>
                    </div>
                </div>

                <p
                    node_ref=description
                    class="text-xl md:text-2xl font-light leading-relaxed mt-8 text-gray-400"
                    aria-label=PROFILE.info_description
                >
                    <SplitText text=PROFILE.info_description />
                </p>
            </div>
        </div>
    }
}
