use leptos::html::{Div, H2};
use leptos::prelude::*;

use super::{edge_at, edges};
use crate::core::content::{SKILLS, SKILLS_HEADING};
use crate::core::reveal::{
    Binding, Easing, Keyword, Pose, ToggleActions, TriggerWindow, Tween,
};
use crate::ui::motion::use_reveal;
use crate::ui::split_text::SplitText;

/// How far the heading drifts right while the section scrolls past
const HEADING_DRIFT: f64 = 320.0;

/// White section with a waving heading and a grid of flip-in skill cards
#[component]
pub fn SkillsSection() -> impl IntoView {
    let heading = NodeRef::<H2>::new();

    use_reveal(
        heading,
        Binding::toggle(
            TriggerWindow::new(edge_at(Keyword::Top, 80.0), edge_at(Keyword::Top, 20.0)),
            ToggleActions::PLAY_REVERSE,
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_x(-50.0)
                    .with_y(100.0)
                    .with_rotate_x(-90.0)
                    .with_scale(0.5),
            )
            .duration(800)
            .stagger(50)
            .ease(Easing::BackOut),
        )
        .on_glyphs(),
    );
    use_reveal(
        heading,
        Binding::scrub(
            TriggerWindow::new(
                edges(Keyword::Top, Keyword::Center, 0.0),
                edges(Keyword::Bottom, Keyword::Center, 0.0),
            ),
            Tween::exit(Pose::IDENTITY.with_x(HEADING_DRIFT)),
        ),
    );

    view! {
        <div id="skills" class="relative min-h-screen bg-white text-black py-20 px-8 z-10">
            <div class="max-w-7xl mx-auto">
                <div class="mb-16">
                    <h2
                        node_ref=heading
                        class="perspective text-5xl md:text-7xl font-bold text-black"
                        aria-label=SKILLS_HEADING
                    >
                        <SplitText text=SKILLS_HEADING />
                    </h2>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard index=index name=*skill /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillCard(index: usize, name: &'static str) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let body = NodeRef::<Div>::new();

    use_reveal(
        card,
        Binding::toggle(
            TriggerWindow::new(edge_at(Keyword::Top, 85.0), edge_at(Keyword::Top, 50.0)),
            ToggleActions::PLAY_REVERSE,
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_scale(0.5)
                    .with_y(100.0)
                    .with_rotate_y(-180.0),
            )
            .duration(800)
            .delay(index as u32 * 100)
            .ease(Easing::BackOut),
        ),
    );
    // gentle float while the card crosses the viewport
    use_reveal(
        body,
        Binding::scrub(
            TriggerWindow::new(edge_at(Keyword::Top, 80.0), edge_at(Keyword::Bottom, 20.0)),
            Tween::exit(Pose::IDENTITY.with_y(-20.0)),
        ),
    );

    view! {
        <div node_ref=card class="perspective">
            <div
                node_ref=body
                class="bg-gray-100 rounded-2xl p-8 flex items-center justify-center aspect-square hover:shadow-xl transition-shadow relative overflow-hidden"
            >
                <div class="absolute inset-0 rounded-2xl bg-gradient-to-br from-black via-cyan-500 to-black p-[2px]">
                    <div class="bg-gray-100 w-full h-full rounded-2xl"></div>
                </div>
                <div class="text-center relative z-10">
                    <div class="text-3xl font-light mb-2">{name}</div>
                </div>
            </div>
        </div>
    }
}
