use leptos::html::{Div, H2};
use leptos::prelude::*;

use super::edge_at;
use crate::core::content::QUOTE;
use crate::core::reveal::{Binding, Keyword, Pose, TriggerWindow, Tween};
use crate::ui::motion::use_reveal;
use crate::ui::split_text::SplitText;

/// Short quote whose letters cascade in and then lift away
#[component]
pub fn QuoteSection() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let text = NodeRef::<H2>::new();

    use_reveal(
        text,
        Binding::scrub(
            TriggerWindow::new(edge_at(Keyword::Top, 80.0), edge_at(Keyword::Top, 20.0)),
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_y(50.0)
                    .with_rotate_x(-90.0),
            )
            .spread(0.5),
        )
        .on_glyphs(),
    );
    use_reveal(
        container,
        Binding::scrub(
            TriggerWindow::new(
                edge_at(Keyword::Bottom, 60.0),
                edge_at(Keyword::Bottom, 20.0),
            ),
            Tween::exit(Pose::IDENTITY.with_opacity(0.0).with_y(-50.0)),
        ),
    );

    view! {
        <div class="bg-black">
            <div
                node_ref=container
                class="h-[30vh] flex items-center justify-center px-4 md:px-8"
            >
                <div class="max-w-4xl w-full text-center">
                    <h2
                        node_ref=text
                        class="perspective text-2xl md:text-4xl lg:text-5xl font-light text-cyan-400 leading-relaxed"
                        aria-label=QUOTE
                    >
                        <SplitText text=QUOTE />
                    </h2>
                </div>
            </div>
            <div class="h-screen"></div>
        </div>
    }
}
