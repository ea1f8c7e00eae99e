use leptos::html::{Div, H2, P};
use leptos::prelude::*;

use super::edge_at;
use crate::core::content::{PROJECTS, Project, two_digit};
use crate::core::reveal::{
    Binding, Easing, Keyword, Pose, ToggleActions, TriggerWindow, Tween,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_carousel, use_reveal_on};
use crate::ui::split_text::SplitText;

/// Cards reveal as their left edge crosses the middle of the viewport
const CARD_WINDOW: TriggerWindow =
    TriggerWindow::new(edge_at(Keyword::Left, 80.0), edge_at(Keyword::Left, 20.0)).horizontal();

/// Project cards in a pinned horizontal carousel
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let wrapper = NodeRef::<Div>::new();
    let track = NodeRef::<Div>::new();
    use_carousel(wrapper, track, PROJECTS.len());

    view! {
        <div id="projects" node_ref=wrapper class="carousel-wrapper bg-black">
            <div class="carousel-sticky">
                <div node_ref=track class="carousel-track">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index=index project=*project /> })
                        .collect_view()}
                </div>

                <div class="scroll-hint absolute bottom-8 left-1/2 -translate-x-1/2 z-50 flex items-center gap-3 text-white/60 text-sm bg-black/30 backdrop-blur-sm px-4 py-2 rounded-full border border-white/10">
                    <span class="uppercase tracking-wider">"Scroll Horizontally"</span>
                    <Icon name=icons::CHEVRON_RIGHT class="scroll-indicator w-5 h-5" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let card = NodeRef::<Div>::new();
    let title = NodeRef::<H2>::new();
    let description = NodeRef::<P>::new();
    let details = NodeRef::<P>::new();

    use_reveal_on(
        card,
        title,
        Binding::toggle(
            CARD_WINDOW,
            ToggleActions::PLAY_REVERSE,
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_y(100.0)
                    .with_rotate_x(-90.0),
            )
            .duration(800)
            .stagger(30)
            .ease(Easing::BackOut),
        )
        .on_glyphs(),
    );
    let copy = Binding::toggle(
        CARD_WINDOW,
        ToggleActions::PLAY_REVERSE,
        Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(30.0))
            .duration(600)
            .delay(300)
            .stagger(10),
    )
    .on_glyphs();
    use_reveal_on(card, description, copy);
    use_reveal_on(card, details, copy);

    let facts = [
        ("TEAM SIZE", project.team_size),
        ("TOSCA VERSION", project.tosca_version),
        ("WORKSPACE", project.workspace),
        ("TOOLS", project.tools),
    ];

    view! {
        <div
            node_ref=card
            class="carousel-card relative flex-shrink-0 px-8 md:px-16 py-20 flex items-center"
        >
            <div class="max-w-7xl mx-auto w-full">
                <div class="mb-6">
                    <h3 class="text-xl md:text-2xl font-light text-white/60 mb-3">"PROJECTS"</h3>
                    <ProjectLine card=card order=0 class="h-px bg-cyan-400/30 mb-6" />
                </div>

                <div class="perspective mb-8">
                    <h2
                        node_ref=title
                        class="text-4xl md:text-6xl lg:text-7xl font-bold text-white leading-tight mb-4"
                        aria-label=project.title
                    >
                        <SplitText text=project.title />
                    </h2>
                    <ProjectLine
                        card=card
                        order=1
                        class="h-0.5 bg-gradient-to-r from-cyan-400 to-transparent mb-6"
                    />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
                    <div>
                        <ProjectLine card=card order=2 class="h-px bg-cyan-400/20 mb-4" />
                        <div class="space-y-4">
                            <Fact label="ROLE" value=project.role />
                            <Fact label="DURATION" value=project.duration />
                            <Fact label="YEAR" value=project.year />
                        </div>
                    </div>

                    <div>
                        <ProjectLine card=card order=3 class="h-px bg-cyan-400/20 mb-4" />
                        <p
                            node_ref=description
                            class="text-base md:text-lg font-light text-white/90 leading-relaxed"
                            aria-label=project.description
                        >
                            <SplitText text=project.description />
                        </p>
                    </div>

                    <div>
                        <ProjectLine card=card order=4 class="h-px bg-cyan-400/20 mb-4" />
                        <p
                            node_ref=details
                            class="text-base md:text-lg font-light text-white/90 leading-relaxed"
                            aria-label=project.details
                        >
                            <SplitText text=project.details />
                        </p>
                        <div class="mt-4 grid grid-cols-2 gap-3">
                            {facts
                                .into_iter()
                                .filter_map(|(label, value)| value.map(|value| (label, value)))
                                .map(|(label, value)| view! { <Fact label=label value=value /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                    {project
                        .images
                        .iter()
                        .enumerate()
                        .map(|(order, src)| {
                            view! { <ProjectImage card=card order=order src=*src title=project.title /> }
                        })
                        .collect_view()}
                </div>

                <div class="absolute bottom-6 right-6 md:right-12">
                    <div class="flex flex-col items-end">
                        <p class="text-5xl md:text-7xl font-bold text-white/10">{two_digit(index + 1)}</p>
                        <p class="text-sm text-white/40 mt-2">{format!("OF {}", two_digit(PROJECTS.len()))}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-xs uppercase tracking-widest text-cyan-400 mb-1.5">{label}</h4>
            <p class="text-base font-medium text-white">{value}</p>
        </div>
    }
}

/// Divider that draws itself from the left when its card comes in
#[component]
fn ProjectLine(card: NodeRef<Div>, order: usize, class: &'static str) -> impl IntoView {
    let line = NodeRef::<Div>::new();
    use_reveal_on(
        card,
        line,
        Binding::toggle(
            CARD_WINDOW,
            ToggleActions::PLAY_REVERSE,
            Tween::enter(Pose::IDENTITY.with_scale_x(0.0))
                .duration(800)
                .delay(200 + order as u32 * 100)
                .ease(Easing::Power2InOut),
        ),
    );

    view! { <div node_ref=line class=format!("project-line {class}")></div> }
}

#[component]
fn ProjectImage(
    card: NodeRef<Div>,
    order: usize,
    src: &'static str,
    title: &'static str,
) -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    use_reveal_on(
        card,
        frame,
        Binding::toggle(
            CARD_WINDOW,
            ToggleActions::PLAY_REVERSE,
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_scale(0.8)
                    .with_y(50.0),
            )
            .duration(800)
            .delay(500 + order as u32 * 200),
        ),
    );

    view! {
        <div node_ref=frame>
            <div class="w-full h-56 md:h-72 bg-gray-900 rounded-2xl overflow-hidden border border-cyan-400/20 shadow-lg shadow-cyan-400/10">
                <img
                    src=src
                    alt=format!("{title} - Image {}", order + 1)
                    class="w-full h-full object-cover"
                />
            </div>
        </div>
    }
}
