use leptos::html::{Div, H2};
use leptos::prelude::*;

use super::{edge_at, edge_at_px, edges};
use crate::core::content::{EXPERIENCE_HEADING, HIGHLIGHTS, SERVICES, Service};
use crate::core::reveal::{Binding, Keyword, Pose, ToggleActions, TriggerWindow, Tween};
use crate::ui::motion::{use_reveal, use_reveal_on};

/// Tall services section under a sticky heading that fades as it is passed
#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section = NodeRef::<Div>::new();
    let heading = NodeRef::<H2>::new();

    use_reveal_on(
        section,
        heading,
        Binding::scrub(
            TriggerWindow::new(
                edges(Keyword::Top, Keyword::Top, 0.0),
                edge_at_px(Keyword::Top, -200.0),
            ),
            Tween::exit(Pose::IDENTITY.with_opacity(0.3).with_y(-50.0)),
        ),
    );

    view! {
        <div
            id="experience"
            node_ref=section
            class="relative bg-gray-50 text-black py-20 px-8 z-10 min-h-[300vh]"
        >
            <div class="max-w-7xl mx-auto">
                <div class="mb-16 sticky top-20">
                    <p class="text-sm uppercase tracking-widest text-gray-500 mb-4">"AREAS OF EXPERTISE:"</p>
                    <h2
                        node_ref=heading
                        class="text-5xl md:text-7xl lg:text-8xl font-bold text-black leading-tight"
                    >
                        {EXPERIENCE_HEADING}
                    </h2>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 mt-20">
                    <div>
                        <p class="text-sm uppercase tracking-widest text-gray-500 mb-8 sticky top-40">"SERVICES"</p>
                        <div class="space-y-8">
                            {SERVICES
                                .iter()
                                .enumerate()
                                .map(|(index, service)| view! { <ServiceItem index=index service=*service /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:sticky lg:top-40 h-fit">
                        <p class="text-sm uppercase tracking-widest text-gray-500 mb-4">"WHAT I CAN DO FOR YOUR TEAM"</p>
                        <h3 class="text-3xl md:text-4xl lg:text-5xl font-bold leading-tight mb-8">
                            "I ensure "
                            <span class="bg-cyan-400 px-2">"reliable"</span>
                            " software quality that helps teams deliver with confidence."
                        </h3>

                        <div class="mt-12 space-y-6">
                            {HIGHLIGHTS
                                .iter()
                                .map(|highlight| {
                                    view! {
                                        <div class="bg-white p-6 rounded-lg shadow-sm border border-gray-200">
                                            <h4 class="font-bold text-xl mb-2">{highlight.title}</h4>
                                            <p class="text-gray-600">{highlight.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One service row: slides in from the left, fades out under the heading
#[component]
fn ServiceItem(index: usize, service: Service) -> impl IntoView {
    let item = NodeRef::<Div>::new();
    let body = NodeRef::<Div>::new();

    use_reveal(
        item,
        Binding::toggle(
            TriggerWindow::new(edge_at(Keyword::Top, 85.0), edge_at(Keyword::Top, 50.0)),
            ToggleActions::BOTH_WAYS,
            Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_x(-100.0).with_scale(0.8))
                .duration(2000)
                .delay(index as u32 * 100),
        ),
    );
    use_reveal_on(
        item,
        body,
        Binding::scrub(
            TriggerWindow::new(
                edge_at_px(Keyword::Top, 180.0),
                edge_at_px(Keyword::Top, 80.0),
            ),
            Tween::exit(Pose::IDENTITY.with_opacity(0.0).with_scale(0.95)),
        ),
    );

    view! {
        <div
            node_ref=item
            class="border-t border-gray-300 pt-8 hover:border-cyan-400 transition-colors"
        >
            <div node_ref=body class="flex items-start gap-6">
                <span class="text-cyan-400 font-light text-3xl">{service.id}</span>
                <div>
                    <h4 class="text-2xl md:text-3xl font-bold mb-2">{service.title}</h4>
                    <p class="text-gray-600 text-lg">{service.description}</p>
                </div>
            </div>
        </div>
    }
}
