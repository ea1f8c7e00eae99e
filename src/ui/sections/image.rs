use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::HERO_IMAGE;
use crate::core::reveal::{Binding, Pose, Tween};
use crate::ui::motion::{default_window, use_motion_config, use_reveal};

/// Full-width image that rises into place as it scrolls in
#[component]
pub fn ImageSection() -> impl IntoView {
    let frame = NodeRef::<Div>::new();
    let window = default_window(&use_motion_config());
    use_reveal(
        frame,
        Binding::scrub(
            window,
            Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(100.0)),
        ),
    );

    view! {
        <div class="relative min-h-screen bg-black z-10 flex items-center justify-center">
            <div class="w-full max-w-6xl px-8">
                <div node_ref=frame class="w-full aspect-video rounded-2xl overflow-hidden shadow-2xl">
                    <img src=HERO_IMAGE alt="Abstract" class="w-full h-full object-cover" />
                </div>
            </div>
        </div>
    }
}
