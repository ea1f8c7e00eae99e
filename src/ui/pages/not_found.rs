//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::PROFILE;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black text-white flex flex-col items-center justify-center p-4">
            <div class="w-full h-2 bg-cyan-400 absolute top-0 left-0"></div>

            <div class="text-center">
                <h1 class="text-8xl md:text-[12rem] font-bold text-cyan-400 mb-4">"404"</h1>

                <h2 class="text-2xl md:text-4xl font-light mb-2">"Page Not Found"</h2>

                <p class="text-gray-400 mb-10 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="group inline-flex items-center gap-3 px-8 py-4 bg-cyan-400 text-black rounded-full font-medium text-lg hover:bg-cyan-300 transition-all duration-300 hover:gap-5"
                >
                    <span>"Back home"</span>
                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-600">{PROFILE.display_name}</p>
            </div>
        </div>
    }
}
