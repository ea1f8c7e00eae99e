use leptos::prelude::*;

use crate::core::content::NAV_LINKS;

/// Top bar with a Menu toggle and a dropdown of in-page anchors
#[component]
pub fn Navbar() -> impl IntoView {
    let is_open = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                is_open.set(false);
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div class="w-full h-2 bg-cyan-400 absolute top-0 left-0 z-50"></div>

        <nav class="relative z-40 w-full px-8 py-4 flex justify-end items-center">
            <button
                class="text-xl md:text-2xl font-light hover:text-cyan-400 transition-colors"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {move || if is_open.get() { "Close" } else { "Menu" }}
            </button>
        </nav>

        <Show when=move || is_open.get()>
            <div class="absolute top-20 left-0 right-0 z-30 bg-black/95 backdrop-blur-md px-8 py-8">
                <div class="flex flex-col gap-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-2xl md:text-3xl font-light hover:text-cyan-400 transition-colors"
                                    on:click=move |_| is_open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
