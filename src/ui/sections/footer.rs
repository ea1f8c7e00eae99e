use leptos::prelude::*;

use crate::core::content::{Link, NAV_LINKS, PROFILE, SOCIAL_LINKS};
use crate::ui::icon::{Icon, icons};

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative min-h-screen bg-black text-white pt-20 pb-8 px-8 z-10">
            <div class="absolute top-0 left-8 right-8 h-[2px] bg-cyan-400 shadow-[0_0_10px_#22d3ee,0_0_20px_#22d3ee,0_0_30px_#22d3ee]"></div>

            <div class="w-full h-full flex flex-col justify-between">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-20">
                    <LinkColumn heading="NAVIGATION" links=NAV_LINKS />
                    <LinkColumn heading="SOCIAL" links=SOCIAL_LINKS />

                    <div class="md:col-span-1 flex items-start">
                        <div>
                            <div class="w-3 h-3 bg-cyan-400 rounded-full mb-6"></div>
                            <a
                                href=format!("mailto:{}", PROFILE.email)
                                class="text-4xl md:text-5xl lg:text-6xl font-light hover:text-cyan-400 transition-colors break-words"
                            >
                                {PROFILE.email}
                            </a>
                            <CopyEmailButton />
                        </div>
                    </div>
                </div>

                <div class="space-y-8">
                    <p class="text-4xl md:text-6xl lg:text-7xl font-light leading-tight">
                        "I believe in the power of " <br class="hidden md:block" />
                        <span class="text-cyan-400">"quality testing"</span>
                        " and " <br class="hidden md:block" />
                        "delivering flawless " <br class="hidden md:block" />
                        "experiences."
                    </p>
                    <h2 class="text-4xl lg:text-[12rem] xl:text-[15rem] font-bold w-full">
                        {PROFILE.display_name}
                    </h2>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(heading: &'static str, links: &'static [Link]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-sm uppercase tracking-widest text-gray-400 mb-6">{heading}</h3>
            <ul class="space-y-4">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="text-2xl hover:text-cyan-400 transition-colors">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Copies the contact email and confirms for a moment
#[component]
fn CopyEmailButton() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let on_click = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::logging::warn;

            use crate::ui::clipboard::copy_text;

            // how long the confirmation stays up
            const COPIED_FOR_MS: u32 = 2000;

            leptos::task::spawn_local(async move {
                match copy_text(PROFILE.email).await {
                    Ok(()) => {
                        set_copied.set(true);
                        TimeoutFuture::new(COPIED_FOR_MS).await;
                        set_copied.try_set(false);
                    }
                    Err(err) => warn!("footer: could not copy email: {err}"),
                }
            });
        }

        #[cfg(feature = "ssr")]
        let _ = set_copied;
    };

    view! {
        <button
            class="mt-6 flex items-center gap-2 text-sm uppercase tracking-widest text-gray-400 hover:text-cyan-400 transition-colors"
            on:click=on_click
        >
            <Show
                when=move || copied.get()
                fallback=|| view! { <Icon name=icons::COPY class="w-4 h-4" /> <span>"Copy email"</span> }
            >
                <Icon name=icons::CHECK class="w-4 h-4 text-cyan-400" />
                <span>"Copied"</span>
            </Show>
        </button>
    }
}
