//! Full-screen percentage loader shown while the page starts

use leptos::prelude::*;

use crate::core::content::PROFILE;
use crate::ui::motion::use_motion_config;

/// Cyan overlay counting from 0 to 100 with a sliding name banner.
///
/// Counts one percent per tick, waits the grace period at 100 and then
/// removes itself. Not rendered at all when motion is disabled.
#[component]
pub fn LoaderOverlay() -> impl IntoView {
    let config = use_motion_config();
    let (progress, set_progress) = signal(0u8);
    let (done, set_done) = signal(!config.enabled);

    #[cfg(not(feature = "ssr"))]
    if config.enabled {
        use crate::core::loader::{Loader, LoaderStep};
        use gloo_timers::future::TimeoutFuture;

        let timing = config.loader;
        leptos::task::spawn_local(async move {
            let mut loader = Loader::new();
            loop {
                TimeoutFuture::new(timing.tick_ms as u32).await;
                let step = loader.tick();
                // the overlay was unmounted
                if set_progress.try_set(loader.progress()).is_some() {
                    return;
                }
                match step {
                    LoaderStep::Advanced(_) => {}
                    LoaderStep::Reached | LoaderStep::Done => break,
                }
            }

            TimeoutFuture::new(timing.grace_ms as u32).await;
            if loader.finish() {
                set_done.try_set(true);
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (set_progress, set_done);

    view! {
        <Show when=move || !done.get()>
            <div
                class="loader-overlay fixed inset-0 z-[100] bg-cyan-400 flex flex-col items-center justify-center overflow-hidden"
                role="status"
                aria-live="polite"
            >
                <div class="loader-banner whitespace-nowrap text-[18vw] font-black uppercase text-black leading-none">
                    {PROFILE.display_name}
                </div>
                <div class="mt-8 text-5xl md:text-7xl font-bold text-black tabular-nums">
                    {move || format!("{}%", progress.get())}
                </div>
            </div>
        </Show>
    }
}
