use leptos::prelude::*;

use super::Navbar;
use crate::core::content::PROFILE;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::use_motion_config;

/// Full-height intro with the handle, the typed role line and a Connect link
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div id="home" class="relative h-screen bg-black text-white overflow-hidden">
            <div class="relative z-10 pointer-events-none">
                <div class="pointer-events-auto">
                    <Navbar />
                </div>

                <div class="h-[calc(100vh-80px)] flex flex-col justify-start md:justify-between pointer-events-none">
                    <header class="px-8 pt-20 md:pt-4">
                        <h1 class="text-6xl md:text-9xl lg:text-[12rem] font-bold">{PROFILE.handle}</h1>
                    </header>

                    <div class="p-4 md:p-8 pb-16 md:pb-36 mt-auto md:mt-0">
                        <div class="flex flex-col md:flex-row justify-between items-start md:items-end gap-8">
                            <div class="flex-1">
                                <RoleTypewriter />
                            </div>

                            <div class="flex gap-4 pointer-events-auto">
                                <a
                                    href="#info"
                                    class="group flex items-center gap-3 px-8 py-4 bg-cyan-400 text-black rounded-full font-medium text-lg hover:bg-cyan-300 transition-all duration-300 hover:gap-5"
                                >
                                    <span>"Connect"</span>
                                    <Icon
                                        name=icons::ARROW_RIGHT
                                        class="w-5 h-5 transition-transform group-hover:translate-x-1"
                                    />
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Role line that types and deletes each role in turn
#[component]
fn RoleTypewriter() -> impl IntoView {
    let config = use_motion_config();
    let roles = PROFILE.roles;

    // static pages show the first role in full
    let initial = if config.enabled {
        String::new()
    } else {
        roles.first().copied().unwrap_or_default().to_string()
    };
    let (text, set_text) = signal(initial);

    #[cfg(not(feature = "ssr"))]
    if config.enabled {
        use std::time::Duration;

        use crate::core::typewriter::Typewriter;

        let typewriter = StoredValue::new(Typewriter::new(roles.iter().copied(), config.typewriter));
        let timer = StoredValue::new(None::<TimeoutHandle>);

        fn schedule(
            typewriter: StoredValue<Typewriter>,
            timer: StoredValue<Option<TimeoutHandle>>,
            set_text: WriteSignal<String>,
            delay: Duration,
        ) {
            let handle = set_timeout_with_handle(
                move || {
                    let Some((next, shown)) = typewriter.try_update_value(|tw| {
                        let next = tw.tick();
                        (next, tw.display().to_string())
                    }) else {
                        return;
                    };
                    set_text.set(shown);
                    schedule(typewriter, timer, set_text, next);
                },
                delay,
            );
            timer.try_set_value(handle.ok());
        }

        let first = typewriter.with_value(Typewriter::initial_delay);
        schedule(typewriter, timer, set_text, first);

        on_cleanup(move || {
            if let Some(handle) = timer.try_update_value(Option::take).flatten() {
                handle.clear();
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = set_text;

    view! {
        <h2 class="text-2xl md:text-4xl lg:text-5xl font-light leading-tight whitespace-pre-line">
            {move || text.get()}
            <span class="typewriter-caret inline-block w-1 h-6 md:h-10 lg:h-12 bg-cyan-400 ml-1 align-middle"></span>
            {PROFILE.role_suffix}
        </h2>
    }
}
