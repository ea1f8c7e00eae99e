use leptos::html::Div;
use leptos::prelude::*;

use super::edges;
use crate::core::content::{CERTIFICATION_BLURB, CERTIFICATIONS, Certification};
use crate::core::deck::{AUTO_CLOSE, COLLAPSED_WIDTH, CardDeck, EXPANDED_WIDTH};
use crate::core::reveal::{Binding, Keyword, Pose, ToggleActions, TriggerWindow, Tween};
use crate::ui::motion::use_reveal;

const CARD_HEIGHT: u32 = 500;

/// Certifications as a grid on small screens and an expandable tray of
/// vertical cards on desktop
#[component]
pub fn CertificationsSection() -> impl IntoView {
    let deck = RwSignal::new(CardDeck::new(CERTIFICATIONS.len()));
    let auto_close = StoredValue::new(None::<TimeoutHandle>);

    let cancel_auto_close = move || {
        if let Some(handle) = auto_close.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let on_select = Callback::new(move |index: usize| {
        cancel_auto_close();
        let expanded = deck.try_update(|deck| deck.select(index)).unwrap_or(false);
        if expanded {
            let handle = set_timeout_with_handle(
                move || {
                    deck.try_update(CardDeck::close);
                },
                AUTO_CLOSE,
            );
            auto_close.set_value(handle.ok());
        }
    });

    let on_close = Callback::new(move |_: ()| {
        cancel_auto_close();
        deck.update(CardDeck::close);
    });

    on_cleanup(cancel_auto_close);

    view! {
        <div id="certifications" class="relative min-h-screen bg-black text-white py-20 px-8 z-10">
            <div class="max-w-7xl mx-auto">
                <div class="mb-16">
                    <p class="text-sm uppercase tracking-widest text-gray-500 mb-4">"PROFESSIONAL CREDENTIALS"</p>
                    <h2 class="text-5xl md:text-7xl lg:text-8xl font-bold text-white leading-tight">
                        "Certifications"
                    </h2>
                </div>

                <div class="lg:hidden grid grid-cols-1 md:grid-cols-2 gap-8 mt-20">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="bg-gray-900 rounded-2xl p-6 hover:bg-gray-800 transition-colors border border-gray-800">
                                    <div class="text-cyan-400 text-sm uppercase tracking-widest mb-3">{cert.year}</div>
                                    <h3 class="text-2xl md:text-3xl font-bold mb-2">{cert.title}</h3>
                                    <p class="text-gray-400 text-base mb-3">{cert.level}</p>
                                    <span class="text-sm text-gray-500">{cert.organization}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hidden lg:block relative mt-20">
                    <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-cyan-500/20 to-transparent rounded-3xl backdrop-blur-sm border-t border-cyan-500/30 z-30"></div>
                    <div class="relative flex gap-6 pb-8 pt-12 justify-center overflow-hidden">
                        {CERTIFICATIONS
                            .iter()
                            .enumerate()
                            .map(|(index, cert)| {
                                view! {
                                    <DeckCard
                                        index=index
                                        cert=*cert
                                        deck=deck
                                        on_select=on_select
                                        on_close=on_close
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeckCard(
    index: usize,
    cert: Certification,
    deck: RwSignal<CardDeck>,
    on_select: Callback<usize>,
    on_close: Callback<()>,
) -> impl IntoView {
    let slot = NodeRef::<Div>::new();
    use_reveal(
        slot,
        Binding::toggle(
            TriggerWindow::at(edges(Keyword::Top, Keyword::Bottom, -100.0)),
            ToggleActions::PLAY_REVERSE,
            Tween::enter(
                Pose::IDENTITY
                    .with_opacity(0.0)
                    .with_y(100.0)
                    .with_rotate_x(-45.0),
            )
            .duration(800)
            .delay(index as u32 * 100),
        ),
    );

    let selected = move || deck.with(|deck| deck.is_selected(index));
    let card_style = move || {
        deck.with(|deck| {
            let width = if deck.is_selected(index) {
                EXPANDED_WIDTH
            } else {
                COLLAPSED_WIDTH
            };
            format!(
                "width: {width}px; height: {CARD_HEIGHT}px; translate: {}px 0; z-index: {};",
                deck.shift_for(index),
                if deck.is_selected(index) { 100 } else { 10 }
            )
        })
    };

    view! {
        <div node_ref=slot class="perspective flex-shrink-0">
            <div class="cert-float" style=format!("animation-delay: {}ms;", index * 300)>
                <div
                    class="cert-card relative bg-gray-900 rounded-2xl cursor-pointer overflow-hidden group"
                    class:cert-dimmed=move || deck.with(|deck| deck.is_dimmed(index))
                    style=card_style
                    on:click=move |_| on_select.run(index)
                >
                    <div class="absolute inset-0 rounded-2xl bg-gradient-to-br from-white via-cyan-400 to-cyan-600 opacity-0 group-hover:opacity-100 transition-opacity duration-500 p-[2px]">
                        <div class="absolute inset-[2px] bg-gray-900 rounded-2xl"></div>
                    </div>

                    <Show when=selected>
                        <div class="absolute inset-0 rounded-2xl overflow-hidden pointer-events-none">
                            <div class="cert-border absolute inset-0 p-[2px]">
                                <div class="absolute inset-[2px] bg-gray-900 rounded-2xl"></div>
                            </div>
                        </div>
                    </Show>

                    <Show
                        when=selected
                        fallback=move || {
                            view! {
                                <div class="relative z-10 h-full [writing-mode:vertical-rl]">
                                    <div class="p-6 h-full flex items-center justify-center hover:bg-gray-800 transition-all">
                                        <div class="text-center">
                                            <div class="text-cyan-400 text-xs uppercase tracking-widest mb-3 rotate-180">{cert.year}</div>
                                            <h3 class="text-xl font-bold mb-2 rotate-180">{cert.title}</h3>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    >
                        <div class="relative z-10 h-full p-8 flex flex-col justify-between animate-[fade-in_400ms_ease_both]">
                            <div>
                                <div class="text-cyan-400 text-sm uppercase tracking-widest mb-4">{cert.year}</div>
                                <h3 class="text-3xl font-bold mb-4">{cert.title}</h3>
                                <p class="text-gray-400 text-lg mb-4">{cert.level}</p>
                                <p class="text-gray-500 text-base mb-6">{cert.organization}</p>
                                <div class="border-t border-gray-700 pt-6 mt-6">
                                    <p class="text-sm text-gray-400 leading-relaxed">{CERTIFICATION_BLURB}</p>
                                </div>
                            </div>
                            <button
                                class="mt-4 px-6 py-2 bg-cyan-500 hover:bg-cyan-600 rounded-lg text-sm font-semibold transition-all hover:scale-105"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_close.run(());
                                }
                            >
                                "Close"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
