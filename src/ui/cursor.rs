//! Custom pointer: a dot on the raw position, a smoothed outline ring,
//! idle particles and hint messages after long inactivity.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::IDLE_HINTS;
use crate::core::pointer::{IdleStage, particle_ring};

const PARTICLE_COUNT: usize = 8;
const PARTICLE_RADIUS: f64 = 34.0;

/// Custom cursor, installed only on devices with a fine pointer.
///
/// While installed the native cursor is hidden through the
/// `custom-cursor` class on the root element.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let (installed, set_installed) = signal(false);
    let (visible, set_visible) = signal(false);
    let (over_interactive, set_over_interactive) = signal(false);
    let (stage, set_stage) = signal(IdleStage::Active);
    let dot = NodeRef::<Div>::new();
    let outline = NodeRef::<Div>::new();

    #[cfg(not(feature = "ssr"))]
    client::install(
        client::Signals {
            set_installed,
            set_visible,
            set_over_interactive,
            set_stage,
        },
        dot,
        outline,
    );

    #[cfg(feature = "ssr")]
    let _ = (set_installed, set_visible, set_over_interactive, set_stage);

    view! {
        <Show when=move || installed.get()>
            <div
                node_ref=dot
                class="cursor-dot"
                class:cursor-hidden=move || !visible.get()
                class:cursor-over=move || over_interactive.get()
                aria-hidden="true"
            ></div>
            <div
                node_ref=outline
                class="cursor-outline"
                class:cursor-hidden=move || !visible.get()
                class:cursor-over=move || over_interactive.get()
                data-stage=move || stage.get().to_string()
                aria-hidden="true"
            >
                <div class="cursor-ring"></div>
                <div class="cursor-particles" class:cursor-particles-on=move || stage.get().is_idle()>
                    <IdleParticles />
                </div>
                {move || {
                    stage
                        .get()
                        .hint()
                        .and_then(|tier| IDLE_HINTS.get(tier))
                        .map(|message| view! { <div class="cursor-hint">{*message}</div> })
                }}
            </div>
        </Show>
    }
}

/// Decorative ring shown around the outline while the pointer is idle
#[component]
fn IdleParticles() -> impl IntoView {
    particle_ring(PARTICLE_COUNT, PARTICLE_RADIUS, 0.0)
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let style = format!(
                "left: {:.1}px; top: {:.1}px; animation-delay: {}ms;",
                point.x,
                point.y,
                i * 120
            );
            view! { <span class="cursor-particle" style=style></span> }
        })
        .collect_view()
}

#[cfg(not(feature = "ssr"))]
mod client {
    use std::time::Duration;

    use leptos::ev;
    use leptos::html::Div;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos::wasm_bindgen::JsCast;

    use crate::core::config::CursorTuning;
    use crate::core::pointer::{Follower, IdleStage, IdleTracker, Point};
    use crate::core::reveal::css_number;
    use crate::ui::motion::use_motion_config;

    const FINE_POINTER_QUERY: &str = "(pointer: fine)";
    const ROOT_CLASS: &str = "custom-cursor";
    const INTERACTIVE_SELECTOR: &str =
        "a, button, input, textarea, select, [role=button], .cursor-pointer";

    pub struct Signals {
        pub set_installed: WriteSignal<bool>,
        pub set_visible: WriteSignal<bool>,
        pub set_over_interactive: WriteSignal<bool>,
        pub set_stage: WriteSignal<IdleStage>,
    }

    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    fn has_fine_pointer() -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(FINE_POINTER_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn set_root_class(on: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if on {
            classes.add_1(ROOT_CLASS)
        } else {
            classes.remove_1(ROOT_CLASS)
        };
    }

    fn place(node: NodeRef<Div>, point: Point) {
        if let Some(element) = node.get_untracked() {
            let _ = element.style().set_property(
                "transform",
                &format!(
                    "translate3d({}px, {}px, 0px)",
                    css_number(point.x),
                    css_number(point.y)
                ),
            );
        }
    }

    fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
        target
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some()
    }

    /// Step the outline towards the pointer once per frame until it settles
    /// or the component is gone.
    fn animate_outline(
        follower: StoredValue<Follower>,
        animating: StoredValue<bool>,
        outline: NodeRef<Div>,
    ) {
        let Some(position) = follower.try_update_value(Follower::step) else {
            return;
        };
        place(outline, position);

        if follower.try_with_value(Follower::is_settled).unwrap_or(true) {
            animating.try_set_value(false);
            return;
        }
        request_animation_frame(move || animate_outline(follower, animating, outline));
    }

    /// Arm the single idle timer at the tracker's next deadline
    fn arm_idle_timer(
        tracker: StoredValue<IdleTracker>,
        timer: StoredValue<Option<TimeoutHandle>>,
        set_stage: WriteSignal<IdleStage>,
    ) {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        let Some(deadline) = tracker.try_with_value(IdleTracker::next_deadline).flatten() else {
            return;
        };

        let wait = (deadline - now_ms()).max(0.0);
        let handle = set_timeout_with_handle(
            move || {
                let Some(changed) = tracker.try_update_value(|t| t.poll(now_ms())) else {
                    return;
                };
                if changed {
                    if let Some(stage) = tracker.try_with_value(IdleTracker::stage) {
                        set_stage.set(stage);
                    }
                }
                arm_idle_timer(tracker, timer, set_stage);
            },
            Duration::from_millis(wait.ceil() as u64),
        );
        timer.try_set_value(handle.ok());
    }

    pub fn install(signals: Signals, dot: NodeRef<Div>, outline: NodeRef<Div>) {
        let config = use_motion_config();
        // touch screens and static pages keep the native pointer
        if !config.wants_custom_cursor(has_fine_pointer()) {
            log!("cursor: native pointer kept");
            return;
        }
        let tuning: CursorTuning = config.cursor;

        let follower = StoredValue::new(Follower::new(tuning.gain));
        let animating = StoredValue::new(false);
        let seen_pointer = StoredValue::new(false);
        let tracker = StoredValue::new(IdleTracker::new(&tuning, now_ms()));
        let timer = StoredValue::new(None::<TimeoutHandle>);
        let Signals {
            set_installed,
            set_visible,
            set_over_interactive,
            set_stage,
        } = signals;

        let record_input = move || {
            let woke = tracker
                .try_update_value(|t| t.record_input(now_ms()))
                .unwrap_or(false);
            if woke {
                set_stage.set(IdleStage::Active);
            }
            arm_idle_timer(tracker, timer, set_stage);
        };

        Effect::new(move |started: Option<bool>| {
            if started.is_some() {
                return true;
            }
            set_root_class(true);
            set_installed.set(true);
            arm_idle_timer(tracker, timer, set_stage);
            true
        });

        let on_move = window_event_listener(ev::mousemove, move |event| {
            let point = Point::new(event.client_x() as f64, event.client_y() as f64);
            place(dot, point);

            if !seen_pointer.get_value() {
                seen_pointer.set_value(true);
                follower.update_value(|f| f.jump_to(point));
                place(outline, point);
            } else {
                follower.update_value(|f| f.set_target(point));
            }
            set_visible.set(true);
            set_over_interactive.set(is_interactive(event.target()));

            if !animating.get_value() {
                animating.set_value(true);
                request_animation_frame(move || animate_outline(follower, animating, outline));
            }
            record_input();
        });
        let on_down = window_event_listener(ev::mousedown, move |_| record_input());
        let on_key = window_event_listener(ev::keydown, move |_| record_input());
        let on_scroll = window_event_listener(ev::scroll, move |_| record_input());
        let on_out = window_event_listener(ev::mouseout, move |event| {
            // no related target means the pointer left the window
            if event.related_target().is_none() {
                set_visible.set(false);
            }
        });

        on_cleanup(move || {
            for handle in [on_move, on_down, on_key, on_scroll, on_out] {
                handle.remove();
            }
            if let Some(handle) = timer.try_update_value(Option::take).flatten() {
                handle.clear();
            }
            set_root_class(false);
        });
    }
}
