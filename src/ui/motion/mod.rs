//! Scroll-driven motion for page sections
//!
//! Sections describe what should move with [`Binding`] records and hand
//! them to the hooks here. All bindings are driven by one engine that owns
//! the page's scroll and resize listeners; see `engine.rs`. When the engine
//! cannot run, the hooks do nothing and the page stays static.

#[cfg(not(feature = "ssr"))]
mod engine;
#[cfg(not(feature = "ssr"))]
mod style;

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::config::MotionConfig;
use crate::core::reveal::{Binding, TriggerWindow};

/// Reasons the motion engine is not running
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no browser window available")]
    NoWindow,
    #[error("motion is disabled by configuration")]
    Disabled,
    #[error("user prefers reduced motion")]
    ReducedMotion,
    #[error("element is not attached to the document")]
    Detached,
}

/// Motion configuration from context, or the defaults
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// Default reveal window from the configuration
pub fn default_window(config: &MotionConfig) -> TriggerWindow {
    TriggerWindow::new(config.reveal_start, config.reveal_end)
}

/// Resolve the motion configuration for this render and provide it as context.
///
/// The server takes it from context (see `main.rs`); the browser reads back
/// the JSON the server embedded in the page.
pub fn provide_motion_config() -> MotionConfig {
    #[cfg(feature = "ssr")]
    let config = use_motion_config();

    #[cfg(not(feature = "ssr"))]
    let config = read_embedded_config();

    provide_context(config.clone());
    config
}

#[cfg(not(feature = "ssr"))]
fn read_embedded_config() -> MotionConfig {
    use crate::core::config::MOTION_CONFIG_ELEMENT_ID;
    use leptos::logging::warn;

    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOTION_CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json.map(|json| MotionConfig::from_json(&json)) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            warn!("motion: ignoring embedded config: {err}");
            MotionConfig::default()
        }
        None => MotionConfig::default(),
    }
}

/// Drive `binding` against the element behind `node` once it is mounted.
///
/// The binding is released when the calling component is cleaned up.
pub fn use_reveal<E>(node: NodeRef<E>, binding: Binding)
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    use_reveal_on(node, node, binding);
}

/// Like [`use_reveal`], but the scroll window is measured on `trigger`
/// while the effect is applied to `animated`.
pub fn use_reveal_on<T, A>(trigger: NodeRef<T>, animated: NodeRef<A>, binding: Binding)
where
    T: ElementType + 'static,
    T::Output: JsCast + Clone + 'static,
    A: ElementType + 'static,
    A::Output: JsCast + Clone + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::reveal::BindingId;

        let config = use_motion_config();
        let registered = StoredValue::new(None::<BindingId>);

        Effect::new(move |_| {
            let (Some(trigger), Some(animated)) = (trigger.get(), animated.get()) else {
                return;
            };
            if registered.get_value().is_some() {
                return;
            }
            let trigger: web_sys::HtmlElement = trigger.unchecked_into();
            let animated: web_sys::HtmlElement = animated.unchecked_into();
            // on error the element keeps its static styling
            if let Ok(id) = engine::register(&config, trigger, animated, binding) {
                registered.set_value(Some(id));
            }
        });

        on_cleanup(move || {
            if let Some(id) = registered.try_get_value().flatten() {
                engine::release(id);
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (trigger, animated, binding);
    }
}

/// Pin `wrapper` and translate `track` horizontally while it is scrolled
/// through. `track` holds `card_count` viewport-wide cards.
pub fn use_carousel(
    wrapper: NodeRef<leptos::html::Div>,
    track: NodeRef<leptos::html::Div>,
    card_count: usize,
) {
    #[cfg(not(feature = "ssr"))]
    {
        use engine::CarouselId;

        let config = use_motion_config();
        let registered = StoredValue::new(None::<CarouselId>);

        Effect::new(move |_| {
            let (Some(wrapper), Some(track)) = (wrapper.get(), track.get()) else {
                return;
            };
            if registered.get_value().is_some() {
                return;
            }
            let wrapper: web_sys::HtmlElement = wrapper.unchecked_into();
            let track: web_sys::HtmlElement = track.unchecked_into();
            if let Ok(id) = engine::register_carousel(&config, wrapper, track, card_count) {
                registered.set_value(Some(id));
            }
        });

        on_cleanup(move || {
            if let Some(id) = registered.try_get_value().flatten() {
                engine::release_carousel(id);
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (wrapper, track, card_count);
    }
}
