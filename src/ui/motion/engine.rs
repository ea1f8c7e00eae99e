//! The page's single motion engine
//!
//! Created on first use and kept for the rest of the page session. It owns
//! the only scroll and resize listeners, coalesces scroll events into one
//! dispatch per animation frame, moves pinned carousels first and then runs
//! every reveal binding in registration order.

use std::cell::{Cell, OnceCell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::EngineError;
use super::style;
use crate::core::carousel::{Carousel, PinState};
use crate::core::config::{CarouselTuning, MotionConfig};
use crate::core::reveal::{
    Action, Binding, BindingId, Effect, Rect, ScrollDispatcher, Targets, Update, Viewport,
    stagger_progress,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const GLYPH_SELECTOR: &str = ".glyph";
const STACKED_CLASS: &str = "carousel-stacked";

thread_local! {
    static ENGINE: OnceCell<Result<Rc<Engine>, EngineError>> = const { OnceCell::new() };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselId(u64);

/// Element a binding measures plus the nodes it animates
struct Target {
    trigger: HtmlElement,
    animated: HtmlElement,
    parts: Vec<HtmlElement>,
}

impl Target {
    fn new(trigger: HtmlElement, animated: HtmlElement, binding: &Binding) -> Self {
        let mut parts = match binding.targets {
            Targets::Glyphs => query_glyphs(&animated),
            Targets::Element => Vec::new(),
        };
        if parts.is_empty() {
            parts.push(animated.clone());
        }
        Self {
            trigger,
            animated,
            parts,
        }
    }

    /// Put every part at the start of its effect, without transitions
    fn prepare(&self, binding: &Binding) {
        if let Effect::Tween(tween) = binding.effect {
            for part in &self.parts {
                style::set_transition(part, "none");
                style::set_pose(part, &tween.from);
            }
        }
    }

    fn measure(&self) -> Option<Rect> {
        if !self.trigger.is_connected() || !self.animated.is_connected() {
            return None;
        }
        let rect = self.trigger.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn apply(&self, binding: &Binding, update: Update) {
        match (binding.effect, update) {
            (Effect::Tween(tween), Update::Scrub(progress)) => {
                let count = self.parts.len();
                for (index, part) in self.parts.iter().enumerate() {
                    let local = stagger_progress(progress, index, count, tween.scrub_spread);
                    style::set_pose(part, &tween.pose_at(local));
                }
            }
            (Effect::Tween(tween), Update::Toggle(action)) => {
                let pose = match action {
                    Action::Play => tween.to,
                    Action::Reverse => tween.from,
                    Action::NoOp => return,
                };
                for (index, part) in self.parts.iter().enumerate() {
                    style::set_transition(part, &tween.transition_css(index));
                    style::set_pose(part, &pose);
                }
            }
            (Effect::Backdrop(fade), Update::Scrub(progress)) => {
                style::set_background(&self.animated, fade.at(progress));
            }
            (Effect::Backdrop(fade), Update::Toggle(action)) => match action {
                Action::Play => style::set_background(&self.animated, fade.to),
                Action::Reverse => style::set_background(&self.animated, fade.from),
                Action::NoOp => {}
            },
        }
    }
}

fn query_glyphs(element: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(list) = element.query_selector_all(GLYPH_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// A carousel wrapper pinned while its track scrolls sideways
struct PinnedCarousel {
    id: CarouselId,
    wrapper: HtmlElement,
    track: HtmlElement,
    model: Carousel,
    stacked: bool,
    needs_layout: bool,
}

impl PinnedCarousel {
    /// Vertical distance scrolled past the top of the wrapper
    fn scrolled(&self) -> f64 {
        -self.wrapper.get_bounding_client_rect().top()
    }

    fn card_width(&self, viewport: &Viewport) -> f64 {
        self.track
            .first_element_child()
            .and_then(|card| card.dyn_into::<HtmlElement>().ok())
            .map(|card| card.offset_width() as f64)
            .filter(|width| *width > 0.0)
            .unwrap_or(viewport.width)
    }

    fn layout(&mut self, viewport: &Viewport, tuning: &CarouselTuning) {
        self.needs_layout = false;
        self.stacked = viewport.width < tuning.min_viewport_width;
        let classes = self.wrapper.class_list();

        if self.stacked {
            let _ = classes.add_1(STACKED_CLASS);
            style::set_height(&self.wrapper, None);
            style::set_translate_x(&self.track, 0.0);
            return;
        }

        let _ = classes.remove_1(STACKED_CLASS);
        let card_width = self.card_width(viewport);
        self.model.resize(viewport.width, card_width);
        style::set_height(
            &self.wrapper,
            Some(viewport.height + self.model.scroll_distance()),
        );
    }

    fn update(&mut self, viewport: &Viewport, relayout: bool, tuning: &CarouselTuning) {
        if relayout || self.needs_layout {
            self.layout(viewport, tuning);
        }
        if !self.stacked {
            let x = self.model.translate_for(self.scrolled());
            style::set_translate_x(&self.track, x);
        }
    }

    /// Scroll delta that settles the track on the nearest card
    fn snap_delta(&self) -> Option<f64> {
        if self.stacked {
            return None;
        }
        let scrolled = self.scrolled();
        if self.model.pin_state(scrolled) != PinState::Pinned {
            return None;
        }
        let delta = self.model.snap_offset(scrolled) - scrolled;
        (delta.abs() >= 1.0).then_some(delta)
    }
}

struct Engine {
    config: MotionConfig,
    bindings: RefCell<ScrollDispatcher<Target>>,
    carousels: RefCell<Vec<PinnedCarousel>>,
    next_carousel: Cell<u64>,
    frame_pending: Cell<bool>,
    layout_dirty: Cell<bool>,
    snap_timer: Cell<Option<TimeoutHandle>>,
    // held for the page's lifetime
    _listeners: Vec<WindowListenerHandle>,
}

impl Engine {
    fn start(config: &MotionConfig) -> Result<Self, EngineError> {
        if !config.enabled {
            return Err(EngineError::Disabled);
        }
        let window = web_sys::window().ok_or(EngineError::NoWindow)?;
        if prefers_reduced_motion(&window) {
            return Err(EngineError::ReducedMotion);
        }

        let listeners = vec![
            window_event_listener(ev::scroll, |_| with_running(|engine| engine.on_scroll())),
            window_event_listener(ev::resize, |_| with_running(|engine| engine.on_resize())),
        ];

        Ok(Self {
            config: config.clone(),
            bindings: RefCell::new(ScrollDispatcher::new()),
            carousels: RefCell::new(Vec::new()),
            next_carousel: Cell::new(0),
            frame_pending: Cell::new(false),
            layout_dirty: Cell::new(false),
            snap_timer: Cell::new(None),
            _listeners: listeners,
        })
    }

    /// Request a dispatch on the next animation frame, once
    fn schedule(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        request_animation_frame(|| with_running(|engine| engine.frame()));
    }

    fn on_scroll(&self) {
        self.schedule();
        if self.config.carousel.snap && !self.carousels.borrow().is_empty() {
            self.arm_snap();
        }
    }

    fn on_resize(&self) {
        self.layout_dirty.set(true);
        self.bindings.borrow_mut().invalidate();
        self.schedule();
    }

    /// Restart the snap timer; snapping waits for scrolling to pause
    fn arm_snap(&self) {
        if let Some(handle) = self.snap_timer.take() {
            handle.clear();
        }
        let delay = Duration::from_millis(self.config.carousel.snap_delay_ms);
        let handle = set_timeout_with_handle(|| with_running(|engine| engine.snap()), delay);
        self.snap_timer.set(handle.ok());
    }

    fn snap(&self) {
        self.snap_timer.set(None);
        let Some(window) = web_sys::window() else {
            return;
        };
        let delta = self
            .carousels
            .borrow()
            .iter()
            .find_map(PinnedCarousel::snap_delta);

        if let Some(delta) = delta {
            let options = ScrollToOptions::new();
            options.set_top(delta);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_by_with_scroll_to_options(&options);
        }
    }

    fn frame(&self) {
        self.frame_pending.set(false);
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport = viewport_of(&window);
        let relayout = self.layout_dirty.replace(false);

        self.carousels.borrow_mut().retain_mut(|carousel| {
            if !carousel.wrapper.is_connected() {
                return false;
            }
            carousel.update(&viewport, relayout, &self.config.carousel);
            true
        });

        let cancelled = self.bindings.borrow_mut().dispatch(
            &viewport,
            Target::measure,
            |target, binding, update| target.apply(binding, update),
        );
        if cancelled > 0 {
            log!("motion: dropped {cancelled} bindings for removed elements");
        }
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn viewport_of(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    Viewport::new(width.unwrap_or(0.0), height.unwrap_or(0.0))
}

/// The engine, starting it on first call
fn instance(config: &MotionConfig) -> Result<Rc<Engine>, EngineError> {
    ENGINE.with(|cell| {
        cell.get_or_init(|| {
            let started = Engine::start(config).map(Rc::new);
            match &started {
                Ok(_) => log!("motion: engine started"),
                Err(err) => warn!("motion: page stays static: {err}"),
            }
            started
        })
        .clone()
    })
}

/// Run `f` against the engine if it has started successfully
fn with_running(f: impl FnOnce(&Engine)) {
    let engine = ENGINE.with(|cell| cell.get().and_then(|started| started.as_ref().ok()).cloned());
    if let Some(engine) = engine {
        f(&engine);
    }
}

pub fn register(
    config: &MotionConfig,
    trigger: HtmlElement,
    animated: HtmlElement,
    binding: Binding,
) -> Result<BindingId, EngineError> {
    let engine = instance(config)?;
    if !trigger.is_connected() || !animated.is_connected() {
        return Err(EngineError::Detached);
    }

    let target = Target::new(trigger, animated, &binding);
    target.prepare(&binding);
    let id = engine.bindings.borrow_mut().register(binding, target);
    engine.schedule();
    Ok(id)
}

pub fn release(id: BindingId) {
    with_running(|engine| {
        engine.bindings.borrow_mut().release(id);
    });
}

pub fn register_carousel(
    config: &MotionConfig,
    wrapper: HtmlElement,
    track: HtmlElement,
    card_count: usize,
) -> Result<CarouselId, EngineError> {
    let engine = instance(config)?;
    if !wrapper.is_connected() {
        return Err(EngineError::Detached);
    }

    let id = CarouselId(engine.next_carousel.get());
    engine.next_carousel.set(id.0 + 1);

    let tuning = &engine.config.carousel;
    engine.carousels.borrow_mut().push(PinnedCarousel {
        id,
        wrapper,
        track,
        model: Carousel::new(card_count, 0.0, tuning.gap, 0.0, tuning.scroll_multiplier),
        stacked: false,
        needs_layout: true,
    });
    engine.schedule();
    Ok(id)
}

pub fn release_carousel(id: CarouselId) {
    with_running(|engine| {
        engine.carousels.borrow_mut().retain(|carousel| {
            if carousel.id != id {
                return true;
            }
            style::set_height(&carousel.wrapper, None);
            style::set_translate_x(&carousel.track, 0.0);
            false
        });
    });
}
