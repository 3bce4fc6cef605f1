//! Browser bindings: reads page metadata, wires DOM events into the
//! controllers and executes their effects.
//!
//! ```text
//! keydown/touch ──Closure──► Message ──reduce──► Vec<Effect> ──run_effects──► location / window.open / DOM
//! setInterval  ──Closure──► Tick ───────┘
//! ```

mod host;
mod runtime;

use crate::app::{Message, Navigator, PresenterController, PresenterMessage};
use crate::input::{Key, KeyInput, Modifiers};
use crate::logging::init_tracing;
use crate::page::{AUDIENCE_CURRENT_ATTR, DeckPosition, PRESENTER_CURRENT_ATTR, TOTAL_ATTR};
use host::{BrowserSessionStore, JsClock, body_data, load_config};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, KeyboardEvent, TouchEvent, Window};

type WebPresenter = PresenterController<BrowserSessionStore, JsClock>;

/// Scripting surface published as `window.Slides`.
#[wasm_bindgen]
pub struct Slides {
    navigator: Rc<RefCell<Navigator>>,
    window: Window,
}

#[wasm_bindgen]
impl Slides {
    /// Navigate to slide `n`, clamped into the deck.
    pub fn go(&self, n: f64) {
        let effects = self.navigator.borrow_mut().reduce(Message::Go(n as i64));
        runtime::run_effects(&self.window, effects, None);
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> u32 {
        self.navigator.borrow().current()
    }

    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.navigator.borrow().total()
    }
}

/// Handle to a mounted presenter view.
#[wasm_bindgen]
pub struct Presenter {
    controller: Rc<RefCell<WebPresenter>>,
    window: Window,
    tick: js_sys::Function,
    tick_interval_ms: i32,
    interval: Cell<Option<i32>>,
}

#[wasm_bindgen]
impl Presenter {
    /// Render the timer and clock now and keep them ticking.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.interval.get().is_some() {
            return Ok(());
        }
        let effects = self.controller.borrow_mut().start();
        runtime::run_effects(&self.window, effects, None);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(&self.tick, self.tick_interval_ms)
        {
            Ok(handle) => {
                self.interval.set(Some(handle));
                Ok(())
            }
            Err(err) => {
                warn!("Presenter tick could not be scheduled: {err:?}");
                self.controller.borrow_mut().stop();
                Err(err)
            }
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.controller.borrow_mut().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> String {
        self.controller.borrow_mut().elapsed_label()
    }
}

/// Entry point for audience slide pages.
#[wasm_bindgen(js_name = mountNavigator)]
pub fn mount_navigator() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (window, document) = page()?;
    let config = load_config(&document);
    init_tracing(config.log_level);

    let position = DeckPosition::from_attributes(
        body_data(&document, AUDIENCE_CURRENT_ATTR).as_deref(),
        body_data(&document, TOTAL_ATTR).as_deref(),
    );
    let navigator = Rc::new(RefCell::new(Navigator::new(position, config)));

    let keydown = {
        let navigator = Rc::clone(&navigator);
        let window = window.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let message = Message::KeyPressed {
                input: key_input(&event),
                at_millis: js_sys::Date::now().max(0.0) as u64,
            };
            let effects = navigator.borrow_mut().reduce(message);
            let event: &Event = event.as_ref();
            runtime::run_effects(&window, effects, Some(event));
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let touchstart = {
        let navigator = Rc::clone(&navigator);
        Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(screen_x) = first_changed_touch_x(&event) {
                navigator
                    .borrow_mut()
                    .reduce(Message::TouchStarted { screen_x });
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    document.add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())?;
    touchstart.forget();

    let touchend = {
        let navigator = Rc::clone(&navigator);
        let window = window.clone();
        Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(screen_x) = first_changed_touch_x(&event) {
                let effects = navigator.borrow_mut().reduce(Message::TouchEnded { screen_x });
                runtime::run_effects(&window, effects, None);
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    document.add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())?;
    touchend.forget();

    let slides = Slides {
        navigator,
        window: window.clone(),
    };
    js_sys::Reflect::set(&window, &JsValue::from_str("Slides"), &JsValue::from(slides))?;

    info!(
        current = position.current(),
        total = position.total(),
        "Slide navigator mounted"
    );
    Ok(())
}

/// Entry point for presenter pages. The returned handle can stop and restart
/// the timers; dropping it leaves them running.
#[wasm_bindgen(js_name = mountPresenter)]
pub fn mount_presenter() -> Result<Presenter, JsValue> {
    console_error_panic_hook::set_once();
    let (window, document) = page()?;
    let config = load_config(&document);
    init_tracing(config.log_level);

    let position = DeckPosition::from_attributes(
        body_data(&document, PRESENTER_CURRENT_ATTR).as_deref(),
        body_data(&document, TOTAL_ATTR).as_deref(),
    );
    let controller = Rc::new(RefCell::new(PresenterController::new(
        position,
        BrowserSessionStore::for_window(&window),
        JsClock::for_window(&window),
        &config,
    )));

    let keydown = {
        let controller = Rc::clone(&controller);
        let window = window.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let message = PresenterMessage::KeyPressed(key_input(&event));
            let effects = controller.borrow_mut().reduce(message);
            let event: &Event = event.as_ref();
            runtime::run_effects(&window, effects, Some(event));
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let tick = {
        let controller = Rc::clone(&controller);
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let effects = controller.borrow_mut().reduce(PresenterMessage::Tick);
            runtime::run_effects(&window, effects, None);
        }) as Box<dyn FnMut()>)
    };
    let tick_function: js_sys::Function = tick.as_ref().unchecked_ref::<js_sys::Function>().clone();
    tick.forget();

    let presenter = Presenter {
        controller,
        window,
        tick: tick_function,
        tick_interval_ms: i32::try_from(config.tick_interval_ms).unwrap_or(i32::MAX),
        interval: Cell::new(None),
    };
    presenter.start()?;

    info!(
        current = position.current(),
        total = position.total(),
        "Presenter view mounted"
    );
    Ok(presenter)
}

fn page() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    Ok((window, document))
}

fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput::new(
        Key::from_dom(&event.key()),
        Modifiers {
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
            shift: event.shift_key(),
        },
    )
}

fn first_changed_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_x()))
}
