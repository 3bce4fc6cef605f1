use crate::app::{Effect, WindowGeometry};
use anyhow::{Result, anyhow};
use tracing::{debug, error, warn};
use wasm_bindgen::JsValue;
use web_sys::{Event, Window};

const TIMER_ELEMENT_ID: &str = "timer";
const CLOCK_ELEMENT_ID: &str = "clock";

/// Carry out reducer effects in order. Navigation ends the page, so nothing
/// queued after it runs.
pub(crate) fn run_effects(window: &Window, effects: Vec<Effect>, event: Option<&Event>) {
    for effect in effects {
        let terminal = matches!(effect, Effect::Navigate(_));
        if let Err(err) = run_effect(window, effect, event) {
            error!("{err:#}");
        }
        if terminal {
            break;
        }
    }
}

fn run_effect(window: &Window, effect: Effect, event: Option<&Event>) -> Result<()> {
    match effect {
        Effect::PreventDefault => {
            if let Some(event) = event {
                event.prevent_default();
            }
        }
        Effect::Navigate(target) => {
            window
                .location()
                .set_href(&target.href())
                .map_err(|err| js_error("navigation failed", err))?;
        }
        Effect::OpenPresenterWindow(presenter) => {
            let features = presenter.features(opener_geometry(window));
            let opened = window
                .open_with_url_and_target_and_features(&presenter.href(), &presenter.name, &features)
                .map_err(|err| js_error("window.open failed", err))?;
            if opened.is_none() {
                warn!(href = %presenter.href(), "Presenter window was blocked");
            }
        }
        Effect::RenderTimer(text) => set_text(window, TIMER_ELEMENT_ID, &text),
        Effect::RenderClock(text) => set_text(window, CLOCK_ELEMENT_ID, &text),
    }
    Ok(())
}

fn set_text(window: &Window, id: &str, text: &str) {
    match window.document().and_then(|doc| doc.get_element_by_id(id)) {
        Some(element) => element.set_text_content(Some(text)),
        None => debug!(%id, "Display element missing"),
    }
}

fn opener_geometry(window: &Window) -> WindowGeometry {
    let number = |name: &str| {
        js_sys::Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    };
    WindowGeometry {
        screen_x: number("screenX"),
        screen_y: number("screenY"),
        outer_width: number("outerWidth"),
    }
}

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{context}: {err:?}")
}
