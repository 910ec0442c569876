//! Browser binding of the rock map: Leaflet behind [rusty_rocks::MapAdapter],
//! DOM events turned into [rusty_rocks::ViewController] transitions.

pub mod browser;
pub mod leaflet;
pub mod state;

use rusty_rocks::{Dataset, SearchMode, ViewController};
use tracing::info;
use wasm_bindgen::{JsCast, JsValue, prelude::*};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use leaflet::LeafletMap;
use state::{
    CLEAR_SEARCH, GPS_TOGGLE, LOCATION_SEARCH_FORM, Page, RESET_VIEW, SEARCH_FORM, StateHandle,
};

const MAP_ELEMENT: &str = "map";

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn on(
    document: &Document,
    id: &str,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

fn search_handler(state: &StateHandle, mode: SearchMode) -> impl FnMut(Event) + 'static {
    let state = state.clone();
    move |event: Event| {
        event.prevent_default();
        let query = state.page.query(mode);
        state.dispatch(|c| c.submit_search(mode, &query));
    }
}

fn click_handler(
    state: &StateHandle,
    transition: fn(&mut ViewController<LeafletMap>) -> Vec<rusty_rocks::Effect>,
) -> impl FnMut(Event) + 'static {
    let state = state.clone();
    move |_: Event| state.dispatch(transition)
}

fn wire_events(document: &Document, state: &StateHandle) -> Result<(), JsValue> {
    on(document, SEARCH_FORM, "submit", search_handler(state, SearchMode::ByName))?;
    on(document, LOCATION_SEARCH_FORM, "submit", search_handler(state, SearchMode::ByPlace))?;
    on(document, CLEAR_SEARCH, "click", click_handler(state, ViewController::clear_search))?;
    on(document, RESET_VIEW, "click", click_handler(state, ViewController::reset_view))?;
    on(document, GPS_TOGGLE, "click", click_handler(state, ViewController::toggle_gps))?;
    Ok(())
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window missing"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document missing"))?;

    let map = LeafletMap::new(MAP_ELEMENT)?;
    let page = Page::bind(window, &document)?;
    let state = StateHandle::new(map, page);
    wire_events(&document, &state)?;

    spawn_local(async move {
        let res = Dataset::load(browser::fetch_records()).await;
        info!(ok = res.is_ok(), "dataset fetch finished");
        state.dispatch(|c| c.dataset_loaded(res));
    });

    Ok(())
}
