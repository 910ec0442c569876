use rusty_rocks::{PageUpdate, SearchMode};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Window};

pub const SEARCH_FORM: &str = "searchForm";
pub const SEARCH_INPUT: &str = "searchInput";
pub const CLEAR_SEARCH: &str = "clearSearch";
pub const LOCATION_SEARCH_FORM: &str = "locationSearchForm";
pub const LOCATION_SEARCH_INPUT: &str = "locationSearchInput";
pub const GPS_TOGGLE: &str = "gpsToggle";
pub const RESET_VIEW: &str = "resetView";
pub const LOCATION_COUNT: &str = "locationCount";
pub const LOADING_OVERLAY: &str = "loadingOverlay";
pub const LOAD_ERROR: &str = "loadError";

const HIDDEN: &str = "hidden";

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an input")))
}

/// The DOM elements the page reads from and writes to.
pub struct Page {
    window: Window,
    pub search_input: HtmlInputElement,
    pub location_input: HtmlInputElement,
    pub gps_toggle: Element,
    pub location_count: Element,
    loading_overlay: Option<Element>,
    load_error: Option<Element>,
}

impl Page {
    pub fn bind(window: Window, document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            search_input: input(document, SEARCH_INPUT)?,
            location_input: input(document, LOCATION_SEARCH_INPUT)?,
            gps_toggle: element(document, GPS_TOGGLE)?,
            location_count: element(document, LOCATION_COUNT)?,
            loading_overlay: document.get_element_by_id(LOADING_OVERLAY),
            load_error: document.get_element_by_id(LOAD_ERROR),
            window,
        })
    }

    pub fn query(&self, mode: SearchMode) -> String {
        match mode {
            SearchMode::ByName => self.search_input.value(),
            SearchMode::ByPlace => self.location_input.value(),
        }
    }

    pub fn apply(&self, update: PageUpdate) {
        match update {
            PageUpdate::Readout(text) => self.location_count.set_text_content(Some(&text)),
            PageUpdate::ClearQueryFields => {
                self.search_input.set_value("");
                self.location_input.set_value("");
            }
            PageUpdate::HideLoading => {
                if let Some(overlay) = &self.loading_overlay {
                    if let Err(err) = overlay.class_list().add_1(HIDDEN) {
                        warn!("could not hide loading overlay: {err:?}");
                    }
                }
            }
            PageUpdate::ShowLoadError(message) => match &self.load_error {
                Some(banner) => {
                    banner.set_text_content(Some(&message));
                    if let Err(err) = banner.class_list().remove_1(HIDDEN) {
                        warn!("could not show load error: {err:?}");
                    }
                }
                None => warn!("no #{LOAD_ERROR} element for: {message}"),
            },
            PageUpdate::GpsLabel(label) => self.gps_toggle.set_text_content(Some(label)),
            PageUpdate::Alert(message) => {
                if let Err(err) = self.window.alert_with_message(&message) {
                    warn!("alert failed: {err:?}");
                }
            }
        }
    }
}
