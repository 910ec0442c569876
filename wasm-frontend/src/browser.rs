//! The two asynchronous inputs of the page: the dataset fetch and the
//! device position.

use std::{cell::RefCell, rc::Rc};

use comms::{RockRecords, Wire, ROCKS_ENDPOINT};
use geo_types::Point;
use rusty_rocks::{lat_lon, GeolocationError, LoadError};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError, Response};

fn js_error(value: JsValue) -> LoadError {
    LoadError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// `GET /api/rocks`, once.
pub async fn fetch_records() -> Result<RockRecords, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("window missing".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_str(ROCKS_ENDPOINT))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".into()))?;

    Ok(RockRecords::from_wire(text.as_bytes())?)
}

type ErrorSlot = Rc<RefCell<Option<Box<dyn FnOnce(GeolocationError)>>>>;

/// Ask the browser for the current position; exactly one of the callbacks
/// runs, possibly never if the browser leaves the request hanging.
pub fn request_position(
    on_success: impl FnOnce(Point<f64>) + 'static,
    on_error: impl FnOnce(GeolocationError) + 'static,
) {
    let geolocation = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.geolocation().ok());
    request_position_from(geolocation, on_success, on_error);
}

/// [request_position] against a given geolocation object, `None` when the
/// browser has none.
pub fn request_position_from(
    geolocation: Option<Geolocation>,
    on_success: impl FnOnce(Point<f64>) + 'static,
    on_error: impl FnOnce(GeolocationError) + 'static,
) {
    let Some(geolocation) = geolocation else {
        on_error(GeolocationError::Unsupported);
        return;
    };

    let on_error: ErrorSlot = Rc::new(RefCell::new(Some(Box::new(on_error))));
    let report = on_error.clone();

    let success = Closure::once(move |pos: GeolocationPosition| {
        let coords = pos.coords();
        on_success(lat_lon(coords.latitude(), coords.longitude()));
    });
    let failure = Closure::once(move |err: GeolocationPositionError| {
        if let Some(f) = report.borrow_mut().take() {
            f(GeolocationError::from(err.code()));
        }
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        success.as_ref().unchecked_ref(),
        Some(failure.as_ref().unchecked_ref()),
    ) {
        tracing::warn!("getCurrentPosition threw: {err:?}");
        if let Some(f) = on_error.borrow_mut().take() {
            f(GeolocationError::PositionUnavailable);
        }
    }
    // the browser owns the callbacks from here on
    success.forget();
    failure.forget();
}
