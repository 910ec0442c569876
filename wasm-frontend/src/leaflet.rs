//! Bindings to the global `L` object of Leaflet and the [MapAdapter] over it.

use js_sys::{Array, Object, Reflect};
use rusty_rocks::{
    IconStyle, MapAdapter, MarkerSpec, PinIcon, Viewport, PLACE_PIN, TILE_ATTRIBUTION, TILE_URL,
};
use wasm_bindgen::prelude::*;

const USER_MARKER_CLASS: &str = "user-location-marker";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type JsMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn l_map(element_id: &str) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &JsMap, center: &Array, zoom: u8) -> JsMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &JsMap, layer: &Layer) -> JsMap;

    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn l_marker(lat_lng: &Array, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn l_tile_layer(url_template: &str, options: &Object) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &JsMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer) -> Layer;

    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn l_icon(options: &Object) -> Icon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn l_div_icon(options: &Object) -> Icon;
}

fn options(pairs: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (key, value) in pairs {
        // plain objects accept any key
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}

fn pair<T: Into<f64>>(a: T, b: T) -> JsValue {
    Array::of2(&JsValue::from_f64(a.into()), &JsValue::from_f64(b.into())).into()
}

fn pin_icon(pin: &PinIcon) -> Icon {
    l_icon(&options(&[
        ("iconUrl", JsValue::from_str(pin.url)),
        ("iconSize", pair(pin.size.0, pin.size.1)),
        ("iconAnchor", pair(pin.anchor.0, pin.anchor.1)),
        ("popupAnchor", pair(pin.popup_anchor.0, pin.popup_anchor.1)),
    ]))
}

fn user_icon() -> Icon {
    l_div_icon(&options(&[
        ("className", JsValue::from_str(USER_MARKER_CLASS)),
        ("iconSize", pair(18, 18)),
    ]))
}

pub struct LeafletMap {
    map: JsMap,
    place_icon: Icon,
    user_icon: Icon,
}

impl LeafletMap {
    /// Create the map inside the element with id `element_id` and add the
    /// OpenStreetMap tile layer.
    pub fn new(element_id: &str) -> Result<Self, JsValue> {
        let map = l_map(element_id)?;
        l_tile_layer(
            TILE_URL,
            &options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))]),
        )
        .add_to(&map);

        Ok(Self {
            map,
            place_icon: pin_icon(&PLACE_PIN),
            user_icon: user_icon(),
        })
    }
}

impl MapAdapter for LeafletMap {
    type Marker = Layer;

    fn add_marker(&mut self, spec: MarkerSpec) -> Self::Marker {
        let opts = match spec.icon {
            IconStyle::DefaultPin => Object::new(),
            IconStyle::PlacePin => options(&[("icon", self.place_icon.clone().into())]),
            IconStyle::UserLocation => options(&[("icon", self.user_icon.clone().into())]),
        };
        let lat_lng = Array::of2(
            &JsValue::from_f64(spec.position.y()),
            &JsValue::from_f64(spec.position.x()),
        );

        let marker = l_marker(&lat_lng, &opts)
            .add_to(&self.map)
            .bind_popup(&spec.popup.to_html());
        if spec.open_popup {
            marker.open_popup();
        }
        marker
    }

    fn remove_marker(&mut self, marker: Self::Marker) {
        self.map.remove_layer(&marker);
    }

    fn set_view(&mut self, view: Viewport) {
        let center = Array::of2(
            &JsValue::from_f64(view.center.y()),
            &JsValue::from_f64(view.center.x()),
        );
        self.map.set_view(&center, view.zoom);
    }
}
