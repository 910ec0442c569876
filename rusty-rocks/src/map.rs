use geo_types::Point;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

pub const DEFAULT_LATITUDE: f64 = 20.0;
pub const DEFAULT_LONGITUDE: f64 = 0.0;
pub const DEFAULT_ZOOM: u8 = 2;
/// Zoom used when centring on the user's position.
pub const GPS_ZOOM: u8 = 8;

pub const USER_POPUP: &str = "You are here";

/// Custom pin used for place searches.
pub const PLACE_PIN: PinIcon = PinIcon {
    url: "/static/map_page/icon-2.png",
    size: (32, 32),
    anchor: (16, 32),
    popup_anchor: (0, -32),
};

/// x = longitude, y = latitude.
#[inline]
pub fn lat_lon(latitude: f64, longitude: f64) -> Point<f64> {
    Point::new(longitude, latitude)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Point<f64>,
    pub zoom: u8,
}

impl Viewport {
    pub fn around(center: Point<f64>, zoom: u8) -> Self {
        Self { center, zoom }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: lat_lon(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinIcon {
    pub url: &'static str,
    pub size: (u32, u32),
    pub anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// The map widget's stock marker.
    DefaultPin,
    /// [PLACE_PIN].
    PlacePin,
    /// The user's own position; must not look like a sample.
    UserLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Sample {
        href: String,
        rock: String,
        place: String,
    },
    Text(String),
}

impl Popup {
    pub fn to_html(&self) -> String {
        match self {
            Popup::Sample { href, rock, place } => format!(
                "<a href=\"{}\"><strong>{}</strong></a><br>{}",
                escape_html(href),
                escape_html(rock),
                escape_html(place)
            ),
            Popup::Text(text) => escape_html(text),
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Everything a map needs to draw one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Point<f64>,
    pub icon: IconStyle,
    pub popup: Popup,
    pub open_popup: bool,
}

/// The slice of a map widget the page drives.
pub trait MapAdapter {
    /// Handle to a marker that is currently on the map.
    type Marker;

    fn add_marker(&mut self, spec: MarkerSpec) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn set_view(&mut self, view: Viewport);
}
