use geo_types::Point;
use tracing::{debug, info, warn};

use crate::{
    filter, Dataset, FilteredResult, GeolocationError, IconStyle, LoadError, MapAdapter,
    MarkerSpec, MarkerSync, Popup, SearchMode, Viewport, GPS_ZOOM, USER_POPUP,
};

pub const GPS_ON_LABEL: &str = "GPS On";
pub const GPS_OFF_LABEL: &str = "GPS Off";
pub const GPS_FAILED_MESSAGE: &str = "Cannot get location";
pub const LOAD_FAILED_MESSAGE: &str = "Rock locations could not be loaded";

/// `"1 rock location"`, `"0 rock locations"`, `"2 rock locations"`.
pub fn readout(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} rock location{plural}")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Filtered {
        mode: SearchMode,
        result: FilteredResult,
    },
}

#[derive(Debug)]
pub enum GpsState<K> {
    Off,
    /// A position request is in flight; toggles are ignored until it resolves.
    Locating,
    On(K),
}

impl<K> Default for GpsState<K> {
    fn default() -> Self {
        Self::Off
    }
}

impl<K> GpsState<K> {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On(_))
    }
}

/// A change to the page outside the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUpdate {
    Readout(String),
    ClearQueryFields,
    HideLoading,
    ShowLoadError(String),
    GpsLabel(&'static str),
    Alert(String),
}

/// What a transition asks of its surroundings: a page update, or a device
/// request whose outcome comes back as another transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Page(PageUpdate),
    /// Ask the device for its position and report back through
    /// [ViewController::position_acquired] or [ViewController::position_failed].
    RequestPosition,
}

/// Page state: the dataset, the markers on the map, search and GPS state.
/// Each user event maps to one method, which mutates the map through the
/// adapter and returns the DOM effects to apply.
pub struct ViewController<M: MapAdapter> {
    dataset: Dataset,
    loaded: bool,
    markers: MarkerSync<M>,
    search: SearchState,
    gps: GpsState<M::Marker>,
    viewport: Viewport,
}

impl<M: MapAdapter> ViewController<M> {
    /// Takes over `map` and moves it to the default viewport.
    pub fn new(mut map: M) -> Self {
        let viewport = Viewport::default();
        map.set_view(viewport);
        Self {
            dataset: Dataset::empty(),
            loaded: false,
            markers: MarkerSync::new(map),
            search: SearchState::Idle,
            gps: GpsState::Off,
            viewport,
        }
    }

    pub fn dataset_loaded(&mut self, res: Result<Dataset, LoadError>) -> Vec<Effect> {
        if self.loaded {
            warn!("dataset already loaded, ignoring second load");
            return vec![];
        }
        self.loaded = true;

        let mut effects = vec![Effect::Page(PageUpdate::HideLoading)];
        match res {
            Ok(dataset) => {
                info!(samples = dataset.len(), "rock locations ready");
                self.dataset = dataset;
            }
            Err(err) => {
                warn!("continuing with an empty dataset: {err}");
                effects.push(Effect::Page(PageUpdate::ShowLoadError(
                    LOAD_FAILED_MESSAGE.into(),
                )));
            }
        }
        effects.push(self.readout_effect());
        effects
    }

    pub fn submit_search(&mut self, mode: SearchMode, raw: &str) -> Vec<Effect> {
        let result = filter(&self.dataset, mode, raw);
        self.markers.render(&result, mode.icon());
        debug!(?mode, query = raw, matches = result.len(), "search submitted");
        self.search = SearchState::Filtered { mode, result };
        vec![self.readout_effect()]
    }

    pub fn clear_search(&mut self) -> Vec<Effect> {
        self.markers.clear();
        self.search = SearchState::Idle;
        vec![Effect::Page(PageUpdate::ClearQueryFields), self.readout_effect()]
    }

    pub fn reset_view(&mut self) -> Vec<Effect> {
        self.set_view(Viewport::default());
        self.markers.clear();
        self.search = SearchState::Idle;
        vec![self.readout_effect()]
    }

    pub fn toggle_gps(&mut self) -> Vec<Effect> {
        match std::mem::take(&mut self.gps) {
            GpsState::Off => {
                self.gps = GpsState::Locating;
                vec![Effect::RequestPosition]
            }
            GpsState::Locating => {
                debug!("position request pending, toggle ignored");
                self.gps = GpsState::Locating;
                vec![]
            }
            GpsState::On(marker) => {
                self.markers.map_mut().remove_marker(marker);
                vec![Effect::Page(PageUpdate::GpsLabel(GPS_OFF_LABEL))]
            }
        }
    }

    pub fn position_acquired(&mut self, position: Point<f64>) -> Vec<Effect> {
        if let GpsState::On(old) = std::mem::take(&mut self.gps) {
            self.markers.map_mut().remove_marker(old);
        }
        let marker = self.markers.map_mut().add_marker(MarkerSpec {
            position,
            icon: IconStyle::UserLocation,
            popup: Popup::Text(USER_POPUP.into()),
            open_popup: true,
        });
        self.gps = GpsState::On(marker);
        self.set_view(Viewport::around(position, GPS_ZOOM));
        info!(lat = position.y(), lon = position.x(), "gps position acquired");
        vec![Effect::Page(PageUpdate::GpsLabel(GPS_ON_LABEL))]
    }

    pub fn position_failed(&mut self, err: GeolocationError) -> Vec<Effect> {
        warn!("gps position failed: {err}");
        if matches!(self.gps, GpsState::Locating) {
            self.gps = GpsState::Off;
        }
        vec![Effect::Page(PageUpdate::Alert(GPS_FAILED_MESSAGE.into()))]
    }

    fn set_view(&mut self, view: Viewport) {
        self.viewport = view;
        self.markers.map_mut().set_view(view);
    }

    fn readout_effect(&self) -> Effect {
        Effect::Page(PageUpdate::Readout(readout(self.visible_count())))
    }

    pub fn visible_count(&self) -> usize {
        match &self.search {
            SearchState::Idle => 0,
            SearchState::Filtered { result, .. } => result.len(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn gps(&self) -> &GpsState<M::Marker> {
        &self.gps
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn markers(&self) -> &MarkerSync<M> {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lat_lon, testing::RecordingMap, Sample, SampleId, DEFAULT_ZOOM};

    fn controller() -> ViewController<RecordingMap> {
        let mut vc = ViewController::new(RecordingMap::default());
        let dataset = [
            Sample::new("1", "Basalt", "Iceland", 64.0, -19.0),
            Sample::new("2", "Granite", "Scotland", 57.0, -4.0),
        ]
        .into_iter()
        .collect();
        vc.dataset_loaded(Ok(dataset));
        vc
    }

    fn sample_ids(vc: &ViewController<RecordingMap>) -> Vec<SampleId> {
        vc.markers().tracked_ids().cloned().collect()
    }

    #[test]
    fn readout_pluralises() {
        assert_eq!(readout(0), "0 rock locations");
        assert_eq!(readout(1), "1 rock location");
        assert_eq!(readout(2), "2 rock locations");
    }

    #[test]
    fn starts_idle_on_default_view() {
        let vc = ViewController::new(RecordingMap::default());
        assert_eq!(vc.search(), &SearchState::Idle);
        assert_eq!(vc.viewport(), Viewport::default());
        assert_eq!(vc.markers().map().last_view(), Some(&Viewport::default()));
    }

    #[test]
    fn load_hides_overlay_and_shows_count() {
        let mut vc = ViewController::new(RecordingMap::default());
        let effects = vc.dataset_loaded(Ok(Dataset::empty()));
        assert_eq!(
            effects,
            vec![
                Effect::Page(PageUpdate::HideLoading),
                Effect::Page(PageUpdate::Readout("0 rock locations".into()))
            ]
        );
    }

    #[test]
    fn failed_load_degrades_to_empty() {
        let mut vc = ViewController::new(RecordingMap::default());
        let effects = vc.dataset_loaded(Err(LoadError::Status(502)));
        assert!(effects.contains(&Effect::Page(PageUpdate::HideLoading)));
        assert!(effects.contains(&Effect::Page(PageUpdate::ShowLoadError(
            LOAD_FAILED_MESSAGE.into()
        ))));
        assert!(vc.dataset().is_empty());
        assert_eq!(
            vc.submit_search(SearchMode::ByName, "basalt"),
            vec![Effect::Page(PageUpdate::Readout("0 rock locations".into()))]
        );
    }

    #[test]
    fn second_load_is_ignored() {
        let mut vc = controller();
        assert!(vc.dataset_loaded(Ok(Dataset::empty())).is_empty());
        assert_eq!(vc.dataset().len(), 2);
    }

    #[test]
    fn name_search_scenario() {
        let mut vc = controller();
        let effects = vc.submit_search(SearchMode::ByName, "bas");
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Readout("1 rock location".into()))]);
        assert_eq!(sample_ids(&vc), vec![SampleId::from("1")]);
        assert!(vc
            .markers()
            .map()
            .live()
            .all(|m| m.icon == IconStyle::DefaultPin));
        assert!(matches!(
            vc.search(),
            SearchState::Filtered { mode: SearchMode::ByName, result } if result.len() == 1
        ));
    }

    #[test]
    fn place_search_scenario() {
        let mut vc = controller();
        let effects = vc.submit_search(SearchMode::ByPlace, "land");
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Readout("2 rock locations".into()))]);
        assert_eq!(vc.markers().len(), 2);
        assert!(vc
            .markers()
            .map()
            .live()
            .all(|m| m.icon == IconStyle::PlacePin));
    }

    #[test]
    fn clear_scenario() {
        let mut vc = controller();
        vc.submit_search(SearchMode::ByPlace, "land");
        let effects = vc.clear_search();
        assert_eq!(
            effects,
            vec![
                Effect::Page(PageUpdate::ClearQueryFields),
                Effect::Page(PageUpdate::Readout("0 rock locations".into()))
            ]
        );
        assert_eq!(vc.search(), &SearchState::Idle);
        assert_eq!(vc.markers().len(), 0);
        assert_eq!(vc.markers().map().live_count(), 0);
    }

    #[test]
    fn reset_restores_default_view_and_clears() {
        let mut vc = controller();
        vc.submit_search(SearchMode::ByName, "granite");
        vc.toggle_gps();
        vc.position_acquired(lat_lon(55.7, 12.6));
        assert_eq!(vc.viewport().zoom, GPS_ZOOM);

        let effects = vc.reset_view();
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Readout("0 rock locations".into()))]);
        assert_eq!(vc.viewport(), Viewport::default());
        assert_eq!(vc.viewport().zoom, DEFAULT_ZOOM);
        assert_eq!(vc.markers().len(), 0);
        // only the gps marker survives
        assert_eq!(vc.markers().map().live_count(), 1);
        assert!(vc.gps().is_on());
    }

    #[test]
    fn gps_round_trip_leaves_sample_markers() {
        let mut vc = controller();
        vc.submit_search(SearchMode::ByPlace, "land");
        let before = sample_ids(&vc);

        assert_eq!(vc.toggle_gps(), vec![Effect::RequestPosition]);
        assert!(matches!(vc.gps(), GpsState::Locating));
        assert_eq!(
            vc.position_acquired(lat_lon(60.0, 10.0)),
            vec![Effect::Page(PageUpdate::GpsLabel(GPS_ON_LABEL))]
        );
        assert_eq!(vc.markers().map().live_count(), 3);
        let user = vc
            .markers()
            .map()
            .live()
            .find(|m| m.icon == IconStyle::UserLocation)
            .expect("user marker drawn");
        assert!(user.open_popup);
        assert_eq!(user.popup, Popup::Text(USER_POPUP.into()));
        assert_eq!(vc.viewport(), Viewport::around(lat_lon(60.0, 10.0), GPS_ZOOM));

        assert_eq!(
            vc.toggle_gps(),
            vec![Effect::Page(PageUpdate::GpsLabel(GPS_OFF_LABEL))]
        );
        assert!(matches!(vc.gps(), GpsState::Off));
        assert_eq!(sample_ids(&vc), before);
        assert_eq!(vc.markers().map().live_count(), 2);
        assert_eq!(vc.visible_count(), 2);
    }

    #[test]
    fn gps_failure_alerts_and_stays_off() {
        let mut vc = controller();
        vc.toggle_gps();
        let effects = vc.position_failed(GeolocationError::PermissionDenied);
        assert_eq!(effects, vec![Effect::Page(PageUpdate::Alert(GPS_FAILED_MESSAGE.into()))]);
        assert!(matches!(vc.gps(), GpsState::Off));
        assert_eq!(vc.markers().map().live_count(), 0);
        // a later toggle asks again
        assert_eq!(vc.toggle_gps(), vec![Effect::RequestPosition]);
    }

    #[test]
    fn toggle_while_locating_is_inert() {
        let mut vc = controller();
        vc.toggle_gps();
        assert!(vc.toggle_gps().is_empty());
        assert!(matches!(vc.gps(), GpsState::Locating));
    }

    #[test]
    fn search_does_not_touch_gps_marker() {
        let mut vc = controller();
        vc.toggle_gps();
        vc.position_acquired(lat_lon(1.0, 1.0));
        vc.submit_search(SearchMode::ByName, "basalt");
        vc.clear_search();
        assert!(vc.gps().is_on());
        assert_eq!(vc.markers().map().live_count(), 1);
    }
}
