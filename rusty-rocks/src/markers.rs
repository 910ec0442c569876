use tracing::debug;

use crate::{FilteredResult, IconStyle, MapAdapter, MarkerSpec, Popup, Sample, SampleId};

impl Sample {
    pub fn marker_spec(&self, icon: IconStyle) -> MarkerSpec {
        MarkerSpec {
            position: self.position,
            icon,
            popup: Popup::Sample {
                href: self.detail_path(),
                rock: self.rock.clone(),
                place: self.place.clone(),
            },
            open_popup: false,
        }
    }
}

/// Owns the map and the markers drawn for the current search result.
///
/// The tracked set is always replaced wholesale; markers added to the map
/// through [MarkerSync::map_mut] (the GPS marker) are never touched here.
pub struct MarkerSync<M: MapAdapter> {
    map: M,
    tracked: Vec<(SampleId, M::Marker)>,
}

impl<M: MapAdapter> MarkerSync<M> {
    pub fn new(map: M) -> Self {
        Self {
            map,
            tracked: Vec::new(),
        }
    }

    /// Remove every tracked marker, then draw one per sample of `result`.
    pub fn render(&mut self, result: &FilteredResult, icon: IconStyle) {
        self.clear();
        let map = &mut self.map;
        self.tracked = result
            .iter()
            .map(|sample| (sample.id.clone(), map.add_marker(sample.marker_spec(icon))))
            .collect();
        debug!(markers = self.tracked.len(), ?icon, "markers rendered");
    }

    pub fn clear(&mut self) {
        for (_, marker) in self.tracked.drain(..) {
            self.map.remove_marker(marker);
        }
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn tracked_ids(&self) -> impl Iterator<Item = &SampleId> {
        self.tracked.iter().map(|(id, _)| id)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}
