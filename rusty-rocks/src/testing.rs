//! An in-memory [MapAdapter] that records what the page asked of the map.

use std::collections::BTreeMap;

use crate::{MapAdapter, MarkerSpec, Viewport};

#[derive(Debug, Default)]
pub struct RecordingMap {
    next: usize,
    live: BTreeMap<usize, MarkerSpec>,
    pub removed: usize,
    pub views: Vec<Viewport>,
}

impl RecordingMap {
    pub fn live(&self) -> impl Iterator<Item = &MarkerSpec> {
        self.live.values()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, marker: usize) -> bool {
        self.live.contains_key(&marker)
    }

    pub fn last_view(&self) -> Option<&Viewport> {
        self.views.last()
    }
}

impl MapAdapter for RecordingMap {
    type Marker = usize;

    fn add_marker(&mut self, spec: MarkerSpec) -> Self::Marker {
        let id = self.next;
        self.next += 1;
        self.live.insert(id, spec);
        id
    }

    fn remove_marker(&mut self, marker: Self::Marker) {
        if self.live.remove(&marker).is_some() {
            self.removed += 1;
        }
    }

    fn set_view(&mut self, view: Viewport) {
        self.views.push(view);
    }
}
