use comms::{detail_path, RockRecord};
use derive_more::{Display, From};
use geo_types::Point;

use crate::lat_lon;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct SampleId(pub String);

impl From<&str> for SampleId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl SampleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SampleKey<'a>(pub &'a str);

/// One rock-location record. `position` is x = longitude, y = latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub id: SampleId,
    pub rock: String,
    pub place: String,
    pub position: Point<f64>,
}

impl Sample {
    pub fn new(
        id: impl Into<SampleId>,
        rock: impl Into<String>,
        place: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            rock: rock.into(),
            place: place.into(),
            position: lat_lon(latitude, longitude),
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.position.x()
    }

    /// Permalink of the sample's detail page.
    pub fn detail_path(&self) -> String {
        detail_path(&self.id.0)
    }
}

impl From<RockRecord> for Sample {
    fn from(value: RockRecord) -> Self {
        Sample::new(
            value.id,
            value.rocks,
            value.place,
            value.latitude,
            value.longitude,
        )
    }
}

impl From<&Sample> for RockRecord {
    fn from(value: &Sample) -> Self {
        RockRecord {
            id: value.id.0.clone(),
            place: value.place.clone(),
            rocks: value.rock.clone(),
            latitude: value.latitude(),
            longitude: value.longitude(),
        }
    }
}
