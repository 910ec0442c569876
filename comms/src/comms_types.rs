use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub trait Wire: Sized {
    /// Encode [Self] as the JSON body served to the map page.
    fn to_wire(&self) -> Result<Vec<u8>, WireError>;
    /// Decode a JSON body into [Self].
    fn from_wire(bts: &[u8]) -> Result<Self, WireError>;
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("Json Error {0}")]
    Json(serde_json::Error),
}

impl From<serde_json::Error> for WireError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Sample identity as it appears on the wire. The CSV backend emits strings,
/// hand-written datasets often use plain integers.
#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

fn id_from_wire<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    WireId::deserialize(d).map(String::from)
}

/// One entry of `GET /api/rocks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockRecord {
    #[serde(rename = "Id", deserialize_with = "id_from_wire")]
    pub id: String,
    #[serde(rename = "Place")]
    pub place: String,
    #[serde(rename = "Rocks")]
    pub rocks: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RockRecords(pub Vec<RockRecord>);

impl FromIterator<RockRecord> for RockRecords {
    fn from_iter<I: IntoIterator<Item = RockRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RockRecords {
    type Item = RockRecord;
    type IntoIter = std::vec::IntoIter<RockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Wire for RockRecords {
    fn to_wire(&self) -> Result<Vec<u8>, WireError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_wire(bts: &[u8]) -> Result<Self, WireError> {
        Ok(serde_json::from_slice(bts)?)
    }
}

impl Wire for RockRecord {
    fn to_wire(&self) -> Result<Vec<u8>, WireError> {
        Ok(serde_json::to_vec(self)?)
    }

    fn from_wire(bts: &[u8]) -> Result<Self, WireError> {
        Ok(serde_json::from_slice(bts)?)
    }
}
