use std::future::Future;

use comms::RockRecords;
use tracing::{debug, warn};

use crate::{default, LoadError};

use super::*;

/// The full sample collection, in the order it was fetched. Once built it is
/// never mutated; a page holds exactly one for its lifetime.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut slf: Self = default();
        slf.samples.extend(iter);
        slf
    }
}

impl From<RockRecords> for Dataset {
    fn from(value: RockRecords) -> Self {
        value.into_iter().map(Sample::from).collect()
    }
}

impl Dataset {
    pub fn empty() -> Self {
        default()
    }

    /// Await one fetch of the record list and build the dataset from it.
    ///
    /// There is no retry: a failed fetch is returned as [LoadError] and the
    /// caller keeps whatever (empty) dataset it already had.
    pub async fn load<F, E>(fetch: F) -> Result<Self, LoadError>
    where
        F: Future<Output = Result<RockRecords, E>>,
        E: Into<LoadError>,
    {
        match fetch.await {
            Ok(records) => {
                let dataset = Self::from(records);
                debug!(samples = dataset.len(), "dataset loaded");
                Ok(dataset)
            }
            Err(err) => {
                let err = err.into();
                warn!("dataset load failed: {err}");
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// First sample carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Sample> {
        self.find_index(&SampleKey(id)).map(|i| &self.samples[i])
    }

    pub fn to_records(&self) -> RockRecords {
        self.samples.iter().map(comms::RockRecord::from).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Queryable<SampleKey<'_>> for Dataset {
    fn find_index(&self, key: &SampleKey<'_>) -> Option<usize> {
        self.samples.iter().position(|x| x.id.as_str() == key.0)
    }
}
