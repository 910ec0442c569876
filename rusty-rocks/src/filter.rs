use crate::{Dataset, IconStyle, Sample};

/// Which field of a [Sample] a search looks at.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchMode {
    ByName = 0,
    ByPlace = 1,
}

impl SearchMode {
    #[inline]
    pub fn field(self, sample: &Sample) -> &str {
        match self {
            Self::ByName => &sample.rock,
            Self::ByPlace => &sample.place,
        }
    }

    /// Name searches use the stock pin, place searches the custom one.
    pub fn icon(self) -> IconStyle {
        match self {
            Self::ByName => IconStyle::DefaultPin,
            Self::ByPlace => IconStyle::PlacePin,
        }
    }
}

/// A normalised search: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub mode: SearchMode,
    needle: String,
}

impl Query {
    pub fn new(mode: SearchMode, raw: &str) -> Self {
        Self {
            mode,
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive, unanchored substring match on the selected field.
    pub fn matches(&self, sample: &Sample) -> bool {
        self.mode
            .field(sample)
            .to_lowercase()
            .contains(self.needle.as_str())
    }
}

/// Samples matching the last query, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResult(Vec<Sample>);

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.0.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.0
    }
}

impl FromIterator<Sample> for FilteredResult {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FilteredResult {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An empty query yields an empty result, never the whole dataset.
pub fn filter(dataset: &Dataset, mode: SearchMode, raw: &str) -> FilteredResult {
    let query = Query::new(mode, raw);
    if query.is_empty() {
        return FilteredResult::default();
    }

    dataset
        .iter()
        .filter(|sample| query.matches(sample))
        .cloned()
        .collect()
}
