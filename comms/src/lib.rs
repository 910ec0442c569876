pub mod comms_types;

pub use comms_types::{RockRecord, RockRecords, Wire, WireError, WireId};

/// Dataset endpoint consumed by the map page.
pub const ROCKS_ENDPOINT: &str = "/api/rocks";

/// Prefix of the per-sample detail page linked from every marker popup.
pub const DETAIL_PREFIX: &str = "/rock";

/// Permalink of one sample, `/rock/{id}`.
pub fn detail_path(id: &str) -> String {
    format!("{DETAIL_PREFIX}/{id}")
}
