use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire envelope for the manifest endpoint.
#[derive(Serialize, Deserialize)]
pub struct ManifestResponse {
    pub photo_manifest: Manifest,
}

/// Mission-level summary of a rover's entire photo history.
#[derive(Serialize, Deserialize, Debug)]
pub struct Manifest {
    pub name: String,

    pub landing_date: NaiveDate,

    pub launch_date: NaiveDate,

    /// Mission status, e.g. `active` or `complete`.
    pub status: String,

    /// Most recent sol with photos.
    pub max_sol: u32,

    /// Earth date of the most recent photos.
    pub max_date: NaiveDate,

    pub total_photos: i64,

    /// Per-sol activity records, ordered ascending by sol as returned by the
    /// server. The wire field is named `photos`.
    #[serde(rename = "photos")]
    pub sols: Vec<SolActivity>,
}

/// Photo activity on a single martian sol.
#[derive(Serialize, Deserialize, Debug)]
pub struct SolActivity {
    pub sol: u32,

    pub total_photos: i64,

    /// Short codes of the cameras active on this sol.
    pub cameras: Vec<String>,
}
