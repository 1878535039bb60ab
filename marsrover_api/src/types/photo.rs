use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire envelope for the photos endpoints.
#[derive(Serialize, Deserialize)]
pub struct PhotosResponse {
    pub photos: Vec<Photo>,
}

/// One image record with its capture metadata.
#[derive(Serialize, Deserialize, Debug)]
pub struct Photo {
    pub id: i64,

    pub sol: u32,

    pub camera: Camera,

    /// URL of the image itself. Only the URL is returned, never image bytes.
    pub img_src: String,

    pub earth_date: NaiveDate,

    /// Denormalized copy of the owning rover's summary. Repeated verbatim on
    /// every photo in a response; no deduplication is performed.
    pub rover: Rover,
}

/// Rover metadata echoed on each photo.
#[derive(Serialize, Deserialize, Debug)]
pub struct Rover {
    pub id: i64,

    pub name: String,

    pub landing_date: NaiveDate,

    pub launch_date: NaiveDate,

    pub status: String,

    pub max_sol: u32,

    pub max_date: NaiveDate,

    pub total_photos: i64,

    #[serde(default)]
    pub cameras: Vec<Camera>,
}

/// A single rover camera.
#[derive(Serialize, Deserialize, Debug)]
pub struct Camera {
    pub id: i64,

    /// Short code, e.g. `FHAZ`. The wire field is named `name`.
    pub name: String,

    pub rover_id: i64,

    pub full_name: String,
}
