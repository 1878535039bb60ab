//! Optional filters for the photos endpoints: camera and result page.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Cameras mounted on the rovers, as accepted by the `camera` query parameter.
///
/// Not every rover carries every camera; the API simply returns an empty
/// photo list for a camera the rover does not have.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CameraCode {
    /// Front Hazard Avoidance Camera
    Fhaz,
    /// Rear Hazard Avoidance Camera
    Rhaz,
    /// Mast Camera
    Mast,
    /// Chemistry and Camera Complex
    Chemcam,
    /// Mars Hand Lens Imager
    Mahli,
    /// Mars Descent Imager
    Mardi,
    /// Navigation Camera
    Navcam,
    /// Panoramic Camera
    Pancam,
    /// Miniature Thermal Emission Spectrometer
    Minites,
}

impl std::fmt::Display for CameraCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CameraCode::Fhaz => "fhaz",
                CameraCode::Rhaz => "rhaz",
                CameraCode::Mast => "mast",
                CameraCode::Chemcam => "chemcam",
                CameraCode::Mahli => "mahli",
                CameraCode::Mardi => "mardi",
                CameraCode::Navcam => "navcam",
                CameraCode::Pancam => "pancam",
                CameraCode::Minites => "minites",
            }
        )
    }
}

impl FromStr for CameraCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fhaz" => Ok(CameraCode::Fhaz),
            "rhaz" => Ok(CameraCode::Rhaz),
            "mast" => Ok(CameraCode::Mast),
            "chemcam" => Ok(CameraCode::Chemcam),
            "mahli" => Ok(CameraCode::Mahli),
            "mardi" => Ok(CameraCode::Mardi),
            "navcam" => Ok(CameraCode::Navcam),
            "pancam" => Ok(CameraCode::Pancam),
            "minites" => Ok(CameraCode::Minites),
            _ => Err(()),
        }
    }
}

/// Optional filters for the photos endpoints. The default adds no parameters.
#[derive(Default, Clone, Copy)]
pub struct PhotoQuery {
    /// Restrict results to photos taken by one camera.
    pub camera: Option<CameraCode>,
    /// Result page (25 photos per page). `None` returns all photos.
    pub page: Option<u32>,
}

impl PhotoQuery {
    /// Restricts results to a single camera.
    pub fn with_camera(mut self, camera: CameraCode) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Selects a result page (25 photos per page).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(camera) = self.camera {
            url.query_pairs_mut()
                .append_pair("camera", camera.to_string().as_str());
        }
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        url
    }
}
