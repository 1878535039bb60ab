mod manifest;
pub use self::manifest::{Manifest, ManifestResponse, SolActivity};

mod photo;
pub use self::photo::{Camera, Photo, PhotosResponse, Rover};
