use chrono::NaiveDate;
use marsrover_api::types::{ManifestResponse, PhotosResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_manifest_full() {
    let json = load_fixture("manifest.json");
    let resp: ManifestResponse = serde_json::from_str(&json).unwrap();
    let manifest = resp.photo_manifest;

    assert_eq!(manifest.name, "Curiosity");
    assert_eq!(manifest.status, "active");
    assert_eq!(
        manifest.landing_date,
        NaiveDate::from_ymd_opt(2012, 8, 6).unwrap()
    );
    assert_eq!(
        manifest.launch_date,
        NaiveDate::from_ymd_opt(2011, 11, 26).unwrap()
    );
    assert_eq!(manifest.max_sol, 1658);
    assert_eq!(
        manifest.max_date,
        NaiveDate::from_ymd_opt(2017, 4, 5).unwrap()
    );
    assert_eq!(manifest.total_photos, 309156);

    assert_eq!(manifest.sols.len(), 4);
    let first = &manifest.sols[0];
    assert_eq!(first.sol, 0);
    assert_eq!(first.total_photos, 3702);
    assert_eq!(first.cameras, vec!["CHEMCAM", "FHAZ", "MARDI", "RHAZ"]);

    // server order preserved, ascending by sol
    let sols: Vec<u32> = manifest.sols.iter().map(|s| s.sol).collect();
    assert_eq!(sols, vec![0, 1, 1004, 1658]);
}

#[test]
fn deserialize_photos_full() {
    let json = load_fixture("photos.json");
    let resp: PhotosResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.photos.len(), 4);

    let photo = &resp.photos[0];
    assert_eq!(photo.id, 102685);
    assert_eq!(photo.sol, 1004);
    assert_eq!(
        photo.earth_date,
        NaiveDate::from_ymd_opt(2015, 6, 3).unwrap()
    );
    assert!(photo.img_src.ends_with(".JPG"));

    assert_eq!(photo.camera.id, 20);
    assert_eq!(photo.camera.name, "FHAZ");
    assert_eq!(photo.camera.rover_id, 5);
    assert_eq!(photo.camera.full_name, "Front Hazard Avoidance Camera");

    // each photo carries its own copy of the rover summary
    for photo in &resp.photos {
        assert_eq!(photo.rover.id, 5);
        assert_eq!(photo.rover.name, "Curiosity");
        assert_eq!(photo.rover.max_sol, 1658);
        assert_eq!(photo.rover.cameras.len(), 2);
    }
}

#[test]
fn deserialize_photos_empty() {
    let json = load_fixture("photos_empty.json");
    let resp: PhotosResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.photos.is_empty());
}

#[test]
fn deserialize_rover_without_cameras() {
    // some historical API variants omit the camera list on the echoed rover
    let json = load_fixture("photos.json");
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["photos"][0]["rover"]
        .as_object_mut()
        .unwrap()
        .remove("cameras");

    let resp: PhotosResponse = serde_json::from_value(value).unwrap();
    assert!(resp.photos[0].rover.cameras.is_empty());
}
