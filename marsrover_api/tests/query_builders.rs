use marsrover_api::{CameraCode, PhotoQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/rovers/curiosity/photos").unwrap()
}

#[test]
fn photo_query_default_adds_nothing() {
    let url = PhotoQuery::default().add_to_url(&base_url());
    assert!(url.query().is_none());
}

#[test]
fn photo_query_with_camera() {
    let url = PhotoQuery::default()
        .with_camera(CameraCode::Navcam)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("camera=navcam"));
}

#[test]
fn photo_query_with_camera_and_page() {
    let url = PhotoQuery::default()
        .with_camera(CameraCode::Fhaz)
        .with_page(3)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("camera=fhaz"));
    assert!(query.contains("page=3"));
}

#[test]
fn camera_code_parses_case_insensitively() {
    assert_eq!("FHAZ".parse::<CameraCode>(), Ok(CameraCode::Fhaz));
    assert_eq!("mardi".parse::<CameraCode>(), Ok(CameraCode::Mardi));
    assert_eq!("MiniTES".parse::<CameraCode>(), Ok(CameraCode::Minites));
    assert!("mastcam-z".parse::<CameraCode>().is_err());
}

#[test]
fn camera_code_display_matches_wire_value() {
    assert_eq!(CameraCode::Chemcam.to_string(), "chemcam");
    assert_eq!(CameraCode::Pancam.to_string(), "pancam");
}
