use anyhow::Result;
use marsrover_api::types::{Manifest, Photo, SolActivity};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct SolRow {
    #[tabled(rename = "Sol")]
    sol: u32,
    #[tabled(rename = "Photos")]
    photos: i64,
    #[tabled(rename = "Cameras")]
    cameras: String,
}

impl From<&SolActivity> for SolRow {
    fn from(activity: &SolActivity) -> Self {
        SolRow {
            sol: activity.sol,
            photos: activity.total_photos,
            cameras: activity.cameras.join(", "),
        }
    }
}

#[derive(Tabled)]
struct PhotoRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Sol")]
    sol: u32,
    #[tabled(rename = "Earth Date")]
    earth_date: String,
    #[tabled(rename = "Camera")]
    camera: String,
    #[tabled(rename = "Image")]
    img_src: String,
}

impl From<&Photo> for PhotoRow {
    fn from(photo: &Photo) -> Self {
        PhotoRow {
            id: photo.id,
            sol: photo.sol,
            earth_date: photo.earth_date.to_string(),
            camera: photo.camera.name.clone(),
            img_src: photo.img_src.clone(),
        }
    }
}

pub fn print_manifest(manifest: &Manifest) {
    println!("{} ({})", manifest.name, manifest.status);
    println!(
        "launched {}, landed {}",
        manifest.launch_date, manifest.landing_date
    );
    println!(
        "{} photos through sol {} ({})",
        manifest.total_photos, manifest.max_sol, manifest.max_date
    );
    let rows: Vec<SolRow> = manifest.sols.iter().map(SolRow::from).collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
}

pub fn print_photos_table(photos: &[Photo]) {
    if photos.is_empty() {
        println!("no photos found");
        return;
    }
    let rows: Vec<PhotoRow> = photos.iter().map(PhotoRow::from).collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
