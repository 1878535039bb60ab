use anyhow::{anyhow, bail, Result};
use clap::Args;
use marsrover_api::{CameraCode, Client, PhotoQuery};

use crate::output::{print_json, print_photos_table, OutputFormat};

#[derive(Args)]
pub struct PhotosArgs {
    /// Rover name, e.g. curiosity, opportunity, spirit
    pub rover: String,

    /// Martian sol to fetch photos for
    #[arg(long, conflicts_with = "earth_date")]
    pub sol: Option<u32>,

    /// Earth date to fetch photos for (YYYY-MM-DD)
    #[arg(long)]
    pub earth_date: Option<String>,

    /// Restrict to one camera: fhaz, rhaz, mast, chemcam, mahli, mardi, navcam, pancam, minites
    #[arg(long)]
    pub camera: Option<String>,

    /// Result page (25 photos per page)
    #[arg(long)]
    pub page: Option<u32>,
}

pub async fn run(args: &PhotosArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = PhotoQuery::default();
    if let Some(camera) = &args.camera {
        let camera: CameraCode = camera
            .parse()
            .map_err(|_| anyhow!("unknown camera: {}", camera))?;
        query = query.with_camera(camera);
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }

    let photos = match (args.sol, &args.earth_date) {
        (Some(sol), None) => client.get_photos_by_sol(&args.rover, sol, &query).await?,
        (None, Some(date)) => {
            client
                .get_photos_by_earth_date(&args.rover, date, &query)
                .await?
        }
        _ => bail!("specify exactly one of --sol or --earth-date"),
    };

    match format {
        OutputFormat::Table => print_photos_table(&photos),
        OutputFormat::Json => print_json(&photos)?,
    }
    Ok(())
}
