use anyhow::Result;
use clap::Args;
use marsrover_api::Client;

use crate::output::{print_json, print_manifest, OutputFormat};

#[derive(Args)]
pub struct ManifestArgs {
    /// Rover name, e.g. curiosity, opportunity, spirit
    pub rover: String,
}

pub async fn run(args: &ManifestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let manifest = client.get_manifest(&args.rover).await?;
    match format {
        OutputFormat::Table => print_manifest(&manifest),
        OutputFormat::Json => print_json(&manifest)?,
    }
    Ok(())
}
