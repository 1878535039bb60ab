mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marsrover_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "marsrover")]
#[command(about = "Query mission manifests and rover photos from the NASA Mars Rover Photos API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a rover's mission manifest
    Manifest(commands::manifest::ManifestArgs),
    /// List photos taken by a rover on a sol or earth date
    Photos(commands::photos::PhotosArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marsrover_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let api_key = std::env::var("NASA_API_KEY").unwrap_or_default();
    let client = Client::new(&api_key);

    match &cli.command {
        Commands::Manifest(args) => commands::manifest::run(args, &client, &format).await?,
        Commands::Photos(args) => commands::photos::run(args, &client, &format).await?,
    }

    Ok(())
}
