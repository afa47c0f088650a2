use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::sync::Arc;

use atlas::core::{RootIntent, RootStore};
use atlas::core::config::{self, CliOverrides};
use atlas::data::{GraphQlClient, GraphQlCountryRepository};
use atlas::domain::UseCases;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world", version)]
struct Args {
    /// GraphQL endpoint to query
    #[arg(long)]
    endpoint: Option<String>,

    /// Log level written to atlas.log (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Open the details of this country code on startup (e.g. FR)
    #[arg(long, value_name = "CODE")]
    country: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}; falling back to defaults");
            config::AtlasConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Atlas starting up against {}", resolved.endpoint);

    let client = GraphQlClient::new(
        resolved.endpoint.clone(),
        &resolved.user_agent,
        resolved.request_timeout,
    )
    .map_err(std::io::Error::other)?;
    let repository = Arc::new(GraphQlCountryRepository::new(client));

    let mut root = RootStore::new(UseCases::new(repository));
    if let Some(code) = args.country {
        root.on_intent(RootIntent::OpenDetails(code));
    }

    atlas::tui::run(root)
}
