use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::{path::PathBuf, sync::Arc};

use crate::{
    config::Config,
    http::server::{HttpServer, SearchResponse, SimilarTracksResponse},
    service::TrackService,
    upstream::client::HttpCatalogClient,
};

#[derive(Parser)]
#[command(name = "trackproxy")]
#[command(version = "0.1")]
#[command(about = "Normalized track search and recommendations over a music catalog")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server
    Serve,
    /// Print tracks similar to a video
    Similar {
        video_id: String,
        /// Max number of tracks to return
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print tracks matching a search query
    Search {
        query: String,
        /// Max number of tracks to return
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load(&cli.config)?;

    let catalog = HttpCatalogClient::new(&cfg.upstream)
        .with_context(|| "Failed to initialize catalog client")?;
    let service = TrackService::new(Arc::new(catalog), &cfg.upstream, cfg.normalizer);

    match cli.command {
        Commands::Serve => {
            let http_server = HttpServer::new(service, cfg.limits, cfg.http);

            info!(
                "HTTP server running at http://{}:{}",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::Similar { video_id, limit } => {
            let limit = cfg.limits.similar(limit)?;
            let tracks = service.similar_tracks(&video_id, limit)?;
            print_json(&SimilarTracksResponse { video_id, tracks })?;
        }

        Commands::Search { query, limit } => {
            let limit = cfg.limits.search(limit)?;
            let tracks = service.search_tracks(&query, limit)?;
            print_json(&SearchResponse { query, tracks })?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
