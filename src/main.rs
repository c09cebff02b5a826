use clap::{Parser, Subcommand};
use dossier::content::{self, HttpContentSource};
use dossier::core::config::{self, CliOverrides, ResolvedConfig};
use dossier::core::state::App;
use dossier::media::{self, LinkTarget};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dossier", about = "Terminal viewer for the expose dossier")]
struct Args {
    /// Remote dossier JSON URL (overrides config and DOSSIER_CONTENT_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Skip the remote source and use the bundled dossier only
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the full-screen dossier viewer (default)
    View,
    /// Resolve the dossier once and print it as JSON
    Print,
    /// Show how a media link would be handled
    Classify {
        /// URL or file path to classify
        link: String,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            config::DossierConfig::default()
        }
    };
    let cli = CliOverrides {
        url: args.url.clone(),
        offline: args.offline,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Dossier starting up with content source: {}",
        resolved.content_url.as_deref().unwrap_or("<none>")
    );

    match args.command.unwrap_or(Command::View) {
        Command::View => dossier::tui::run(build_app(&resolved)),
        Command::Print => print_dossier(&resolved).await,
        Command::Classify { link } => {
            classify(&link);
            Ok(())
        }
    }
}

fn build_source(config: &ResolvedConfig) -> HttpContentSource {
    HttpContentSource::new(config.content_url.clone(), config.request_timeout)
}

fn build_app(config: &ResolvedConfig) -> App {
    App::new(
        Arc::new(build_source(config)),
        Arc::new(content::fallback_document()),
    )
}

async fn print_dossier(config: &ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(config);
    let fallback = Arc::new(content::fallback_document());
    let resolution = content::resolve(&source, &fallback).await;

    if let Some(error) = resolution.error_message() {
        eprintln!("Warning: {error}");
    }

    let json = serde_json::to_string_pretty(resolution.content.as_ref())
        .map_err(std::io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn classify(link: &str) {
    match media::classify_link(link) {
        LinkTarget::Playable { source, streaming } => {
            let origin = if streaming { "streaming" } else { "local" };
            println!("playable ({origin}): {}", source.uri);
        }
        LinkTarget::External(url) => println!("external: open {url} in a browser"),
        LinkTarget::Empty => println!("empty: nothing to open"),
    }
}
