use clap::Parser;
use gazette::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gazette", about = "Terminal reader for a public posts API")]
struct Args {
    /// Base URL of the posts API
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to gazette.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("gazette.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config load failed, using defaults: {e}");
        config::GazetteConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.timeout_secs);

    log::info!("Gazette starting up (source: {})", resolved.base_url);

    gazette::tui::run(resolved)
}
