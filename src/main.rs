use clap::Parser;
use holidaze::Screen;
use holidaze::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "holidaze", about = "Terminal client for the Holidaze booking API")]
struct Args {
    /// Screen to open on startup
    #[arg(short, long, value_enum)]
    view: Option<Screen>,

    /// Dashboard panel tag ("admin", "accomodations", "add")
    #[arg(short, long)]
    dashboard: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to holidaze.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("holidaze.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::HolidazeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.view, args.dashboard.as_deref());

    log::info!(
        "Holidaze starting up: base_url={}, screen={:?}, signed in={}",
        resolved.endpoints.base_url,
        resolved.start_screen,
        resolved.token.is_some()
    );

    holidaze::tui::run(resolved)
}
