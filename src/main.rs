use clap::Parser;
use dragboard::core::config::{self, BoardConfig, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "dragboard", about = "Drag-and-drop project board for the terminal")]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Config file to use instead of ~/.dragboard/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let board_config = loaded.unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        BoardConfig::default()
    });
    let resolved = config::resolve(
        &board_config,
        &CliOverrides {
            log_level: args.log_level,
            log_file: args.log_file,
        },
    );

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "Dragboard starting up (log level {}, form rules {:?})",
        resolved.log_level,
        resolved.form
    );

    dragboard::tui::run(resolved)
}
