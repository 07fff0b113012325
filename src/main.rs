use clap::Parser;
use sentient_studio::core::config;
use sentient_studio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "sentient-studio", about = "Conversational shell for Sentient Studio")]
struct Args {
    /// Reply generator to use
    #[arg(short, long)]
    generator: Option<String>,

    /// Diagnostic log file location
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; continuing with defaults");
        config::StudioConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.generator.as_deref(),
        args.log_file.as_deref(),
    );

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "Sentient Studio starting up with generator: {}",
        resolved.generator
    );
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
