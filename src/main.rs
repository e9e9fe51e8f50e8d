use anyhow::Context;
use log::LevelFilter;
use operations_feed::{DEFAULT_INPUT, run};
use simple_logger::SimpleLogger;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    log::debug!("Application started");

    let path = input_path();
    log::debug!("Extracted filepath from args: {path:?}");

    let stdout = std::io::stdout();
    run(&path, &mut stdout.lock())
        .with_context(|| format!("failed to show operations from {}", path.display()))?;

    log::debug!("Application finished");

    Ok(())
}

fn input_path() -> PathBuf {
    match env::args_os().nth(1) {
        None => PathBuf::from(DEFAULT_INPUT),
        Some(file_path) => PathBuf::from(file_path),
    }
}
