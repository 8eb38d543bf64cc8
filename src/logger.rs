use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Defaults to info; RUST_LOG overrides the level for noisy CI runs.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    Ok(())
}
