use std::{error::Error, str::FromStr};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to install the global logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Targets of the GUI toolkit internals, too chatty to be useful here.
const SILENCED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "tokio",
];

pub fn is_silenced(target: &str) -> bool {
    SILENCED_TARGETS.iter().any(|t| target.starts_with(t))
}

pub fn setup_logger(log_level: filter::LevelFilter) -> Result<(), LoggerError> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    !is_silenced(metadata.target())
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
