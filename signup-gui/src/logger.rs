use crate::dir::SignupDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

const GUI_LOG_FILE_NAME: &str = "branch-signup.log";

/// Targets of dependencies that are too verbose to be logged alongside the application.
const IGNORED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

fn is_ignored_target(target: &str) -> bool {
    IGNORED_TARGETS
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &SignupDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut log_path = datadir.path().to_path_buf();
    log_path.push(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Add a filter to *both* layers that rejects spans and
                // events whose targets start with specific prefixes.
                .with_filter(filter::filter_fn(|metadata| {
                    !is_ignored_target(metadata.target())
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
