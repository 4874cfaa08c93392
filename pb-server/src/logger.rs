use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use pb_config::LoggingConfig;

/// Wire up fern for the whole process.
///
/// A configured file name routes output to `<config dir>/<logging.dir>/<file>`
/// (created on demand); otherwise lines go to stdout, colored when the config
/// says so. Color never applies to files.
pub fn initialize(logging: &LoggingConfig, config_dir: &Path) -> ServerErrorResult<()> {
    let root = Dispatch::new().level(logging.level.0);

    let root = match log_file_path(config_dir, logging) {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| ServerError::Logger {
                    message: format!("cannot create log directory {}: {e}", dir.display()),
                })?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ServerError::Logger {
                    message: format!("cannot open log file {}: {e}", path.display()),
                })?;

            root.chain(formatted(None).chain(file))
        }
        None => {
            let palette = logging.colored.then(|| {
                ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red)
            });

            root.chain(formatted(palette).chain(std::io::stdout()))
        }
    };

    root.apply().map_err(|e| ServerError::Logger {
        message: format!("logger already initialized: {e}"),
    })?;

    // Route tracing events from axum/tower through log
    tracing_log::LogTracer::init().ok();

    match log_file_path(config_dir, logging) {
        Some(path) => info!("Logging to {} at {}", path.display(), logging.level.0),
        None => info!("Logging to stdout at {}", logging.level.0),
    }

    Ok(())
}

/// Resolved log file location, or None when file logging is off
pub fn log_file_path(config_dir: &Path, logging: &LoggingConfig) -> Option<PathBuf> {
    logging
        .file
        .as_ref()
        .map(|name| config_dir.join(&logging.dir).join(name))
}

/// One format for every sink; only the level rendering differs
fn formatted(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let level = match colors {
            Some(palette) => palette.color(record.level()).to_string(),
            None => record.level().to_string(),
        };

        out.finish(format_args!(
            "{ts} {level:<5} [{target}] {message}",
            ts = humantime::format_rfc3339_seconds(SystemTime::now()),
            target = record.target(),
        ))
    })
}
