pub mod config;
mod filters;
mod formatter;
pub mod handle;
pub mod sinks;

pub use config::{ConsoleConfig, FileConfig, LogFormat, LoggingConfig};
pub use handle::{LoggingHandle, LoggingStats};
use patternbook_error::{GenericError, PatternResult, ResultExt, StatusCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования с конфигурацией.
///
/// Глобальный subscriber можно установить только один раз: повторный вызов
/// вернёт ошибку.
pub fn init_logging(config: &LoggingConfig) -> PatternResult<LoggingHandle> {
    config.validate().context("validating logging config")?;
    config.ensure_log_dir().with_context(|| {
        format!(
            "creating log directory {}",
            config.file.directory.display()
        )
    })?;

    let env_filter = filters::build_filter_from_config(config);
    let mut layers = Vec::new();

    if config.console.enabled {
        layers.push(sinks::console::layer_with_config(config));
    }

    let file_guard = if config.file.enabled {
        let (file_layer, guard) = sinks::file::layer_with_config(config);
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| GenericError::new(StatusCode::AlreadyInitialized, e.to_string()))
        .context("installing global subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        console_enabled = config.console.enabled,
        file_enabled = config.file.enabled,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
