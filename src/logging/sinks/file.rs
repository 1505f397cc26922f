use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{config::LoggingConfig, formatter};

/// Файловый layer с ежедневной ротацией и неблокирующей записью.
///
/// `WorkerGuard` должен жить до конца работы программы: при его drop
/// буфер сбрасывается на диск.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> (Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = daily(&config.file.directory, &config.file.filename);
    let (writer, guard) = non_blocking(file_appender);

    // В файл — без ANSI-последовательностей.
    let layer = formatter::build_formatter_from_config(config, writer, false);
    (layer, guard)
}
