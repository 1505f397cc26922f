use std::io::{self, IsTerminal, Stderr};

use tracing_subscriber::{fmt::MakeWriter, layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{config::LoggingConfig, formatter};

/// Console layer с конфигурацией.
///
/// Пишет в stderr: stdout занят поверхностью отображения. ANSI-цвета
/// включаются, только если stderr является терминалом.
pub fn layer_with_config<S>(config: &LoggingConfig) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let writer: fn() -> Stderr = io::stderr;
    let ansi = use_ansi(config, io::stderr().is_terminal());
    layer_with_writer(config, writer, ansi)
}

/// То же, что [`layer_with_config`], но с явным writer'ом.
pub fn layer_with_writer<S, W>(
    config: &LoggingConfig,
    writer: W,
    ansi: bool,
) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    formatter::build_formatter_from_config(config, writer, ansi)
}

fn use_ansi(
    config: &LoggingConfig,
    is_terminal: bool,
) -> bool {
    config.console.with_ansi && is_terminal
}
