/// Command dispatch table (name → handler).
pub mod command_registry;
/// Application settings and the configuration singleton.
pub mod config;
/// Load-time demo scenario that runs every pattern once.
pub mod demo;
/// Host display surface and heading rendering.
pub mod display;
/// Common error types (re-exported from `patternbook-error`).
pub mod error;
/// Logging (formatting, filters, sinks).
pub mod logging;
/// Closure counter and revealing-module collection.
pub mod module_pattern;
/// Pub/Sub: TopicRegistry, SubscriptionId.
pub mod pubsub;
/// One-liners: shuffle, random hex color, FizzBuzz.
pub mod snippets;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Command dispatch.
pub use command_registry::{CommandRegistry, Handler};
/// config
pub use config::{
    AppConfig, ConfigDefaults, ConfigSingleton, ConfigValues, Settings,
};
/// Demo scenario.
pub use demo::{run_demo, DemoReport, Delivery};
/// Display surfaces.
pub use display::{render_heading, BufferSurface, DisplaySurface, StdoutSurface, WriterSurface};
/// Operation errors and result types.
pub use error::{
    CommandError, ConfigError, ErrorExt, GenericError, PatternResult, PubSubError, ResultExt,
    StackError, StatusCode,
};
/// Logging API.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Module pattern.
pub use module_pattern::{counter_incrementer, RevealingCollection};
/// Pub/Sub API.
pub use pubsub::{SubscriptionId, TopicRegistry};
/// One-liners.
pub use snippets::{
    fizz_buzz, generate_random_hex_color, random_hex_color_with, shuffle_array, shuffle_with,
    FizzBuzz,
};
