//! Конфигурация: настройки приложения и синглтон конфигурации.

pub mod settings;
pub mod singleton;

pub use settings::*;
pub use singleton::*;
