use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки конфигурации: загрузка настроек и одноразовая инициализация.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Повторный вызов строгой инициализации синглтона.
    #[error("configuration is already initialized")]
    AlreadyInitialized,

    /// Не удалось собрать или десериализовать настройки.
    #[error("failed to load settings: {reason}")]
    Load { reason: String },

    /// Значение настройки не прошло проверку.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ErrorExt for ConfigError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyInitialized => StatusCode::AlreadyInitialized,
            Self::Load { .. } => StatusCode::ConfigLoadFailed,
            Self::InvalidValue { .. } => StatusCode::InvalidConfig,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::AlreadyInitialized => "Configuration already initialized".to_string(),
            Self::Load { .. } => "Settings could not be loaded".to_string(),
            Self::InvalidValue { field, .. } => format!("Invalid setting: {field}"),
        }
    }
}
