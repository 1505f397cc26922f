use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки выполнения зарегистрированной команды.
///
/// Неизвестное имя команды ошибкой не является: диспетчер возвращает для
/// него `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command '{command}' expects {expected} arguments, got {actual}")]
    WrongArity {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("command '{command}' overflowed")]
    Overflow { command: String },
}

impl CommandError {
    /// Имя команды, в которой произошла ошибка.
    pub fn command(&self) -> &str {
        match self {
            Self::WrongArity { command, .. } | Self::Overflow { command } => command,
        }
    }
}

impl ErrorExt for CommandError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::WrongArity { .. } => StatusCode::WrongArity,
            Self::Overflow { .. } => StatusCode::Overflow,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
