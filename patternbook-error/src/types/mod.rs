pub mod command;
pub mod config;
pub mod pubsub;

pub use command::*;
pub use config::*;
pub use pubsub::*;

use std::{any::Any, io};

use thiserror::Error;

use crate::{ErrorExt, StackError, StatusCode};

/// Ошибка без собственного типа: код плюс сообщение.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenericError {
    code: StatusCode,
    message: String,
}

impl GenericError {
    pub fn new(
        code: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl ErrorExt for GenericError {
    fn status_code(&self) -> StatusCode {
        self.code
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<io::Error> for StackError {
    fn from(err: io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound => StatusCode::NotFound,
            io::ErrorKind::InvalidInput => StatusCode::InvalidArgs,
            _ => StatusCode::Io,
        };
        StackError::new(GenericError::new(code, err.to_string()))
    }
}
