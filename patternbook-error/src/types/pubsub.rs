use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки реестра тем (publish/subscribe).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PubSubError {
    /// Публикация в тему, на которую никто никогда не подписывался.
    #[error("topic not found: {topic}")]
    TopicNotFound { topic: String },
}

impl ErrorExt for PubSubError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::TopicNotFound { .. } => StatusCode::TopicNotFound,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
