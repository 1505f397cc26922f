use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс доменных ошибок.
///
/// Трейт object-safe: [`StackError`](crate::StackError) хранит корневую
/// ошибку как `Arc<dyn ErrorExt>`.
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Нужен для `StackError::downcast_ref`.
    fn as_any(&self) -> &dyn Any;

    /// Сообщение, которое можно показать пользователю.
    ///
    /// Для внутренних кодов текст ошибки скрывается.
    fn client_message(&self) -> String {
        if self.status_code().is_internal() {
            "Internal error".to_string()
        } else {
            self.to_string()
        }
    }
}
