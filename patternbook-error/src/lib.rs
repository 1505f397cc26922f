//! Ошибки patternbook: коды статуса, доменные ошибки и `StackError` с
//! цепочкой контекстов.

pub mod ext;
pub mod macros;
pub mod stack;
pub mod status_code;
pub mod types;

pub use ext::ErrorExt;
pub use macros::ResultExt;
pub use stack::{Frame, StackError};
pub use status_code::StatusCode;
pub use types::*;

pub type PatternResult<T> = Result<T, StackError>;
