//! Подсистема Publish–Subscribe (pub/sub).
//!
//! Лёгкий внутрипроцессный реестр тем с синхронной доставкой:
//!
//! - `registry`: регистрация тем, подписки, отписки и доставка payload.
//! - `subscription`: идентификатор подписки и запись подписчика.
//!
//! Публичный API переэкспортирует:
//! - `registry::*`
//! - `subscription::*`

pub mod registry;
pub mod subscription;

pub use registry::*;
pub use subscription::*;
