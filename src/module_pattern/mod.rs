//! Паттерн «модуль»: приватное состояние за узким публичным API.
//!
//! - `counter`: замыкание-счётчик с приватной переменной.
//! - `collection`: revealing module — коллекция с add/remove/read.

pub mod collection;
pub mod counter;

pub use collection::*;
pub use counter::*;
