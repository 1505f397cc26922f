//! Однострочники: перемешивание, случайный цвет, FizzBuzz.

pub mod color;
pub mod fizzbuzz;
pub mod shuffle;

pub use color::*;
pub use fizzbuzz::*;
pub use shuffle::*;
