use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Значение одной позиции FizzBuzz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FizzBuzz {
    FizzBuzz,
    Fizz,
    Buzz,
    #[strum(to_string = "")]
    #[serde(rename = "")]
    Empty,
}

impl FizzBuzz {
    pub fn for_number(i: u64) -> Self {
        match (i % 3 == 0, i % 5 == 0) {
            (true, true) => Self::FizzBuzz,
            (true, false) => Self::Fizz,
            (false, true) => Self::Buzz,
            (false, false) => Self::Empty,
        }
    }
}

/// FizzBuzz для `1..=n`. Для `n = 0` — пустой вектор.
pub fn fizz_buzz(n: u64) -> Vec<FizzBuzz> {
    (1..=n).map(FizzBuzz::for_number).collect()
}
