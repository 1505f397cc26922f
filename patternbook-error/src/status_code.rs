use std::fmt;

use num_enum::TryFromPrimitive;

/// Код статуса ошибки.
///
/// Тысячи задают группу: 1xxx общие, 2xxx данные и аргументы,
/// 3xxx конфигурация, 4xxx pub/sub, 5xxx команды, 6xxx ввод-вывод.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    Success = 0,

    Unknown = 1000,
    Unexpected = 1002,
    Internal = 1003,
    InvalidArgs = 1004,

    NotFound = 2000,
    Overflow = 2010,

    ConfigLoadFailed = 3000,
    AlreadyInitialized = 3001,
    InvalidConfig = 3002,

    TopicNotFound = 4000,

    WrongArity = 5001,

    Io = 6000,
}

impl StatusCode {
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// `None`, если такого кода нет.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Внутренние ошибки, детали которых не показываются вызывающему.
    pub fn is_internal(self) -> bool {
        matches!(self, Self::Unknown | Self::Unexpected | Self::Internal)
    }

    /// Группа кода: 1 для 1xxx, 3 для 3xxx и т.д.
    pub const fn group(self) -> u32 {
        self.code() / 1000
    }
}

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}
