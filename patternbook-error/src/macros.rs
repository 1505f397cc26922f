use crate::StackError;

/// Досрочный выход с ошибкой.
///
/// `bail!(err)` возвращает `Err(err.into())`, поэтому работает и в функциях
/// с доменной ошибкой, и в функциях с [`PatternResult`](crate::PatternResult).
/// `bail!(code, "fmt", args..)` строит [`GenericError`](crate::GenericError).
#[macro_export]
macro_rules! bail {
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err(::core::convert::Into::into($err))
    };
    ($code:expr, $($fmt:tt)+) => {
        return ::core::result::Result::Err(::core::convert::Into::into(
            $crate::GenericError::new($code, format!($($fmt)+)),
        ))
    };
}

/// `bail!`, если условие ложно.
///
/// ```
/// use patternbook_error::{ensure, ConfigError};
///
/// fn check_size(size: i64) -> Result<(), ConfigError> {
///     ensure!(
///         size > 0,
///         ConfigError::InvalidValue {
///             field: "defaults.size".into(),
///             reason: format!("must be positive, got {size}"),
///         }
///     );
///     Ok(())
/// }
///
/// assert!(check_size(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($rest:tt)+) => {
        if !($cond) {
            $crate::bail!($($rest)+);
        }
    };
}

/// `.context(..)` и `.with_context(..)` для любого `Result`, ошибку
/// которого можно превратить в [`StackError`].
pub trait ResultExt<T> {
    fn context(
        self,
        ctx: impl Into<String>,
    ) -> Result<T, StackError>;

    /// Строка контекста строится только при ошибке.
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<StackError>,
{
    #[track_caller]
    fn context(
        self,
        ctx: impl Into<String>,
    ) -> Result<T, StackError> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(ctx)),
        }
    }

    #[track_caller]
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(f())),
        }
    }
}
