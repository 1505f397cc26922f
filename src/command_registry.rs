use std::collections::HashMap;

use patternbook_error::CommandError;
use tracing::debug;

/// Ф-я обработчик команды: получает позиционные аргументы.
pub type Handler = Box<dyn Fn(&[i64]) -> Result<i64, CommandError> + Send + Sync>;

/// Таблица команд: имя → обработчик.
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Таблица с арифметикой: `add` и `subtract`, по два операнда.
    pub fn arithmetic() -> Self {
        let mut registry = Self::new();
        registry.register("add", |args| {
            let (x, y) = binary("add", args)?;
            x.checked_add(y).ok_or_else(|| CommandError::Overflow {
                command: "add".into(),
            })
        });
        registry.register("subtract", |args| {
            let (x, y) = binary("subtract", args)?;
            x.checked_sub(y).ok_or_else(|| CommandError::Overflow {
                command: "subtract".into(),
            })
        });
        registry
    }

    /// Регистрирует команду `name` с обработчиком `h`. Повторная регистрация
    /// заменяет прежний обработчик.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        h: F,
    ) where
        F: Fn(&[i64]) -> Result<i64, CommandError> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(h));
    }

    /// Вызывает handler для `name`.
    ///
    /// Неизвестная команда — не ошибка: возвращается `Ok(None)`, и
    /// вызывающий код обязан это проверить.
    pub fn execute(
        &self,
        name: &str,
        args: &[i64],
    ) -> Result<Option<i64>, CommandError> {
        let Some(h) = self.handlers.get(name) else {
            debug!(command = name, "unknown command");
            return Ok(None);
        };
        h(args).map(Some)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.handlers.contains_key(name)
    }

    /// Имена зарегистрированных команд в алфавитном порядке.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn binary(
    command: &str,
    args: &[i64],
) -> Result<(i64, i64), CommandError> {
    match *args {
        [x, y] => Ok((x, y)),
        _ => Err(CommandError::WrongArity {
            command: command.to_string(),
            expected: 2,
            actual: args.len(),
        }),
    }
}
