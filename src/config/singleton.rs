use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use patternbook_error::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Значения по умолчанию, поверх которых накладываются переопределения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub number: i64,
    pub size: i64,
}

/// Переопределения, переданные вызывающим кодом.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// Значение синглтона. Неизменяемо после создания.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    /// Случайное число из `[0, 1)`, выбранное при инициализации.
    pub random_number: f64,
    /// Переопределения в том виде, в каком их передали.
    pub values: ConfigValues,
    pub number: i64,
    pub size: i64,
}

/// Ленивая одноразовая инициализация конфигурации.
///
/// Первый вызов фиксирует значение, все последующие возвращают тот же
/// `Arc`, даже если переданы другие переопределения.
#[derive(Debug)]
pub struct ConfigSingleton {
    defaults: ConfigDefaults,
    cell: OnceCell<Arc<AppConfig>>,
}

static GLOBAL_CONFIG: Lazy<ConfigSingleton> = Lazy::new(ConfigSingleton::new);

/// Общий для процесса экземпляр с дефолтами `number = 5`, `size = 10`.
pub fn global() -> &'static ConfigSingleton {
    &GLOBAL_CONFIG
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self { number: 5, size: 10 }
    }
}

impl ConfigValues {
    pub fn with_number(number: i64) -> Self {
        Self {
            number: Some(number),
            size: None,
        }
    }

    pub fn with_size(size: i64) -> Self {
        Self {
            number: None,
            size: Some(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.size.is_none()
    }
}

impl AppConfig {
    fn build(
        defaults: ConfigDefaults,
        overrides: ConfigValues,
    ) -> Self {
        Self {
            random_number: rand::thread_rng().gen::<f64>(),
            values: overrides,
            number: overrides.number.unwrap_or(defaults.number),
            size: overrides.size.unwrap_or(defaults.size),
        }
    }
}

impl ConfigSingleton {
    pub fn new() -> Self {
        Self::with_defaults(ConfigDefaults::default())
    }

    pub fn with_defaults(defaults: ConfigDefaults) -> Self {
        Self {
            defaults,
            cell: OnceCell::new(),
        }
    }

    /// Возвращает конфигурацию, создавая её при первом вызове.
    ///
    /// Переопределения учитываются только в первом вызове. В последующих
    /// они молча игнорируются, а возвращается закэшированное значение.
    pub fn get_config(
        &self,
        overrides: Option<ConfigValues>,
    ) -> Arc<AppConfig> {
        let mut created = false;
        let config = self
            .cell
            .get_or_init(|| {
                created = true;
                Arc::new(AppConfig::build(self.defaults, overrides.unwrap_or_default()))
            })
            .clone();

        if !created {
            if let Some(ignored) = overrides {
                debug!(?ignored, "configuration already initialized, overrides ignored");
            }
        }
        config
    }

    /// Строгая инициализация: второй вызов завершается ошибкой
    /// [`ConfigError::AlreadyInitialized`].
    pub fn initialize(
        &self,
        overrides: ConfigValues,
    ) -> Result<Arc<AppConfig>, ConfigError> {
        let config = Arc::new(AppConfig::build(self.defaults, overrides));
        self.cell
            .set(config.clone())
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        Ok(config)
    }

    /// Текущее значение, если инициализация уже была.
    pub fn get(&self) -> Option<Arc<AppConfig>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn defaults(&self) -> ConfigDefaults {
        self.defaults
    }
}

impl Default for ConfigSingleton {
    fn default() -> Self {
        Self::new()
    }
}
