//! Демонстрационный сценарий: каждый паттерн выполняется один раз, в том же
//! порядке, что и при загрузке страницы.

use std::sync::{Arc, Mutex, PoisonError};

use patternbook_error::{PatternResult, ResultExt};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    command_registry::CommandRegistry,
    config::{AppConfig, ConfigSingleton, ConfigValues, Settings},
    display::{render_heading, DisplaySurface},
    module_pattern::{counter_incrementer, RevealingCollection},
    pubsub::TopicRegistry,
    snippets::{fizz_buzz, generate_random_hex_color, shuffle_array, FizzBuzz},
};

pub const MOUSE_CLICKED: &str = "mouseClicked";
pub const MOUSE_HOVERED: &str = "mouseHoreved";

/// Один вызов подписчика.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub subscriber: &'static str,
    pub topic: &'static str,
    pub payload: Value,
}

/// Результаты сценария.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub counter: Vec<u64>,
    pub fruits: Vec<String>,
    pub first_config: Arc<AppConfig>,
    pub second_config: Arc<AppConfig>,
    pub deliveries: Vec<Delivery>,
    pub added: Option<i64>,
    pub subtracted: Option<i64>,
    pub multiplied: Option<i64>,
    pub shuffled: Vec<u32>,
    pub color: String,
    pub fizz_buzz: Vec<FizzBuzz>,
}

impl DemoReport {
    /// Оба вызова `get_config` вернули один и тот же объект.
    pub fn config_is_shared(&self) -> bool {
        Arc::ptr_eq(&self.first_config, &self.second_config)
    }
}

type DeliveryLog = Arc<Mutex<Vec<Delivery>>>;

fn logger(
    log: &DeliveryLog,
    subscriber: &'static str,
    topic: &'static str,
) -> impl Fn(&Value) + Send + Sync + 'static {
    let log = log.clone();
    move |data: &Value| {
        info!(subscriber, topic, data = %data, "event received");
        log.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Delivery {
                subscriber,
                topic,
                payload: data.clone(),
            });
    }
}

/// Выполняет сценарий. Использует собственный [`ConfigSingleton`] и не
/// трогает глобальный.
pub fn run_demo<S: DisplaySurface + ?Sized>(
    settings: &Settings,
    surface: &mut S,
) -> PatternResult<DemoReport> {
    render_heading(surface, &settings.heading);

    // Module pattern: closure
    let mut counter_incrementer = counter_incrementer();
    let counter: Vec<u64> = (0..3).map(|_| counter_incrementer()).collect();
    info!(?counter, "closure counter");

    // Revealing module
    let fruits = RevealingCollection::fruits().get_objects();
    info!(?fruits, "fruits collection");

    // Singleton
    let singleton = ConfigSingleton::with_defaults(settings.defaults);
    let first_config = singleton.get_config(Some(ConfigValues::with_size(8)));
    let second_config = singleton.get_config(Some(ConfigValues::with_number(8)));
    info!(
        number = second_config.number,
        size = second_config.size,
        random_number = second_config.random_number,
        "configuration singleton"
    );

    // Observer
    let log: DeliveryLog = Arc::default();
    let mut pubsub: TopicRegistry<Value> = TopicRegistry::new();
    let _first_click = pubsub.subscribe(MOUSE_CLICKED, logger(&log, "first", MOUSE_CLICKED));
    let _hover = pubsub.subscribe(MOUSE_HOVERED, logger(&log, "hover", MOUSE_HOVERED));
    let second_click = pubsub.subscribe(MOUSE_CLICKED, logger(&log, "second", MOUSE_CLICKED));

    let click = json!({ "data": "data1" });
    let hover = json!({ "data": "data2" });
    pubsub.publish(MOUSE_CLICKED, &click);
    pubsub.publish(MOUSE_HOVERED, &hover);

    pubsub.unsubscribe(MOUSE_CLICKED, second_click);
    pubsub.publish(MOUSE_CLICKED, &click);
    pubsub.publish(MOUSE_HOVERED, &hover);

    let deliveries = log.lock().unwrap_or_else(PoisonError::into_inner).clone();

    // Command
    let manager = CommandRegistry::arithmetic();
    let added = manager.execute("add", &[3, 5]).context("executing add")?;
    let subtracted = manager
        .execute("subtract", &[5, 3])
        .context("executing subtract")?;
    let multiplied = manager
        .execute("multiply", &[2, 2])
        .context("executing multiply")?;
    info!(?added, ?subtracted, ?multiplied, "command dispatch");

    // One-liners
    let mut shuffled: Vec<u32> = (1..=10).collect();
    shuffle_array(&mut shuffled);
    let color = generate_random_hex_color();
    let fizz_buzz = fizz_buzz(6);
    info!(?shuffled, %color, ?fizz_buzz, "one-liners");

    Ok(DemoReport {
        counter,
        fruits,
        first_config,
        second_config,
        deliveries,
        added,
        subtracted,
        multiplied,
        shuffled,
        color,
        fizz_buzz,
    })
}
