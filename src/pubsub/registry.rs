use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use patternbook_error::PubSubError;
use tracing::{debug, trace};

use super::{SubscriptionId, SubscriptionRecord};

type TopicKey = Arc<str>;

/// Реестр тем Pub/Sub с синхронной доставкой.
///
/// Поддерживает:
/// - Ленивое создание темы при первой подписке
/// - Доставку в порядке подписки, без параллелизма
/// - Отписку по идентификатору с сохранением порядка остальных
/// - Статистику публикаций и промахов (публикаций в неизвестную тему)
///
/// Счётчик идентификаторов принадлежит экземпляру реестра: два реестра
/// выдают идентификаторы независимо друг от друга.
pub struct TopicRegistry<T> {
    /// Тема → упорядоченные подписчики
    topics: HashMap<TopicKey, Vec<SubscriptionRecord<T>>>,
    /// Последний выданный идентификатор (0 — ещё ни одного)
    last_id: u64,
    /// Общее количество вызовов `publish`/`try_publish`
    pub publish_count: AtomicUsize,
    /// Количество публикаций в тему, на которую никто не подписывался
    pub miss_count: AtomicUsize,
}

impl<T> TopicRegistry<T> {
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
            last_id: 0,
            publish_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        }
    }

    /// Регистрирует `callback` в теме `topic` и возвращает новый
    /// идентификатор подписки.
    ///
    /// Идентификатор увеличивается до использования, поэтому первый
    /// выданный идентификатор равен 1.
    pub fn subscribe<F>(
        &mut self,
        topic: &str,
        callback: F,
    ) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.last_id += 1;
        let id = SubscriptionId(self.last_id);

        self.topics
            .entry(Arc::from(topic))
            .or_default()
            .push(SubscriptionRecord::new(id, Box::new(callback)));

        trace!(topic, id = id.get(), "subscribed");
        id
    }

    /// Удаляет подписку `id` из темы `topic`.
    ///
    /// Неизвестная тема или идентификатор — no-op. Возвращает `true`, если
    /// подписка действительно была удалена.
    pub fn unsubscribe(
        &mut self,
        topic: &str,
        id: SubscriptionId,
    ) -> bool {
        let Some(subscribers) = self.topics.get_mut(topic) else {
            return false;
        };

        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;

        trace!(topic, id = id.get(), removed, "unsubscribe");
        removed
    }

    /// Публикует `payload` всем подписчикам темы `topic`.
    ///
    /// Callback'и вызываются синхронно, в порядке подписки. Публикация в
    /// тему без подписок — no-op. Возвращает количество вызванных
    /// callback'ов.
    ///
    /// Паника в callback'е не перехватывается: оставшиеся подписчики в этом
    /// случае не вызываются.
    pub fn publish(
        &self,
        topic: &str,
        payload: &T,
    ) -> usize {
        self.try_publish(topic, payload).unwrap_or(0)
    }

    /// То же, что [`publish`](Self::publish), но сообщает об отсутствующей
    /// теме ошибкой [`PubSubError::TopicNotFound`].
    ///
    /// Тема, из которой отписаны все подписчики, по-прежнему существует и
    /// даёт `Ok(0)`.
    pub fn try_publish(
        &self,
        topic: &str,
        payload: &T,
    ) -> Result<usize, PubSubError> {
        self.publish_count.fetch_add(1, Ordering::Relaxed);

        let Some(subscribers) = self.topics.get(topic) else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
            debug!(topic, "publish to unknown topic");
            return Err(PubSubError::TopicNotFound {
                topic: topic.to_string(),
            });
        };

        for subscriber in subscribers {
            subscriber.deliver(payload);
        }

        trace!(topic, delivered = subscribers.len(), "published");
        Ok(subscribers.len())
    }

    /// Удаляет тему вместе со всеми подписками.
    ///
    /// Следующая `publish` не создаст тему заново.
    pub fn remove_topic(
        &mut self,
        topic: &str,
    ) -> bool {
        self.topics.remove(topic).is_some()
    }

    /// Количество активных подписчиков темы (0 для неизвестной темы).
    pub fn subscriber_count(
        &self,
        topic: &str,
    ) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }

    pub fn has_topic(
        &self,
        topic: &str,
    ) -> bool {
        self.topics.contains_key(topic)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Имена всех известных тем в алфавитном порядке.
    pub fn topics(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.topics.keys().map(|k| &**k).collect();
        names.sort_unstable();
        names
    }
}

impl<T> Default for TopicRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TopicRegistry<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("TopicRegistry")
            .field("topics", &self.topics)
            .field("last_id", &self.last_id)
            .field("publish_count", &self.publish_count.load(Ordering::Relaxed))
            .field("miss_count", &self.miss_count.load(Ordering::Relaxed))
            .finish()
    }
}
