use std::fmt;

/// Ф-я обратного вызова подписчика: получает payload по ссылке.
pub type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Идентификатор подписки, выданный реестром.
///
/// Уникален в пределах одного [`TopicRegistry`](super::TopicRegistry) для
/// всех его тем и строго возрастает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Запись подписчика внутри темы.
///
/// Создаётся при подписке, удаляется при отписке и никогда не изменяется.
pub struct SubscriptionRecord<T> {
    pub(crate) id: SubscriptionId,
    pub(crate) callback: Callback<T>,
}

impl SubscriptionId {
    /// Числовое значение идентификатора.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T> SubscriptionRecord<T> {
    pub(crate) fn new(
        id: SubscriptionId,
        callback: Callback<T>,
    ) -> Self {
        Self { id, callback }
    }

    /// Идентификатор этой подписки.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Вызывает callback подписчика с переданным payload.
    pub(crate) fn deliver(
        &self,
        payload: &T,
    ) {
        (self.callback)(payload)
    }
}

impl<T> fmt::Debug for SubscriptionRecord<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("SubscriptionRecord")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
