/// Revealing module: упорядоченная коллекция, спрятанная за
/// `add_object` / `remove_object` / `get_objects`.
///
/// Чтение всегда отдаёт независимую копию, поэтому изменения снимка не
/// влияют на внутреннее хранилище.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealingCollection<T> {
    objects: Vec<T>,
}

impl<T> RevealingCollection<T> {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Добавляет значение в конец.
    pub fn add_object(
        &mut self,
        object: T,
    ) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T: PartialEq> RevealingCollection<T> {
    /// Удаляет первое вхождение `object`. Если значения нет — no-op.
    pub fn remove_object(
        &mut self,
        object: &T,
    ) -> bool {
        match self.objects.iter().position(|o| o == object) {
            Some(index) => {
                self.objects.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(
        &self,
        object: &T,
    ) -> bool {
        self.objects.contains(object)
    }
}

impl<T: Clone> RevealingCollection<T> {
    /// Снимок содержимого в порядке добавления.
    pub fn get_objects(&self) -> Vec<T> {
        self.objects.clone()
    }
}

impl RevealingCollection<String> {
    /// Коллекция фруктов из демонстрационного сценария.
    pub fn fruits() -> Self {
        ["apple", "mange", "pain", "lait"].into_iter().map(String::from).collect()
    }
}

impl<T> Default for RevealingCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RevealingCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for RevealingCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        self.objects.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruits_in_insertion_order() {
        let fruits = RevealingCollection::fruits();
        assert_eq!(fruits.get_objects(), vec!["apple", "mange", "pain", "lait"]);
    }

    /// Тест проверяет, что изменение снимка не влияет на последующие чтения.
    #[test]
    fn test_snapshot_does_not_alias_storage() {
        let fruits = RevealingCollection::fruits();
        let mut snapshot = fruits.get_objects();
        snapshot.push("banana".to_string());
        snapshot[0].push_str("-changed");

        assert_eq!(fruits.get_objects(), vec!["apple", "mange", "pain", "lait"]);
    }

    /// Тест проверяет, что удаляется только первое вхождение, а хвост
    /// остаётся на месте.
    #[test]
    fn test_remove_first_occurrence_only() {
        let mut items: RevealingCollection<i32> = [1, 2, 3, 2, 4].into_iter().collect();

        assert!(items.remove_object(&2));
        assert_eq!(items.get_objects(), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut fruits = RevealingCollection::fruits();
        assert!(!fruits.remove_object(&"kiwi".to_string()));
        assert_eq!(fruits.len(), 4);
    }

    #[test]
    fn test_add_appends() {
        let mut items = RevealingCollection::new();
        assert!(items.is_empty());
        items.add_object('a');
        items.extend(['b', 'c']);
        assert_eq!(items.get_objects(), vec!['a', 'b', 'c']);
        assert!(items.contains(&'b'));
    }
}
