use rand::{seq::SliceRandom, Rng};

/// Перемешивает срез на месте (Fisher–Yates) и возвращает его же.
pub fn shuffle_array<T>(items: &mut [T]) -> &mut [T] {
    shuffle_with(items, &mut rand::thread_rng())
}

/// То же, что [`shuffle_array`], с явным генератором.
pub fn shuffle_with<'a, T, R: Rng + ?Sized>(
    items: &'a mut [T],
    rng: &mut R,
) -> &'a mut [T] {
    items.shuffle(rng);
    items
}
