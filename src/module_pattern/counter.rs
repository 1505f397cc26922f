/// Возвращает замыкание-счётчик.
///
/// Счётчик начинается с 0 и увеличивается до возврата, поэтому вызовы
/// дают 1, 2, 3, … Состояние доступно только через само замыкание.
pub fn counter_incrementer() -> impl FnMut() -> u64 {
    let mut counter = 0u64;
    move || {
        counter += 1;
        counter
    }
}
