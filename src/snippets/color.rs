use rand::Rng;

/// Случайный цвет в формате `#rrggbb`.
pub fn generate_random_hex_color() -> String {
    random_hex_color_with(&mut rand::thread_rng())
}

/// Значение берётся из `0..0xffffff` и дополняется нулями до 6 цифр.
pub fn random_hex_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: u32 = rng.gen_range(0..0xff_ffff);
    format!("#{value:06x}")
}
