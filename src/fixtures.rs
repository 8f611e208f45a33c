use rand::Rng;

pub const RECORD_TYPES: [&str; 2] = ["UC", "LCW/LCWRA"];

pub fn random_element<T>(items: &[T]) -> &T {
    let mut rng = rand::rng();
    &items[rng.random_range(0..items.len())]
}

pub fn random_nino_tag(prefix: &str, width: usize, bound: u32) -> String {
    let mut rng = rand::rng();
    let number = rng.random_range(0..bound);
    format!("{}{:0width$}", prefix, number)
}

pub fn random_nino() -> String {
    random_nino_tag("AA", 6, 1_000_000)
}

// 8 digits can never fit the real 2-letter + 6-digit NINO shape.
pub fn random_invalid_nino() -> String {
    random_nino_tag("ZZ", 8, 100_000_000)
}

pub fn random_universal_credit_record_type() -> &'static str {
    *random_element(&RECORD_TYPES)
}
