pub mod normalize_field;
pub mod ports;
