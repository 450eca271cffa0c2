pub mod generate_field;
pub mod normalize_field;
