pub mod complex;
pub mod complex_region;
pub mod field;
pub mod normalized_field;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
