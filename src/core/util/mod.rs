pub mod calculate_column_chunks;
pub mod pixel_to_complex_coords;
pub mod viewport_to_complex_region;
