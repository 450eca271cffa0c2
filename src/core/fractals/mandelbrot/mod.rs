pub mod algorithm;
pub mod intensity_map;
