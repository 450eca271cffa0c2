pub mod generate_field;
pub mod generate_field_chunked;
pub mod generate_field_parallel_rayon;
pub mod ports;
