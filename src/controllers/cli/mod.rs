pub mod image;
pub mod zoom;
