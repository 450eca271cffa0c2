//! Render configuration.
//!
//! [`RenderSettings`] is the loosely typed form read from JSON files and the
//! command line. [`RenderSettings::validate`] turns it into a
//! [`RenderConfig`], the immutable value every controller receives.

mod errors;
mod render_config;
mod settings;

pub use errors::ConfigError;
pub use render_config::RenderConfig;
pub use settings::{RegionSettings, RenderSettings};
