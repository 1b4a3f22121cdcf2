//! Error handling for Greenlight.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod index_error;
pub mod layout_error;

pub use config_error::ConfigError;
pub use index_error::{IndexError, IndexResult};
pub use layout_error::LayoutError;
