//! Configuration types
//!
//! This module provides configuration types for the logging system, organized into:
//! - `base`: Core configuration structs (Config, Format, Level, Writer)
//! - `display`: Display toggles for the fmt layer
//! - `presets`: Pre-configured setups (development, production, env)

mod base;
mod display;
mod presets;

pub use base::{Config, Format, Level, Writer};
pub use display::DisplayConfig;
