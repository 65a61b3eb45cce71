//! Configuration management for the allowance engine
//!
//! Settings are layered from built-in defaults, an optional file and
//! environment variables. The core crate holds the fixed linguistic model;
//! this crate only controls the runtime knobs around it.

pub mod constants;
pub mod settings;

pub use settings::{BatchSettings, ConfigError, InferenceSettings, LoggingSettings, Settings};
