//! Tally Configuration
//!
//! Configuration management and startup utilities for the tally aggregator.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	EnvironmentProfile, EnvironmentSettings, EstimationSettings, LogFormat, LoggingSettings,
	ServerSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
