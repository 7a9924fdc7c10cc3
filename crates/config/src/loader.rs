//! Configuration loading utilities

use config::{Config, ConfigError, File};

use crate::Settings;

/// Load configuration from the config file
///
/// The file is optional; absent sections fall back to [`Settings::default`].
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	s.try_deserialize()
}
