//! Configuration settings structures

use serde::{Deserialize, Serialize};
use tally_types::constants::limits::{
	DEFAULT_ESTIMATE_TIMEOUT_MS, DEFAULT_GLOBAL_TIMEOUT_MS, DEFAULT_MANUAL_REVIEW_THRESHOLD,
	DEFAULT_VALIDITY_DAYS,
};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub timeouts: TimeoutSettings,
	pub estimation: EstimationSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Per-line-item estimation timeout in milliseconds
	pub per_estimate_ms: u64,
	/// Global aggregation timeout in milliseconds
	pub global_ms: u64,
}

/// Estimation policy configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EstimationSettings {
	/// How long a produced invoice remains valid, in days
	pub validity_days: i64,
	/// Invoice total at or above which manual review is required, in USD
	pub manual_review_threshold: Option<f64>,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	#[default]
	Development,
	Staging,
	Production,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	#[default]
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			timeouts: TimeoutSettings::default(),
			estimation: EstimationSettings::default(),
			environment: EnvironmentSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_estimate_ms: DEFAULT_ESTIMATE_TIMEOUT_MS,
			global_ms: DEFAULT_GLOBAL_TIMEOUT_MS,
		}
	}
}

impl Default for EstimationSettings {
	fn default() -> Self {
		Self {
			validity_days: DEFAULT_VALIDITY_DAYS,
			manual_review_threshold: Some(DEFAULT_MANUAL_REVIEW_THRESHOLD),
		}
	}
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: true,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}
}
