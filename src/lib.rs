//! Tally Aggregator Library
//!
//! A cost-estimate aggregation service for travel and event services,
//! providing per-kind estimation, invoice assembly and an HTTP surface.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use tally_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Primary domain entities
	Confidence,
	CostBreakdown,
	Estimate,
	EstimateRequest,
	EstimateResponse,
	// Error types
	EstimatorError,
	InvoiceRequest,
	InvoiceResponse,
	ServiceKind,
	ValidationError,
};

// Estimator seam
pub use tally_estimators::EstimatorRegistry;
pub use tally_types::Estimator;

// Service layer
pub use tally_service::{AggregationStats, InvoiceService, LineItemFailure};

// API layer
pub use tally_api::{create_router, AppState};

// Config
pub use tally_config::{load_config, log_service_info, log_startup_complete, Settings};

// Re-export external dependencies for embedders
pub use async_trait;

pub mod mocks;

/// Builder pattern for configuring the aggregator
///
/// The server is an explicitly-owned object: settings, the estimator
/// registry and the listening socket are all constructed here, not held as
/// process-wide globals.
pub struct AggregatorBuilder {
	settings: Option<Settings>,
	registry: Option<EstimatorRegistry>,
}

impl Default for AggregatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregatorBuilder {
	/// Create a new aggregator builder
	pub fn new() -> Self {
		Self {
			settings: None,
			registry: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the whole estimator registry
	pub fn with_registry(mut self, registry: EstimatorRegistry) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Register a custom estimator (replaces the default for its kind)
	pub fn with_estimator(mut self, estimator: Arc<dyn Estimator>) -> Self {
		let mut registry = self
			.registry
			.take()
			.unwrap_or_else(EstimatorRegistry::with_defaults);
		registry.register(estimator);
		self.registry = Some(registry);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use tally_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the aggregator and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let registry = Arc::new(
			self.registry
				.unwrap_or_else(EstimatorRegistry::with_defaults),
		);

		let invoice_service = InvoiceService::new(
			Arc::clone(&registry),
			settings.timeouts.per_estimate_ms,
			settings.timeouts.global_ms,
			settings.estimation.validity_days,
			settings.estimation.manual_review_threshold,
		);

		// Every catalog kind must have an estimator before serving
		invoice_service
			.validate_estimators()
			.map_err(|e| format!("Estimator validation failed: {}", e))?;

		let stats = invoice_service.stats();
		info!(
			"Successfully initialized with {} estimator(s)",
			stats.registered_estimators
		);

		let app_state = AppState {
			invoice_service: Arc::new(invoice_service),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the binary: loading .env, loading
	/// configuration, initializing tracing, binding and serving.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.clone().unwrap_or_default()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		info!("🔧 Configuring tally aggregator server");
		info!(
			"Timeouts: {}ms per estimate, {}ms global",
			settings.timeouts.per_estimate_ms, settings.timeouts.global_ms
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion with comprehensive information
		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /estimate");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app).await?;

		Ok(())
	}
}
