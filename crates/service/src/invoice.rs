//! Core invoice aggregation logic

use std::sync::Arc;

use chrono::Duration as ChronoDuration;
use futures::future::join_all;
use tally_estimators::EstimatorRegistry;
use tally_types::estimates::{Confidence, Estimate};
use tally_types::invoices::{InvoiceRequest, InvoiceResponse};
use tally_types::requests::ServiceKind;
use tally_types::EstimatorError;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

/// One dropped line-item and the reason estimation failed
#[derive(Debug, Clone)]
pub struct LineItemFailure {
	/// Zero-based position in the request's `estimates` sequence
	pub index: usize,
	pub kind: ServiceKind,
	pub reason: String,
}

impl LineItemFailure {
	/// Caller-facing warning string; indexes are one-based on the wire
	pub fn to_warning(&self) -> String {
		format!(
			"line item {} ({}) could not be estimated: {}",
			self.index + 1,
			self.kind,
			self.reason
		)
	}
}

/// Service for aggregating per-item estimates into an invoice
pub struct InvoiceService {
	registry: Arc<EstimatorRegistry>,
	per_estimate_timeout_ms: u64,
	global_timeout_ms: u64,
	validity_days: i64,
	manual_review_threshold: Option<f64>,
}

impl InvoiceService {
	/// Create a new invoice service with a pre-configured estimator registry
	pub fn new(
		registry: Arc<EstimatorRegistry>,
		per_estimate_timeout_ms: u64,
		global_timeout_ms: u64,
		validity_days: i64,
		manual_review_threshold: Option<f64>,
	) -> Self {
		Self {
			registry,
			per_estimate_timeout_ms,
			global_timeout_ms,
			validity_days,
			manual_review_threshold,
		}
	}

	/// Validate that every catalog kind has a registered estimator
	pub fn validate_estimators(&self) -> Result<(), String> {
		let missing = self.registry.missing_kinds();
		if missing.is_empty() {
			return Ok(());
		}

		let names: Vec<&str> = missing.iter().map(ServiceKind::as_str).collect();
		Err(format!(
			"No estimator registered for kind(s): {}",
			names.join(", ")
		))
	}

	/// Fetch estimates concurrently for every line-item in the request
	///
	/// Every line-item is spawned as an independent task and the batch settles
	/// as a whole: one item's failure never aborts its siblings. Successes come
	/// back in request order (join order follows spawn order); failures are
	/// collected with their line-item identity instead of being swallowed.
	pub async fn fetch_estimates(
		&self,
		request: &InvoiceRequest,
	) -> (Vec<Estimate>, Vec<LineItemFailure>) {
		info!(
			"Fetching estimates for {} line item(s)",
			request.estimates.len()
		);

		let tasks = request
			.estimates
			.iter()
			.cloned()
			.enumerate()
			.map(|(index, line_item)| {
				let registry = Arc::clone(&self.registry);
				let timeout_ms = self.per_estimate_timeout_ms;

				tokio::spawn(async move {
					let kind = line_item.kind();
					debug!("Starting estimate for line item {} ({})", index, kind);

					let estimator = match registry.get(kind) {
						Some(estimator) => estimator,
						None => return Err(EstimatorError::NotRegistered { kind }),
					};

					match timeout(
						Duration::from_millis(timeout_ms),
						estimator.estimate(&line_item),
					)
					.await
					{
						Ok(outcome) => outcome,
						Err(_) => Err(EstimatorError::Timeout { timeout_ms }),
					}
				})
			});

		// Settle the whole batch under one global timeout
		let aggregation_future = join_all(tasks);
		let global_timeout = Duration::from_millis(self.global_timeout_ms);

		let results = match timeout(global_timeout, aggregation_future).await {
			Ok(results) => results,
			Err(_) => {
				warn!(
					"Global aggregation timeout reached after {}ms",
					self.global_timeout_ms
				);
				let failures = request
					.estimates
					.iter()
					.enumerate()
					.map(|(index, line_item)| LineItemFailure {
						index,
						kind: line_item.kind(),
						reason: format!(
							"aggregation timed out after {}ms",
							self.global_timeout_ms
						),
					})
					.collect();
				return (Vec::new(), failures);
			},
		};

		let mut estimates = Vec::new();
		let mut failures = Vec::new();

		for (index, joined) in results.into_iter().enumerate() {
			let kind = request.estimates[index].kind();
			match joined {
				Ok(Ok(estimate)) => estimates.push(estimate),
				Ok(Err(error)) => {
					warn!(
						"Estimation failed for line item {} ({}): {}",
						index, kind, error
					);
					failures.push(LineItemFailure {
						index,
						kind,
						reason: error.to_string(),
					});
				},
				Err(join_error) => {
					warn!(
						"Estimation task for line item {} ({}) did not complete: {}",
						index, kind, join_error
					);
					failures.push(LineItemFailure {
						index,
						kind,
						reason: "estimation task did not complete".to_string(),
					});
				},
			}
		}

		info!(
			"Estimate aggregation completed: {} of {} line item(s) priced",
			estimates.len(),
			request.estimates.len()
		);

		(estimates, failures)
	}

	/// Produce the full invoice response for a validated request
	pub async fn aggregate(&self, request: &InvoiceRequest) -> InvoiceResponse {
		let (estimates, failures) = self.fetch_estimates(request).await;

		let requires_manual_review = self.requires_manual_review(&estimates, &failures);
		let warnings = failures.iter().map(LineItemFailure::to_warning).collect();

		InvoiceResponse::from_estimates(
			estimates,
			warnings,
			requires_manual_review,
			ChronoDuration::days(self.validity_days),
		)
	}

	/// Manual-review policy: any failure, any low-confidence estimate, or a
	/// total at or above the configured threshold
	fn requires_manual_review(&self, estimates: &[Estimate], failures: &[LineItemFailure]) -> bool {
		if !failures.is_empty() {
			return true;
		}

		if estimates
			.iter()
			.any(|estimate| estimate.confidence == Confidence::Low)
		{
			return true;
		}

		if let Some(threshold) = self.manual_review_threshold {
			let total: f64 = estimates.iter().map(|e| e.estimated_cost).sum();
			if total >= threshold {
				return true;
			}
		}

		false
	}

	/// Get aggregation statistics
	pub fn stats(&self) -> AggregationStats {
		AggregationStats {
			registered_estimators: self.registry.len(),
			per_estimate_timeout_ms: self.per_estimate_timeout_ms,
			global_timeout_ms: self.global_timeout_ms,
		}
	}
}

/// Aggregation service statistics
#[derive(Debug, Clone)]
pub struct AggregationStats {
	pub registered_estimators: usize,
	pub per_estimate_timeout_ms: u64,
	pub global_timeout_ms: u64,
}
