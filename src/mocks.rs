//! Mock estimators for tests and embedding experiments

use async_trait::async_trait;
use tally_types::estimates::{Confidence, Estimate};
use tally_types::requests::{EstimateRequest, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Estimator that always succeeds with a fixed cost
#[derive(Debug, Clone)]
pub struct MockEstimator {
	kind: ServiceKind,
	cost: f64,
}

impl MockEstimator {
	pub fn new(kind: ServiceKind, cost: f64) -> Self {
		Self { kind, cost }
	}
}

#[async_trait]
impl Estimator for MockEstimator {
	fn kind(&self) -> ServiceKind {
		self.kind
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		if request.kind() != self.kind {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind,
				got: request.kind(),
			});
		}

		Ok(Estimate::new(self.kind, self.cost).with_confidence(Confidence::High))
	}
}

/// Estimator that always fails with a fixed reason
#[derive(Debug, Clone)]
pub struct FailingEstimator {
	kind: ServiceKind,
	reason: String,
}

impl FailingEstimator {
	pub fn new(kind: ServiceKind, reason: impl Into<String>) -> Self {
		Self {
			kind,
			reason: reason.into(),
		}
	}
}

#[async_trait]
impl Estimator for FailingEstimator {
	fn kind(&self) -> ServiceKind {
		self.kind
	}

	async fn estimate(&self, _request: &EstimateRequest) -> EstimatorResult<Estimate> {
		Err(EstimatorError::Unpriceable {
			reason: self.reason.clone(),
		})
	}
}

/// Estimator that sleeps before answering; for timeout and interleaving tests
#[derive(Debug, Clone)]
pub struct DelayedEstimator {
	kind: ServiceKind,
	cost: f64,
	delay_ms: u64,
}

impl DelayedEstimator {
	pub fn new(kind: ServiceKind, cost: f64, delay_ms: u64) -> Self {
		Self {
			kind,
			cost,
			delay_ms,
		}
	}
}

#[async_trait]
impl Estimator for DelayedEstimator {
	fn kind(&self) -> ServiceKind {
		self.kind
	}

	async fn estimate(&self, _request: &EstimateRequest) -> EstimatorResult<Estimate> {
		tokio::time::sleep(tokio::time::Duration::from_millis(self.delay_ms)).await;
		Ok(Estimate::new(self.kind, self.cost).with_confidence(Confidence::High))
	}
}
