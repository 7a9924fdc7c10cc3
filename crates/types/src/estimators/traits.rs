//! Core estimator trait for per-kind implementations

use std::fmt::Debug;

use async_trait::async_trait;

use super::EstimatorResult;
use crate::estimates::Estimate;
use crate::requests::{EstimateRequest, ServiceKind};

/// Core trait for per-kind cost estimators
///
/// One implementation exists per [`ServiceKind`]; the dispatcher routes each
/// line-item to the estimator registered for its kind. The trait is async so
/// implementations backed by outbound pricing sources can slot in without
/// changing the dispatch shape.
#[async_trait]
pub trait Estimator: Send + Sync + Debug {
	/// The request kind this estimator prices
	fn kind(&self) -> ServiceKind;

	/// Produce an estimate for one line-item
	///
	/// Implementations should return [`EstimatorError::KindMismatch`] when
	/// handed a request of a different kind; the dispatcher treats that as a
	/// per-item failure, never a batch failure.
	///
	/// [`EstimatorError::KindMismatch`]: super::EstimatorError::KindMismatch
	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate>;
}
