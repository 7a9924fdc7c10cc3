//! Error types for estimator operations

use thiserror::Error;

use crate::requests::ServiceKind;

/// Errors an estimator can raise for a single line-item
#[derive(Error, Debug)]
pub enum EstimatorError {
	#[error("Estimator for {expected} received a {got} request")]
	KindMismatch {
		expected: ServiceKind,
		got: ServiceKind,
	},

	#[error("No estimator registered for {kind}")]
	NotRegistered { kind: ServiceKind },

	#[error("Cannot price request: {reason}")]
	Unpriceable { reason: String },

	#[error("Estimation timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },
}

/// Result type for estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;
