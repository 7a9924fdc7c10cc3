//! Error types for request validation

use thiserror::Error;

/// Validation errors for estimate and invoice requests
#[derive(Error, Debug)]
pub enum ValidationError {
	#[error("Missing or empty field: {field}")]
	EmptyField { field: String },

	#[error("Invalid count: {field} - {reason}")]
	InvalidCount { field: String, reason: String },

	#[error("Invalid duration: {field} - {reason}")]
	InvalidDuration { field: String, reason: String },

	#[error("Invalid date range: {start} must be before {end}")]
	InvalidDateRange { start: String, end: String },

	#[error("Too many line items: {count} (maximum: {max})")]
	TooManyLineItems { count: usize, max: usize },
}

/// Result type for request validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
