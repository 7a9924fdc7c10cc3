//! Core Estimate domain model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::requests::ServiceKind;

pub mod response;

pub use response::EstimateResponse;

/// Confidence grade attached to a produced estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
	High,
	Medium,
	Low,
}

/// Cost components of an estimate; each component is non-negative USD
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
	pub base_rate: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub taxes: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub surcharges: Option<f64>,
}

impl CostBreakdown {
	pub fn new(base_rate: f64) -> Self {
		Self {
			base_rate,
			fees: None,
			taxes: None,
			surcharges: None,
		}
	}

	pub fn with_fees(mut self, fees: f64) -> Self {
		self.fees = Some(fees);
		self
	}

	pub fn with_taxes(mut self, taxes: f64) -> Self {
		self.taxes = Some(taxes);
		self
	}

	pub fn with_surcharges(mut self, surcharges: f64) -> Self {
		self.surcharges = Some(surcharges);
		self
	}

	/// Sum of all present components
	pub fn total(&self) -> f64 {
		self.base_rate
			+ self.fees.unwrap_or(0.0)
			+ self.taxes.unwrap_or(0.0)
			+ self.surcharges.unwrap_or(0.0)
	}
}

/// Core Estimate domain model
///
/// Produced one-to-one from a successfully estimated line-item; immutable
/// after construction. Converted to [`EstimateResponse`] at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
	/// Kind of the originating request line-item
	pub kind: ServiceKind,

	/// Estimated total cost in USD, non-negative
	pub estimated_cost: f64,

	/// How well the pricing tables covered the request
	pub confidence: Confidence,

	/// Optional cost components summing to the estimated cost
	pub breakdown: Option<CostBreakdown>,

	/// Free-text pricing notes for the caller
	pub notes: Option<String>,

	/// When the estimate was produced
	pub created_at: DateTime<Utc>,

	/// When the quoted price should no longer be relied on
	pub valid_until: Option<DateTime<Utc>>,
}

impl Estimate {
	/// Create an estimate with the given cost, rounded to cents
	pub fn new(kind: ServiceKind, estimated_cost: f64) -> Self {
		Self {
			kind,
			estimated_cost: round_cents(estimated_cost.max(0.0)),
			confidence: Confidence::Medium,
			breakdown: None,
			notes: None,
			created_at: Utc::now(),
			valid_until: None,
		}
	}

	pub fn with_confidence(mut self, confidence: Confidence) -> Self {
		self.confidence = confidence;
		self
	}

	pub fn with_breakdown(mut self, breakdown: CostBreakdown) -> Self {
		self.breakdown = Some(breakdown);
		self
	}

	pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
		self.notes = Some(notes.into());
		self
	}

	pub fn with_validity(mut self, duration: Duration) -> Self {
		self.valid_until = Some(self.created_at + duration);
		self
	}
}

/// Round a USD amount to whole cents
pub fn round_cents(amount: f64) -> f64 {
	(amount * 100.0).round() / 100.0
}
