//! Invoice request and response envelopes

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::constants::limits::MAX_LINE_ITEMS;
use crate::estimates::{round_cents, Estimate, EstimateResponse};
use crate::requests::{EstimateRequest, ValidationError, ValidationResult};

/// Requesting party metadata; pass-through display data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
	pub name: String,
	pub organization: String,
	pub email: String,
}

/// Project metadata; pass-through display data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
	pub name: String,
	pub description: String,
	pub deadline: String,
}

/// API request body for the /estimate endpoint
///
/// `estimates` is the caller's ordered line-item sequence; each element is
/// estimated independently. The metadata blocks have no effect on estimation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
	pub estimates: Vec<EstimateRequest>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_info: Option<ClientInfo>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub project_info: Option<ProjectInfo>,
}

impl InvoiceRequest {
	/// Validate batch size and every line-item
	///
	/// An empty `estimates` sequence is valid and yields an empty invoice.
	pub fn validate(&self) -> ValidationResult<()> {
		if self.estimates.len() > MAX_LINE_ITEMS {
			return Err(ValidationError::TooManyLineItems {
				count: self.estimates.len(),
				max: MAX_LINE_ITEMS,
			});
		}

		for line_item in &self.estimates {
			line_item.validate()?;
		}

		Ok(())
	}
}

/// API response body for the /estimate endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
	/// Sum of all produced estimate costs, in USD
	pub total_estimate: f64,
	/// Produced estimates, in request line-item order; shorter than the
	/// request whenever a line-item failed
	pub estimates: Vec<EstimateResponse>,
	/// Human-readable warnings, one per failed line-item
	pub warnings: Vec<String>,
	/// Whether a human must approve this invoice before use
	pub requires_manual_review: bool,
	/// Unique identifier for this invoice
	pub estimate_id: String,
	pub created_at: DateTime<Utc>,
	pub valid_until: DateTime<Utc>,
}

impl InvoiceResponse {
	/// Assemble the response envelope from produced estimates
	///
	/// Stamps a fresh id and the validity window; the manual-review decision
	/// is the caller's (policy lives in the service layer).
	pub fn from_estimates(
		estimates: Vec<Estimate>,
		warnings: Vec<String>,
		requires_manual_review: bool,
		validity: Duration,
	) -> Self {
		let now = Utc::now();
		let total_estimate = round_cents(estimates.iter().map(|e| e.estimated_cost).sum());

		Self {
			total_estimate,
			estimates: estimates.into_iter().map(EstimateResponse::from).collect(),
			warnings,
			requires_manual_review,
			estimate_id: Uuid::new_v4().to_string(),
			created_at: now,
			valid_until: now + validity,
		}
	}
}
