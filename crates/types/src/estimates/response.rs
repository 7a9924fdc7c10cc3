//! API response model for a single estimate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Confidence, CostBreakdown, Estimate};
use crate::requests::ServiceKind;

/// Wire representation of one produced estimate
///
/// Echoes the originating line-item's `type` tag so callers can correlate
/// results with their request without relying on positional order alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
	#[serde(rename = "type")]
	pub kind: ServiceKind,
	pub estimated_cost: f64,
	pub confidence: Confidence,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub breakdown: Option<CostBreakdown>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub valid_until: Option<DateTime<Utc>>,
}

impl From<Estimate> for EstimateResponse {
	fn from(estimate: Estimate) -> Self {
		Self {
			kind: estimate.kind,
			estimated_cost: estimate.estimated_cost,
			confidence: estimate.confidence,
			breakdown: estimate.breakdown,
			notes: estimate.notes,
			valid_until: estimate.valid_until,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_response_echoes_type_tag() {
		let estimate = Estimate::new(ServiceKind::NotaryServices, 45.0);
		let response = EstimateResponse::from(estimate);

		let json = serde_json::to_value(&response).unwrap();
		assert_eq!(json["type"], "notary_services");
		assert_eq!(json["estimatedCost"], 45.0);
		assert_eq!(json["confidence"], "medium");
		assert!(json.get("breakdown").is_none());
	}
}
