//! Lodging estimator: nightly rate by location tier

use async_trait::async_trait;
use chrono::NaiveDate;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, RoomType, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

use crate::rates::{location_tier, LocationTier};

/// Occupancy tax applied to the room subtotal
const OCCUPANCY_TAX_RATE: f64 = 0.15;

const SUITE_MULTIPLIER: f64 = 1.75;

#[derive(Debug, Default)]
pub struct LodgingEstimator;

impl LodgingEstimator {
	pub fn new() -> Self {
		Self
	}

	fn nightly_rate(tier: LocationTier) -> f64 {
		match tier {
			LocationTier::Premium => 289.0,
			LocationTier::Standard => 179.0,
			LocationTier::Budget => 109.0,
		}
	}
}

#[async_trait]
impl Estimator for LodgingEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::Lodging
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::Lodging(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let nights = night_count(&request.check_in_date, &request.check_out_date);
		let tier = location_tier(&request.location);

		let mut nightly = Self::nightly_rate(tier);
		if request.room_type == Some(RoomType::Suite) {
			nightly *= SUITE_MULTIPLIER;
		}

		let room_subtotal = nightly * nights as f64;
		let taxes = room_subtotal * OCCUPANCY_TAX_RATE;

		let confidence = match tier {
			LocationTier::Premium => Confidence::High,
			_ => Confidence::Medium,
		};

		Ok(Estimate::new(self.kind(), room_subtotal + taxes)
			.with_confidence(confidence)
			.with_breakdown(CostBreakdown::new(room_subtotal).with_taxes(taxes))
			.with_notes(format!(
				"{} night(s) in {} at ${:.2}/night",
				nights, request.location, nightly
			)))
	}
}

/// Nights between two ISO dates; 1 when the dates do not parse
fn night_count(check_in: &str, check_out: &str) -> i64 {
	let parse = |value: &str| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
	match (parse(check_in), parse(check_out)) {
		(Some(start), Some(end)) => (end - start).num_days().max(1),
		_ => 1,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::LodgingRequest;

	fn lodging(location: &str, room_type: Option<RoomType>) -> EstimateRequest {
		EstimateRequest::Lodging(LodgingRequest {
			location: location.to_string(),
			check_in_date: "2024-01-01".to_string(),
			check_out_date: "2024-01-03".to_string(),
			room_type,
		})
	}

	#[tokio::test]
	async fn test_two_night_stay() {
		let estimate = LodgingEstimator::new()
			.estimate(&lodging("Des Moines, IA", None))
			.await
			.unwrap();

		// 2 nights at the standard rate plus 15% occupancy tax
		assert_eq!(estimate.estimated_cost, 411.7);
		assert_eq!(estimate.kind, ServiceKind::Lodging);
	}

	#[tokio::test]
	async fn test_suite_costs_more_than_standard() {
		let estimator = LodgingEstimator::new();
		let standard = estimator
			.estimate(&lodging("NYC", Some(RoomType::Standard)))
			.await
			.unwrap();
		let suite = estimator
			.estimate(&lodging("NYC", Some(RoomType::Suite)))
			.await
			.unwrap();

		assert!(suite.estimated_cost > standard.estimated_cost);
	}

	#[tokio::test]
	async fn test_kind_mismatch_is_rejected() {
		let request = EstimateRequest::VisaTravel(tally_types::requests::VisaTravelRequest {
			country: "France".to_string(),
			visa_type: tally_types::requests::VisaType::Tourist,
			urgency: None,
		});

		let result = LodgingEstimator::new().estimate(&request).await;
		assert!(matches!(result, Err(EstimatorError::KindMismatch { .. })));
	}
}
