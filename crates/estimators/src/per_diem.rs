//! Per-diem estimator: daily meals and incidentals by location policy

use async_trait::async_trait;
use tracing::warn;

use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, MealType, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

use crate::rates::{
	country_of, is_us_location, location_tier, LocationTier, MIE_DAILY_CAP, MIE_ETHIOPIA_FLAT,
	MIE_INTL_DEFAULT, MIE_US_STANDARD,
};

#[derive(Debug, Default)]
pub struct PerDiemEstimator;

impl PerDiemEstimator {
	pub fn new() -> Self {
		Self
	}

	/// Daily M&IE for a location per policy.
	///
	/// U.S. locations use the standard rate, capped at the premium-metro
	/// ceiling. Ethiopia is a flat rate covering meals and incidentals.
	/// Cameroon and the Philippines price in fixed local-currency tiers and
	/// cannot be quoted in USD without FX handling.
	fn daily_rate(location: &str) -> EstimatorResult<(f64, Confidence)> {
		if is_us_location(location) {
			let rate = match location_tier(location) {
				LocationTier::Premium => MIE_DAILY_CAP,
				_ => MIE_US_STANDARD,
			};
			return Ok((rate, Confidence::High));
		}

		match country_of(location).as_deref() {
			Some("ethiopia") => Ok((MIE_ETHIOPIA_FLAT, Confidence::High)),
			Some("cameroon") => {
				warn!("Per diem request for Cameroon requires FX handling; refusing to quote");
				Err(EstimatorError::Unpriceable {
					reason:
						"Cameroon per diem is a fixed 40,000 XAF/day; FX conversion is not supported"
							.to_string(),
				})
			},
			Some("philippines") => {
				warn!("Per diem request for the Philippines requires FX handling; refusing to quote");
				Err(EstimatorError::Unpriceable {
					reason:
						"Philippines per diem uses fixed PHP tiers; FX conversion is not supported"
							.to_string(),
				})
			},
			Some(_) => Ok((MIE_INTL_DEFAULT, Confidence::Medium)),
			None => Ok((MIE_INTL_DEFAULT, Confidence::Low)),
		}
	}

	fn meal_fraction(meal_type: Option<MealType>) -> f64 {
		match meal_type {
			Some(MealType::Breakfast) => 0.2,
			Some(MealType::Lunch) => 0.3,
			Some(MealType::Dinner) => 0.5,
			Some(MealType::FullDay) | None => 1.0,
		}
	}
}

#[async_trait]
impl Estimator for PerDiemEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::PerDiem
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::PerDiem(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let (daily_rate, confidence) = Self::daily_rate(&request.location)?;
		let fraction = Self::meal_fraction(request.meal_type);
		let days = request.day_count();
		let total = daily_rate * fraction * days as f64;

		Ok(Estimate::new(self.kind(), total)
			.with_confidence(confidence)
			.with_breakdown(CostBreakdown::new(total))
			.with_notes(format!(
				"{} day(s) at ${:.2}/day M&IE for {}",
				days,
				daily_rate * fraction,
				request.location
			)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::PerDiemRequest;

	fn per_diem(location: &str, meal_type: Option<MealType>) -> EstimateRequest {
		EstimateRequest::PerDiem(PerDiemRequest {
			location: location.to_string(),
			start_date: "2024-03-04".to_string(),
			end_date: "2024-03-06".to_string(),
			meal_type,
		})
	}

	#[tokio::test]
	async fn test_us_standard_rate() {
		let estimate = PerDiemEstimator::new()
			.estimate(&per_diem("Denver, CO", None))
			.await
			.unwrap();

		// 3 inclusive days at the standard US M&IE
		assert_eq!(estimate.estimated_cost, MIE_US_STANDARD * 3.0);
		assert_eq!(estimate.confidence, Confidence::High);
	}

	#[tokio::test]
	async fn test_premium_metro_hits_cap() {
		let estimate = PerDiemEstimator::new()
			.estimate(&per_diem("New York, NY", None))
			.await
			.unwrap();

		assert_eq!(estimate.estimated_cost, MIE_DAILY_CAP * 3.0);
	}

	#[tokio::test]
	async fn test_ethiopia_flat_rate() {
		let estimate = PerDiemEstimator::new()
			.estimate(&per_diem("Addis Ababa, Ethiopia", None))
			.await
			.unwrap();

		assert_eq!(estimate.estimated_cost, MIE_ETHIOPIA_FLAT * 3.0);
	}

	#[tokio::test]
	async fn test_unsupported_currency_tier_is_unpriceable() {
		let result = PerDiemEstimator::new()
			.estimate(&per_diem("Yaounde, Cameroon", None))
			.await;

		assert!(matches!(result, Err(EstimatorError::Unpriceable { .. })));
	}

	#[tokio::test]
	async fn test_meal_type_fraction() {
		let estimator = PerDiemEstimator::new();
		let full = estimator
			.estimate(&per_diem("Denver, CO", Some(MealType::FullDay)))
			.await
			.unwrap();
		let dinner = estimator
			.estimate(&per_diem("Denver, CO", Some(MealType::Dinner)))
			.await
			.unwrap();

		assert_eq!(dinner.estimated_cost, full.estimated_cost * 0.5);
	}
}
