//! Interpretation estimator: hourly rates by language tier and mode

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, InterpreterMode, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

use crate::rates::{
	country_multiplier, country_of, interpretation_hourly_rate, is_us_location, language_tier,
	LanguageTier,
};

/// Engagements bill at least a half day
const HALF_DAY_HOURS: f64 = 4.0;

/// Flat surcharge when the interpreter must travel to the site
const TRAVEL_SURCHARGE: f64 = 250.0;

#[derive(Debug, Default)]
pub struct InterpretationEstimator;

impl InterpretationEstimator {
	pub fn new() -> Self {
		Self
	}

	/// The harder side of the pair drives the rate
	fn pair_tier(source: &str, target: &str) -> (LanguageTier, Confidence) {
		match (language_tier(source), language_tier(target)) {
			(Some(a), Some(b)) => (a.max(b), Confidence::High),
			(Some(tier), None) | (None, Some(tier)) => {
				(tier.max(LanguageTier::Tier3), Confidence::Medium)
			},
			(None, None) => (LanguageTier::Tier4, Confidence::Medium),
		}
	}
}

#[async_trait]
impl Estimator for InterpretationEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::Interpretation
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::Interpretation(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let (tier, confidence) = Self::pair_tier(&request.source_language, &request.target_language);
		let mode = request.interpreter_type.unwrap_or(InterpreterMode::Consecutive);

		let multiplier = if is_us_location(&request.location) {
			1.0
		} else {
			country_of(&request.location)
				.map(|country| country_multiplier(&country))
				.unwrap_or(1.0)
		};

		let hourly = interpretation_hourly_rate(tier, mode) * multiplier;
		let billed_hours = request.duration.max(HALF_DAY_HOURS);
		let base = hourly * billed_hours;

		let surcharge = if request.requires_travel == Some(true) {
			TRAVEL_SURCHARGE
		} else {
			0.0
		};

		let mut breakdown = CostBreakdown::new(base);
		if surcharge > 0.0 {
			breakdown = breakdown.with_surcharges(surcharge);
		}

		Ok(Estimate::new(self.kind(), base + surcharge)
			.with_confidence(confidence)
			.with_breakdown(breakdown)
			.with_notes(format!(
				"{:.1} billed hour(s) {:?} at ${:.2}/hr, {} to {}",
				billed_hours, mode, hourly, request.source_language, request.target_language
			)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::InterpretationRequest;

	fn interpretation(
		source: &str,
		target: &str,
		duration: f64,
		mode: Option<InterpreterMode>,
		requires_travel: Option<bool>,
	) -> EstimateRequest {
		EstimateRequest::Interpretation(InterpretationRequest {
			source_language: source.to_string(),
			target_language: target.to_string(),
			duration,
			interpreter_type: mode,
			location: "Washington, DC".to_string(),
			requires_travel,
		})
	}

	#[tokio::test]
	async fn test_harder_language_drives_the_rate() {
		let estimator = InterpretationEstimator::new();
		let easy_pair = estimator
			.estimate(&interpretation("English", "Spanish", 8.0, None, None))
			.await
			.unwrap();
		let hard_pair = estimator
			.estimate(&interpretation("English", "Japanese", 8.0, None, None))
			.await
			.unwrap();

		assert!(hard_pair.estimated_cost > easy_pair.estimated_cost);
	}

	#[tokio::test]
	async fn test_simultaneous_costs_more() {
		let estimator = InterpretationEstimator::new();
		let consecutive = estimator
			.estimate(&interpretation(
				"English",
				"Spanish",
				8.0,
				Some(InterpreterMode::Consecutive),
				None,
			))
			.await
			.unwrap();
		let simultaneous = estimator
			.estimate(&interpretation(
				"English",
				"Spanish",
				8.0,
				Some(InterpreterMode::Simultaneous),
				None,
			))
			.await
			.unwrap();

		assert!(simultaneous.estimated_cost > consecutive.estimated_cost);
	}

	#[tokio::test]
	async fn test_half_day_minimum() {
		let estimator = InterpretationEstimator::new();
		let one_hour = estimator
			.estimate(&interpretation("English", "Spanish", 1.0, None, None))
			.await
			.unwrap();
		let four_hours = estimator
			.estimate(&interpretation("English", "Spanish", 4.0, None, None))
			.await
			.unwrap();

		assert_eq!(one_hour.estimated_cost, four_hours.estimated_cost);
	}

	#[tokio::test]
	async fn test_travel_surcharge() {
		let estimator = InterpretationEstimator::new();
		let on_site = estimator
			.estimate(&interpretation("English", "Spanish", 8.0, None, Some(true)))
			.await
			.unwrap();
		let remote = estimator
			.estimate(&interpretation("English", "Spanish", 8.0, None, None))
			.await
			.unwrap();

		assert_eq!(on_site.estimated_cost, remote.estimated_cost + TRAVEL_SURCHARGE);
	}
}
