//! Transcription estimator: per-audio-minute rates by language tier

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{AudioQuality, EstimateRequest, ServiceKind, TurnaroundTime};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

use crate::rates::{language_tier, LanguageTier};

/// Minimum charge per job
const MINIMUM_CHARGE: f64 = 25.0;

/// Clean source audio transcribes faster
const HIGH_QUALITY_DISCOUNT: f64 = 0.9;

/// Rush delivery premium applied as a surcharge
const RUSH_SURCHARGE_RATE: f64 = 0.5;

#[derive(Debug, Default)]
pub struct TranscriptionEstimator;

impl TranscriptionEstimator {
	pub fn new() -> Self {
		Self
	}

	fn per_minute_rate(tier: LanguageTier) -> f64 {
		match tier {
			LanguageTier::Tier1 => 1.5,
			LanguageTier::Tier2 => 2.0,
			LanguageTier::Tier3 => 2.5,
			LanguageTier::Tier4 => 3.25,
		}
	}
}

#[async_trait]
impl Estimator for TranscriptionEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::Transcription
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::Transcription(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		// Unrecognized languages price at the tier-3 rate with reduced confidence
		let (tier, confidence) = match language_tier(&request.language) {
			Some(tier) => (tier, Confidence::High),
			None => (LanguageTier::Tier3, Confidence::Medium),
		};

		let mut rate = Self::per_minute_rate(tier);
		if request.audio_quality == Some(AudioQuality::High) {
			rate *= HIGH_QUALITY_DISCOUNT;
		}

		let base = (rate * request.duration).max(MINIMUM_CHARGE);
		let surcharge = if request.turnaround_time == Some(TurnaroundTime::Rush) {
			base * RUSH_SURCHARGE_RATE
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
				"{:.0} audio minute(s), {} at ${:.2}/min",
				request.duration, request.language, rate
			)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::TranscriptionRequest;

	fn transcription(
		language: &str,
		duration: f64,
		turnaround_time: Option<TurnaroundTime>,
	) -> EstimateRequest {
		EstimateRequest::Transcription(TranscriptionRequest {
			language: language.to_string(),
			duration,
			audio_quality: None,
			turnaround_time,
		})
	}

	#[tokio::test]
	async fn test_tier1_rate() {
		let estimate = TranscriptionEstimator::new()
			.estimate(&transcription("Spanish", 60.0, None))
			.await
			.unwrap();

		assert_eq!(estimate.estimated_cost, 90.0);
		assert_eq!(estimate.confidence, Confidence::High);
	}

	#[tokio::test]
	async fn test_minimum_charge_applies() {
		let estimate = TranscriptionEstimator::new()
			.estimate(&transcription("Spanish", 5.0, None))
			.await
			.unwrap();

		assert_eq!(estimate.estimated_cost, MINIMUM_CHARGE);
	}

	#[tokio::test]
	async fn test_rush_surcharge() {
		let estimator = TranscriptionEstimator::new();
		let standard = estimator
			.estimate(&transcription("Spanish", 60.0, None))
			.await
			.unwrap();
		let rush = estimator
			.estimate(&transcription("Spanish", 60.0, Some(TurnaroundTime::Rush)))
			.await
			.unwrap();

		assert_eq!(rush.estimated_cost, standard.estimated_cost * 1.5);
	}

	#[tokio::test]
	async fn test_unknown_language_reduces_confidence() {
		let estimate = TranscriptionEstimator::new()
			.estimate(&transcription("Klingon", 60.0, None))
			.await
			.unwrap();

		assert_eq!(estimate.confidence, Confidence::Medium);
		assert!(estimate.estimated_cost > 0.0);
	}
}
