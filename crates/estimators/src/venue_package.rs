//! Venue package estimator: hourly venue rates plus headcount services

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, ServiceKind, VenueType};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Water, supplies and room service per attendee
const PER_ATTENDEE_SERVICE: f64 = 18.0;

/// Projector, sound system and screen bundle
const AV_PACKAGE_FEE: f64 = 350.0;

/// Interpretation headset rental per attendee
const HEADSET_PER_ATTENDEE: f64 = 12.0;

/// Setup and cleanup for larger spaces
const SETUP_FEE: f64 = 150.0;

#[derive(Debug, Default)]
pub struct VenuePackageEstimator;

impl VenuePackageEstimator {
	pub fn new() -> Self {
		Self
	}

	fn hourly_rate(venue_type: VenueType) -> f64 {
		match venue_type {
			VenueType::ConferenceRoom => 120.0,
			VenueType::Auditorium => 400.0,
			VenueType::Outdoor => 250.0,
		}
	}
}

#[async_trait]
impl Estimator for VenuePackageEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::VenuePackage
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::VenuePackage(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let attendees = request.attendee_count as f64;
		let rental = Self::hourly_rate(request.venue_type) * request.duration;
		let services = PER_ATTENDEE_SERVICE * attendees;
		let base = rental + services;

		let mut fees = 0.0;
		if request.requires_av {
			fees += AV_PACKAGE_FEE;
		}
		if request.requires_headsets {
			fees += HEADSET_PER_ATTENDEE * attendees;
		}
		if request.venue_type != VenueType::ConferenceRoom {
			fees += SETUP_FEE;
		}

		// Outdoor events carry weather and permit variability
		let confidence = match request.venue_type {
			VenueType::Outdoor => Confidence::Medium,
			_ => Confidence::High,
		};

		let mut breakdown = CostBreakdown::new(base);
		if fees > 0.0 {
			breakdown = breakdown.with_fees(fees);
		}

		Ok(Estimate::new(self.kind(), base + fees)
			.with_confidence(confidence)
			.with_breakdown(breakdown)
			.with_notes(format!(
				"{:?} for {} attendee(s), {:.1} hour(s)",
				request.venue_type, request.attendee_count, request.duration
			)))
	}
}
