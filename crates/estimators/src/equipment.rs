//! Equipment rental estimator: per-unit daily rates

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EquipmentType, EstimateRequest, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Flat delivery and pickup fee
const DELIVERY_FEE: f64 = 60.0;

#[derive(Debug, Default)]
pub struct EquipmentEstimator;

impl EquipmentEstimator {
	pub fn new() -> Self {
		Self
	}

	fn daily_rate(equipment_type: EquipmentType) -> f64 {
		match equipment_type {
			EquipmentType::Microphone => 25.0,
			EquipmentType::Camera => 85.0,
			EquipmentType::Projector => 60.0,
			EquipmentType::Laptop => 45.0,
			EquipmentType::Other => 35.0,
		}
	}
}

#[async_trait]
impl Estimator for EquipmentEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::EquipmentRental
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::EquipmentRental(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let base = Self::daily_rate(request.equipment_type)
			* request.quantity as f64
			* request.rental_duration;
		let fees = if request.delivery_required {
			DELIVERY_FEE
		} else {
			0.0
		};

		// "Other" gear prices off a placeholder rate
		let confidence = match request.equipment_type {
			EquipmentType::Other => Confidence::Low,
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
				"{} x {:?} for {:.1} day(s)",
				request.quantity, request.equipment_type, request.rental_duration
			)))
	}
}
