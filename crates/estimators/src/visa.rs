//! Visa estimator: consular fees by visa category

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, ServiceKind, Urgency, VisaType};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Document handling and courier fee
const SERVICE_FEE: f64 = 45.0;

/// Expedited-processing surcharge
const EXPEDITED_SURCHARGE: f64 = 220.0;

#[derive(Debug, Default)]
pub struct VisaEstimator;

impl VisaEstimator {
	pub fn new() -> Self {
		Self
	}

	fn consular_fee(visa_type: VisaType) -> f64 {
		match visa_type {
			VisaType::Tourist => 160.0,
			VisaType::Business => 185.0,
			VisaType::Transit => 90.0,
		}
	}
}

#[async_trait]
impl Estimator for VisaEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::VisaTravel
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::VisaTravel(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let base = Self::consular_fee(request.visa_type);
		let surcharge = if request.urgency == Some(Urgency::Expedited) {
			EXPEDITED_SURCHARGE
		} else {
			0.0
		};

		let mut breakdown = CostBreakdown::new(base).with_fees(SERVICE_FEE);
		if surcharge > 0.0 {
			breakdown = breakdown.with_surcharges(surcharge);
		}

		// Consular fees vary by applicant nationality and bilateral agreements
		Ok(Estimate::new(self.kind(), base + SERVICE_FEE + surcharge)
			.with_confidence(Confidence::Medium)
			.with_breakdown(breakdown)
			.with_notes(format!(
				"{:?} visa for {}{}",
				request.visa_type,
				request.country,
				if surcharge > 0.0 { ", expedited" } else { "" }
			)))
	}
}
