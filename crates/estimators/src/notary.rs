//! Notary services estimator: per-document fees by notarial act

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, NotaryServiceType, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Mobile service travel fee when an address is supplied
const MOBILE_TRAVEL_FEE: f64 = 75.0;

#[derive(Debug, Default)]
pub struct NotaryEstimator;

impl NotaryEstimator {
	pub fn new() -> Self {
		Self
	}

	fn per_document_fee(service_type: NotaryServiceType) -> f64 {
		match service_type {
			NotaryServiceType::Acknowledgment => 15.0,
			NotaryServiceType::Jurat => 20.0,
			NotaryServiceType::CopyCertification => 12.0,
		}
	}
}

#[async_trait]
impl Estimator for NotaryEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::NotaryServices
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::NotaryServices(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let base = Self::per_document_fee(request.service_type) * request.document_count as f64;
		let fees = if request.location.is_some() {
			MOBILE_TRAVEL_FEE
		} else {
			0.0
		};

		let mut breakdown = CostBreakdown::new(base);
		if fees > 0.0 {
			breakdown = breakdown.with_fees(fees);
		}

		Ok(Estimate::new(self.kind(), base + fees)
			.with_confidence(Confidence::High)
			.with_breakdown(breakdown)
			.with_notes(format!(
				"{} document(s), {:?}{}",
				request.document_count,
				request.service_type,
				if request.location.is_some() {
					", mobile service"
				} else {
					""
				}
			)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::NotaryServicesRequest;

	fn notary(
		document_count: u32,
		service_type: NotaryServiceType,
		location: Option<&str>,
	) -> EstimateRequest {
		EstimateRequest::NotaryServices(NotaryServicesRequest {
			document_count,
			service_type,
			location: location.map(str::to_string),
		})
	}

	#[tokio::test]
	async fn test_walk_in_jurat() {
		let estimate = NotaryEstimator::new()
			.estimate(&notary(3, NotaryServiceType::Jurat, None))
			.await
			.unwrap();

		assert_eq!(estimate.estimated_cost, 60.0);
	}

	#[tokio::test]
	async fn test_mobile_service_adds_travel_fee() {
		let estimator = NotaryEstimator::new();
		let walk_in = estimator
			.estimate(&notary(1, NotaryServiceType::Acknowledgment, None))
			.await
			.unwrap();
		let mobile = estimator
			.estimate(&notary(
				1,
				NotaryServiceType::Acknowledgment,
				Some("Arlington, VA"),
			))
			.await
			.unwrap();

		assert_eq!(
			mobile.estimated_cost,
			walk_in.estimated_cost + MOBILE_TRAVEL_FEE
		);
	}
}
