//! Ground transport estimator: transfer rates by vehicle class

use async_trait::async_trait;
use tracing::warn;

use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, ServiceKind, VehicleType};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Flat dispatch and booking fee per transfer
const BOOKING_FEE: f64 = 10.0;

#[derive(Debug, Default)]
pub struct GroundTransportEstimator;

impl GroundTransportEstimator {
	pub fn new() -> Self {
		Self
	}

	fn transfer_rate(vehicle: VehicleType) -> f64 {
		match vehicle {
			VehicleType::Sedan => 95.0,
			VehicleType::Suv => 135.0,
			VehicleType::Van => 185.0,
			VehicleType::Bus => 450.0,
		}
	}

	fn capacity(vehicle: VehicleType) -> u32 {
		match vehicle {
			VehicleType::Sedan => 3,
			VehicleType::Suv => 6,
			VehicleType::Van => 12,
			VehicleType::Bus => 50,
		}
	}

	/// Smallest vehicle class that seats the group
	fn vehicle_for(passenger_count: u32) -> VehicleType {
		match passenger_count {
			0..=3 => VehicleType::Sedan,
			4..=6 => VehicleType::Suv,
			7..=12 => VehicleType::Van,
			_ => VehicleType::Bus,
		}
	}
}

#[async_trait]
impl Estimator for GroundTransportEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::GroundTransport
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::GroundTransport(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let vehicle = match request.vehicle_type {
			Some(vehicle) => {
				if request.passenger_count > Self::capacity(vehicle) {
					warn!(
						"Requested {:?} cannot seat {} passenger(s)",
						vehicle, request.passenger_count
					);
					return Err(EstimatorError::Unpriceable {
						reason: format!(
							"{} passenger(s) exceed the capacity of a {:?}",
							request.passenger_count, vehicle
						),
					});
				}
				vehicle
			},
			None => Self::vehicle_for(request.passenger_count),
		};

		let base = Self::transfer_rate(vehicle);

		Ok(Estimate::new(self.kind(), base + BOOKING_FEE)
			.with_confidence(Confidence::High)
			.with_breakdown(CostBreakdown::new(base).with_fees(BOOKING_FEE))
			.with_notes(format!(
				"{:?} transfer, {} to {}",
				vehicle, request.pickup_location, request.dropoff_location
			)))
	}
}
