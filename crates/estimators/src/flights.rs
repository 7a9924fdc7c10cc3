//! Flight estimator: per-passenger fares by cabin class

use async_trait::async_trait;
use chrono::Duration;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{CabinClass, EstimateRequest, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Carrier booking and segment fees per passenger
const CARRIER_FEES_PER_PASSENGER: f64 = 45.0;

/// Transportation excise tax applied to the fare subtotal
const TRANSPORT_TAX_RATE: f64 = 0.075;

/// Return legs price slightly under two one-way fares
const ROUND_TRIP_MULTIPLIER: f64 = 1.9;

/// Fare quotes go stale quickly; cap their validity window
const FARE_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Default)]
pub struct FlightEstimator;

impl FlightEstimator {
	pub fn new() -> Self {
		Self
	}

	fn one_way_fare(cabin_class: Option<CabinClass>) -> f64 {
		match cabin_class {
			Some(CabinClass::Economy) | None => 425.0,
			Some(CabinClass::Business) => 1850.0,
			Some(CabinClass::First) => 3200.0,
		}
	}
}

#[async_trait]
impl Estimator for FlightEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::Flights
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::Flights(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let mut fare = Self::one_way_fare(request.cabin_class);
		if request.is_round_trip() {
			fare *= ROUND_TRIP_MULTIPLIER;
		}

		let passengers = request.passenger_count as f64;
		let fare_subtotal = fare * passengers;
		let fees = CARRIER_FEES_PER_PASSENGER * passengers;
		let taxes = fare_subtotal * TRANSPORT_TAX_RATE;

		Ok(Estimate::new(self.kind(), fare_subtotal + fees + taxes)
			.with_confidence(Confidence::Low)
			.with_breakdown(
				CostBreakdown::new(fare_subtotal)
					.with_fees(fees)
					.with_taxes(taxes),
			)
			.with_notes(format!(
				"{} {} passenger(s), {} to {}; fares move daily, quoted from base fare tables",
				request.passenger_count,
				if request.is_round_trip() {
					"round-trip"
				} else {
					"one-way"
				},
				request.origin,
				request.destination
			))
			.with_validity(Duration::days(FARE_VALIDITY_DAYS)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tally_types::requests::FlightRequest;

	fn flights(
		passenger_count: u32,
		cabin_class: Option<CabinClass>,
		return_date: Option<&str>,
	) -> EstimateRequest {
		EstimateRequest::Flights(FlightRequest {
			origin: "JFK".to_string(),
			destination: "LHR".to_string(),
			departure_date: "2024-05-01".to_string(),
			return_date: return_date.map(str::to_string),
			passenger_count,
			cabin_class,
		})
	}

	#[tokio::test]
	async fn test_economy_one_way() {
		let estimate = FlightEstimator::new()
			.estimate(&flights(2, None, None))
			.await
			.unwrap();

		// 2 economy fares plus per-passenger fees and 7.5% tax
		assert_eq!(estimate.estimated_cost, 1003.75);
		assert_eq!(estimate.confidence, Confidence::Low);
		assert!(estimate.valid_until.is_some());
	}

	#[tokio::test]
	async fn test_round_trip_costs_less_than_two_one_ways() {
		let estimator = FlightEstimator::new();
		let one_way = estimator
			.estimate(&flights(1, None, None))
			.await
			.unwrap();
		let round_trip = estimator
			.estimate(&flights(1, None, Some("2024-05-09")))
			.await
			.unwrap();

		assert!(round_trip.estimated_cost > one_way.estimated_cost);
		assert!(round_trip.estimated_cost < one_way.estimated_cost * 2.0);
	}

	#[tokio::test]
	async fn test_cabin_class_ordering() {
		let estimator = FlightEstimator::new();
		let economy = estimator
			.estimate(&flights(1, Some(CabinClass::Economy), None))
			.await
			.unwrap();
		let business = estimator
			.estimate(&flights(1, Some(CabinClass::Business), None))
			.await
			.unwrap();
		let first = estimator
			.estimate(&flights(1, Some(CabinClass::First), None))
			.await
			.unwrap();

		assert!(economy.estimated_cost < business.estimated_cost);
		assert!(business.estimated_cost < first.estimated_cost);
	}
}
