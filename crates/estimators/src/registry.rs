//! Estimator registry keyed by service kind

use std::collections::HashMap;
use std::sync::Arc;

use tally_types::requests::ServiceKind;
use tally_types::Estimator;

use crate::{
	EquipmentEstimator, FlightEstimator, GroundTransportEstimator, InterpretationEstimator,
	InterpreterRulesEstimator, LodgingEstimator, NotaryEstimator, PerDiemEstimator,
	TranscriptionEstimator, VenuePackageEstimator, VisaEstimator,
};

/// Registry of per-kind estimators
///
/// Registration replaces any existing estimator for the same kind, which is
/// how tests and embedders swap in custom implementations.
#[derive(Debug, Default)]
pub struct EstimatorRegistry {
	estimators: HashMap<ServiceKind, Arc<dyn Estimator>>,
}

impl EstimatorRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self {
			estimators: HashMap::new(),
		}
	}

	/// Create a registry covering the full service catalog
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register(Arc::new(LodgingEstimator::new()));
		registry.register(Arc::new(PerDiemEstimator::new()));
		registry.register(Arc::new(FlightEstimator::new()));
		registry.register(Arc::new(GroundTransportEstimator::new()));
		registry.register(Arc::new(TranscriptionEstimator::new()));
		registry.register(Arc::new(InterpretationEstimator::new()));
		registry.register(Arc::new(InterpreterRulesEstimator::new()));
		registry.register(Arc::new(VenuePackageEstimator::new()));
		registry.register(Arc::new(NotaryEstimator::new()));
		registry.register(Arc::new(EquipmentEstimator::new()));
		registry.register(Arc::new(VisaEstimator::new()));
		registry
	}

	/// Register an estimator under its own kind
	pub fn register(&mut self, estimator: Arc<dyn Estimator>) {
		self.estimators.insert(estimator.kind(), estimator);
	}

	/// Look up the estimator for a kind
	pub fn get(&self, kind: ServiceKind) -> Option<Arc<dyn Estimator>> {
		self.estimators.get(&kind).map(Arc::clone)
	}

	/// Kinds from the catalog with no registered estimator
	pub fn missing_kinds(&self) -> Vec<ServiceKind> {
		ServiceKind::ALL
			.into_iter()
			.filter(|kind| !self.estimators.contains_key(kind))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.estimators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.estimators.is_empty()
	}
}
