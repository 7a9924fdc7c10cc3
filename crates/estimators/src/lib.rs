//! Tally Estimators
//!
//! Per-kind cost estimators for the tally estimate aggregator. Each estimator
//! prices one [`ServiceKind`] from local rate tables; the registry wires the
//! full catalog together for the dispatcher.
//!
//! [`ServiceKind`]: tally_types::requests::ServiceKind

pub mod equipment;
pub mod flights;
pub mod ground_transport;
pub mod interpretation;
pub mod interpreter_rules;
pub mod lodging;
pub mod notary;
pub mod per_diem;
pub mod rates;
pub mod registry;
pub mod transcription;
pub mod venue_package;
pub mod visa;

pub use equipment::EquipmentEstimator;
pub use flights::FlightEstimator;
pub use ground_transport::GroundTransportEstimator;
pub use interpretation::InterpretationEstimator;
pub use interpreter_rules::InterpreterRulesEstimator;
pub use lodging::LodgingEstimator;
pub use notary::NotaryEstimator;
pub use per_diem::PerDiemEstimator;
pub use registry::EstimatorRegistry;
pub use tally_types::{Estimator, EstimatorError, EstimatorResult};
pub use transcription::TranscriptionEstimator;
pub use venue_package::VenuePackageEstimator;
pub use visa::VisaEstimator;
