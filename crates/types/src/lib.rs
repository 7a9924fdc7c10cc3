//! Tally Types
//!
//! Shared models and traits for the tally estimate aggregator.
//! This crate contains all domain models organized by business entity.

pub mod constants;
pub mod estimates;
pub mod estimators;
pub mod invoices;
pub mod requests;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use requests::{
	AudioQuality, CabinClass, EquipmentRentalRequest, EquipmentType, EstimateRequest, FlightRequest,
	GroundTransportRequest, InterpretationRequest, InterpreterMode, InterpreterRulesRequest,
	LodgingRequest, MealType, NotaryServiceType, NotaryServicesRequest, PerDiemRequest, RoomType,
	SecurityClearance, ServiceKind, TranscriptionRequest, TurnaroundTime, Urgency,
	ValidationError, ValidationResult, VehicleType, VenuePackageRequest, VenueType,
	VisaTravelRequest, VisaType,
};

pub use estimates::{Confidence, CostBreakdown, Estimate, EstimateResponse};

pub use invoices::{ClientInfo, InvoiceRequest, InvoiceResponse, ProjectInfo};

pub use estimators::{Estimator, EstimatorError, EstimatorResult};
