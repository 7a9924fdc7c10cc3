//! Request line-item catalog and validation

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod variants;

pub use errors::{ValidationError, ValidationResult};
pub use variants::{
	AudioQuality, CabinClass, EquipmentRentalRequest, EquipmentType, FlightRequest,
	GroundTransportRequest, InterpretationRequest, InterpreterMode, InterpreterRulesRequest,
	LodgingRequest, MealType, NotaryServiceType, NotaryServicesRequest, PerDiemRequest, RoomType,
	SecurityClearance, TranscriptionRequest, TurnaroundTime, Urgency, VehicleType,
	VenuePackageRequest, VenueType, VisaTravelRequest, VisaType,
};

/// The closed catalog of estimable service kinds.
///
/// Doubles as the wire discriminant (`type`) on requests and responses and as
/// the registry key for estimators. Adding a variant here forces every
/// exhaustive match in the workspace to account for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
	Lodging,
	PerDiem,
	Flights,
	GroundTransport,
	Transcription,
	Interpretation,
	InterpreterRules,
	VenuePackage,
	NotaryServices,
	EquipmentRental,
	VisaTravel,
}

impl ServiceKind {
	/// Every recognized kind, in catalog order
	pub const ALL: [ServiceKind; 11] = [
		ServiceKind::Lodging,
		ServiceKind::PerDiem,
		ServiceKind::Flights,
		ServiceKind::GroundTransport,
		ServiceKind::Transcription,
		ServiceKind::Interpretation,
		ServiceKind::InterpreterRules,
		ServiceKind::VenuePackage,
		ServiceKind::NotaryServices,
		ServiceKind::EquipmentRental,
		ServiceKind::VisaTravel,
	];

	/// Wire-format tag for this kind
	pub fn as_str(&self) -> &'static str {
		match self {
			ServiceKind::Lodging => "lodging",
			ServiceKind::PerDiem => "per_diem",
			ServiceKind::Flights => "flights",
			ServiceKind::GroundTransport => "ground_transport",
			ServiceKind::Transcription => "transcription",
			ServiceKind::Interpretation => "interpretation",
			ServiceKind::InterpreterRules => "interpreter_rules",
			ServiceKind::VenuePackage => "venue_package",
			ServiceKind::NotaryServices => "notary_services",
			ServiceKind::EquipmentRental => "equipment_rental",
			ServiceKind::VisaTravel => "visa_travel",
		}
	}
}

impl fmt::Display for ServiceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One line-item of an invoice request, discriminated by `type`
///
/// The union is closed: an unrecognized tag or a payload missing a required
/// field fails deserialization at the API boundary, so estimators only ever
/// see well-formed variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EstimateRequest {
	Lodging(LodgingRequest),
	PerDiem(PerDiemRequest),
	Flights(FlightRequest),
	GroundTransport(GroundTransportRequest),
	Transcription(TranscriptionRequest),
	Interpretation(InterpretationRequest),
	InterpreterRules(InterpreterRulesRequest),
	VenuePackage(VenuePackageRequest),
	NotaryServices(NotaryServicesRequest),
	EquipmentRental(EquipmentRentalRequest),
	VisaTravel(VisaTravelRequest),
}

impl EstimateRequest {
	/// The service kind this line-item belongs to
	pub fn kind(&self) -> ServiceKind {
		match self {
			EstimateRequest::Lodging(_) => ServiceKind::Lodging,
			EstimateRequest::PerDiem(_) => ServiceKind::PerDiem,
			EstimateRequest::Flights(_) => ServiceKind::Flights,
			EstimateRequest::GroundTransport(_) => ServiceKind::GroundTransport,
			EstimateRequest::Transcription(_) => ServiceKind::Transcription,
			EstimateRequest::Interpretation(_) => ServiceKind::Interpretation,
			EstimateRequest::InterpreterRules(_) => ServiceKind::InterpreterRules,
			EstimateRequest::VenuePackage(_) => ServiceKind::VenuePackage,
			EstimateRequest::NotaryServices(_) => ServiceKind::NotaryServices,
			EstimateRequest::EquipmentRental(_) => ServiceKind::EquipmentRental,
			EstimateRequest::VisaTravel(_) => ServiceKind::VisaTravel,
		}
	}

	/// Semantic validation beyond JSON shape
	pub fn validate(&self) -> ValidationResult<()> {
		match self {
			EstimateRequest::Lodging(request) => request.validate(),
			EstimateRequest::PerDiem(request) => request.validate(),
			EstimateRequest::Flights(request) => request.validate(),
			EstimateRequest::GroundTransport(request) => request.validate(),
			EstimateRequest::Transcription(request) => request.validate(),
			EstimateRequest::Interpretation(request) => request.validate(),
			EstimateRequest::InterpreterRules(request) => request.validate(),
			EstimateRequest::VenuePackage(request) => request.validate(),
			EstimateRequest::NotaryServices(request) => request.validate(),
			EstimateRequest::EquipmentRental(request) => request.validate(),
			EstimateRequest::VisaTravel(request) => request.validate(),
		}
	}
}
