//! Per-kind request payloads and their option enumerations
//!
//! Field sets mirror the wire contract: camelCase JSON with a closed set of
//! refinement enums per variant. Semantic validation (counts, durations, date
//! ordering) lives here; shape validation happens at deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{ValidationError, ValidationResult};

/// Lodging room categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
	Standard,
	Suite,
}

/// Per-diem meal coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MealType {
	Breakfast,
	Lunch,
	Dinner,
	FullDay,
}

/// Flight cabin classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
	Economy,
	Business,
	First,
}

/// Ground transport vehicle classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
	Sedan,
	Suv,
	Van,
	Bus,
}

/// Source audio quality for transcription jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
	Standard,
	High,
}

/// Delivery turnaround for transcription jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TurnaroundTime {
	Standard,
	Rush,
}

/// Interpretation delivery modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum InterpreterMode {
	Consecutive,
	Simultaneous,
}

/// Security clearance levels for interpreter vetting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SecurityClearance {
	None,
	Secret,
	TopSecret,
}

/// Venue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
	ConferenceRoom,
	Auditorium,
	Outdoor,
}

/// Notarial acts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum NotaryServiceType {
	Acknowledgment,
	Jurat,
	CopyCertification,
}

/// Rentable equipment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
	Microphone,
	Camera,
	Projector,
	Laptop,
	Other,
}

/// Visa categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VisaType {
	Tourist,
	Business,
	Transit,
}

/// Processing urgency for visa applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
	Standard,
	Expedited,
}

/// Hotel stay for a date range at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LodgingRequest {
	pub location: String,
	pub check_in_date: String,
	pub check_out_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub room_type: Option<RoomType>,
}

impl LodgingRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.location, "location")?;
		require_nonempty(&self.check_in_date, "checkInDate")?;
		require_nonempty(&self.check_out_date, "checkOutDate")?;
		require_ordered_dates(&self.check_in_date, &self.check_out_date)
	}
}

/// Daily meals and incidentals for a stay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PerDiemRequest {
	pub location: String,
	pub start_date: String,
	pub end_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meal_type: Option<MealType>,
}

impl PerDiemRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.location, "location")?;
		require_nonempty(&self.start_date, "startDate")?;
		require_nonempty(&self.end_date, "endDate")?;
		require_ordered_dates(&self.start_date, &self.end_date)
	}

	/// Number of covered days, inclusive of both endpoints.
	/// Falls back to 1 when the dates do not parse.
	pub fn day_count(&self) -> i64 {
		match (parse_date(&self.start_date), parse_date(&self.end_date)) {
			(Some(start), Some(end)) => (end - start).num_days() + 1,
			_ => 1,
		}
	}
}

/// One-way or round-trip air travel for a passenger group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
	pub origin: String,
	pub destination: String,
	pub departure_date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub return_date: Option<String>,
	pub passenger_count: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cabin_class: Option<CabinClass>,
}

impl FlightRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.origin, "origin")?;
		require_nonempty(&self.destination, "destination")?;
		require_nonempty(&self.departure_date, "departureDate")?;
		require_positive_count(self.passenger_count, "passengerCount")?;
		if let Some(return_date) = &self.return_date {
			require_ordered_dates(&self.departure_date, return_date)?;
		}
		Ok(())
	}

	pub fn is_round_trip(&self) -> bool {
		self.return_date.is_some()
	}
}

/// Point-to-point ground transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GroundTransportRequest {
	pub pickup_location: String,
	pub dropoff_location: String,
	pub date: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vehicle_type: Option<VehicleType>,
	pub passenger_count: u32,
}

impl GroundTransportRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.pickup_location, "pickupLocation")?;
		require_nonempty(&self.dropoff_location, "dropoffLocation")?;
		require_nonempty(&self.date, "date")?;
		require_positive_count(self.passenger_count, "passengerCount")
	}
}

/// Audio transcription priced by recorded minutes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionRequest {
	pub language: String,
	/// Recorded audio length in minutes
	pub duration: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub audio_quality: Option<AudioQuality>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub turnaround_time: Option<TurnaroundTime>,
}

impl TranscriptionRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.language, "language")?;
		require_positive_duration(self.duration, "duration")
	}
}

/// On-site or remote interpretation priced by the hour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InterpretationRequest {
	pub source_language: String,
	pub target_language: String,
	/// Engagement length in hours
	pub duration: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub interpreter_type: Option<InterpreterMode>,
	pub location: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub requires_travel: Option<bool>,
}

impl InterpretationRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.source_language, "sourceLanguage")?;
		require_nonempty(&self.target_language, "targetLanguage")?;
		require_nonempty(&self.location, "location")?;
		require_positive_duration(self.duration, "duration")
	}
}

/// Interpreter compliance vetting (citizenship, clearance, conference staffing)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InterpreterRulesRequest {
	pub interpreter_citizenship: String,
	pub conference_mode: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub security_clearance: Option<SecurityClearance>,
}

impl InterpreterRulesRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.interpreter_citizenship, "interpreterCitizenship")
	}
}

/// Venue rental with headcount-driven services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VenuePackageRequest {
	pub venue_type: VenueType,
	pub attendee_count: u32,
	/// Event length in hours
	pub duration: f64,
	#[serde(rename = "requiresAV")]
	pub requires_av: bool,
	pub requires_headsets: bool,
}

impl VenuePackageRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_positive_count(self.attendee_count, "attendeeCount")?;
		require_positive_duration(self.duration, "duration")
	}
}

/// Notarial acts over a document batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NotaryServicesRequest {
	pub document_count: u32,
	pub service_type: NotaryServiceType,
	/// Mobile service address; absent means walk-in
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
}

impl NotaryServicesRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_positive_count(self.document_count, "documentCount")
	}
}

/// Equipment rental priced per unit-day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRentalRequest {
	pub equipment_type: EquipmentType,
	pub quantity: u32,
	/// Rental length in days
	pub rental_duration: f64,
	pub delivery_required: bool,
}

impl EquipmentRentalRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_positive_count(self.quantity, "quantity")?;
		require_positive_duration(self.rental_duration, "rentalDuration")
	}
}

/// Visa application processing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VisaTravelRequest {
	pub country: String,
	pub visa_type: VisaType,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub urgency: Option<Urgency>,
}

impl VisaTravelRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_nonempty(&self.country, "country")
	}
}

fn require_nonempty(value: &str, field: &str) -> ValidationResult<()> {
	if value.trim().is_empty() {
		return Err(ValidationError::EmptyField {
			field: field.to_string(),
		});
	}
	Ok(())
}

fn require_positive_count(value: u32, field: &str) -> ValidationResult<()> {
	if value == 0 {
		return Err(ValidationError::InvalidCount {
			field: field.to_string(),
			reason: "must be at least 1".to_string(),
		});
	}
	Ok(())
}

fn require_positive_duration(value: f64, field: &str) -> ValidationResult<()> {
	if !value.is_finite() || value <= 0.0 {
		return Err(ValidationError::InvalidDuration {
			field: field.to_string(),
			reason: "must be a positive number".to_string(),
		});
	}
	Ok(())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
	NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Enforce ordering only when both endpoints parse as ISO dates; callers may
/// send non-ISO strings and boundary validation stays lenient about format.
fn require_ordered_dates(start: &str, end: &str) -> ValidationResult<()> {
	if let (Some(parsed_start), Some(parsed_end)) = (parse_date(start), parse_date(end)) {
		if parsed_start >= parsed_end {
			return Err(ValidationError::InvalidDateRange {
				start: start.to_string(),
				end: end.to_string(),
			});
		}
	}
	Ok(())
}
