//! JSON fixtures for API and data-model tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// Minimal valid payload for every catalog variant, with the field a
/// missing-required-field test should strip to break it
pub fn minimal_variants() -> Vec<(Value, &'static str)> {
	vec![
		(
			json!({
				"type": "lodging",
				"location": "NYC",
				"checkInDate": "2024-01-01",
				"checkOutDate": "2024-01-03"
			}),
			"location",
		),
		(
			json!({
				"type": "per_diem",
				"location": "Denver, CO",
				"startDate": "2024-03-04",
				"endDate": "2024-03-06"
			}),
			"endDate",
		),
		(
			json!({
				"type": "flights",
				"origin": "JFK",
				"destination": "LHR",
				"departureDate": "2024-05-01",
				"passengerCount": 1
			}),
			"passengerCount",
		),
		(
			json!({
				"type": "ground_transport",
				"pickupLocation": "IAD",
				"dropoffLocation": "Downtown DC",
				"date": "2024-04-10",
				"passengerCount": 2
			}),
			"date",
		),
		(
			json!({
				"type": "transcription",
				"language": "Spanish",
				"duration": 60
			}),
			"duration",
		),
		(
			json!({
				"type": "interpretation",
				"sourceLanguage": "English",
				"targetLanguage": "Japanese",
				"duration": 8,
				"location": "Washington, DC"
			}),
			"location",
		),
		(
			json!({
				"type": "interpreter_rules",
				"interpreterCitizenship": "US",
				"conferenceMode": true
			}),
			"conferenceMode",
		),
		(
			json!({
				"type": "venue_package",
				"venueType": "conference_room",
				"attendeeCount": 20,
				"duration": 8,
				"requiresAV": true,
				"requiresHeadsets": false
			}),
			"venueType",
		),
		(
			json!({
				"type": "notary_services",
				"documentCount": 3,
				"serviceType": "jurat"
			}),
			"serviceType",
		),
		(
			json!({
				"type": "equipment_rental",
				"equipmentType": "projector",
				"quantity": 2,
				"rentalDuration": 3,
				"deliveryRequired": true
			}),
			"quantity",
		),
		(
			json!({
				"type": "visa_travel",
				"country": "Brazil",
				"visaType": "business"
			}),
			"visaType",
		),
	]
}

pub fn lodging_item() -> Value {
	json!({
		"type": "lodging",
		"location": "NYC",
		"checkInDate": "2024-01-01",
		"checkOutDate": "2024-01-03"
	})
}

pub fn visa_item() -> Value {
	json!({
		"type": "visa_travel",
		"country": "Brazil",
		"visaType": "business"
	})
}

pub fn single_lodging_invoice() -> Value {
	json!({ "estimates": [lodging_item()] })
}

pub fn mixed_invoice() -> Value {
	json!({
		"estimates": [lodging_item(), visa_item()],
		"clientInfo": {
			"name": "Dana Reyes",
			"organization": "Acme Events",
			"email": "dana@acme.test"
		},
		"projectInfo": {
			"name": "Q3 summit",
			"description": "Three-day leadership summit",
			"deadline": "2024-06-01"
		}
	})
}

pub fn empty_invoice() -> Value {
	json!({ "estimates": [] })
}

pub fn bogus_type_invoice() -> Value {
	json!({ "estimates": [{ "type": "bogus" }] })
}

pub fn semantically_invalid_invoice() -> Value {
	// Shape-valid but passengerCount fails semantic validation
	json!({
		"estimates": [{
			"type": "flights",
			"origin": "JFK",
			"destination": "LHR",
			"departureDate": "2024-05-01",
			"passengerCount": 0
		}]
	})
}
