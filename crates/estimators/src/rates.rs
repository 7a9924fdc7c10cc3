//! Shared pricing tables
//!
//! Location and language classification used across estimators. Rates are
//! freelancer-market USD figures; language bands and country multipliers
//! follow the four-tier industry classification.

use tally_types::requests::InterpreterMode;

/// Cost-of-living classification for a stay or event location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTier {
	/// Major metro with premium hospitality pricing
	Premium,
	Standard,
	Budget,
}

const PREMIUM_METROS: &[&str] = &[
	"new york",
	"nyc",
	"san francisco",
	"washington",
	"boston",
	"london",
	"paris",
	"tokyo",
	"geneva",
	"zurich",
	"singapore",
	"hong kong",
	"dubai",
];

const BUDGET_MARKERS: &[&str] = &[
	"addis ababa",
	"ethiopia",
	"kathmandu",
	"nepal",
	"managua",
	"nicaragua",
	"phnom penh",
	"cambodia",
];

/// Classify a free-text location string
pub fn location_tier(location: &str) -> LocationTier {
	let normalized = location.to_lowercase();
	if PREMIUM_METROS.iter().any(|metro| normalized.contains(metro)) {
		return LocationTier::Premium;
	}
	if BUDGET_MARKERS.iter().any(|marker| normalized.contains(marker)) {
		return LocationTier::Budget;
	}
	LocationTier::Standard
}

const US_STATE_CODES: &[&str] = &[
	"AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
	"KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
	"NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
	"VA", "WA", "WV", "WI", "WY", "DC",
];

/// Whether a location string denotes a U.S. place
///
/// Recognizes an explicit country suffix or a trailing two-letter state code
/// ("Denver, CO"); bare city names are not assumed domestic.
pub fn is_us_location(location: &str) -> bool {
	let last_segment = location
		.rsplit(',')
		.next()
		.map(str::trim)
		.unwrap_or_default();

	let normalized = last_segment.to_lowercase();
	if matches!(normalized.as_str(), "us" | "usa" | "united states") {
		return true;
	}

	US_STATE_CODES
		.iter()
		.any(|code| last_segment.eq_ignore_ascii_case(code))
}

/// Country name extracted from a "City, Country" style string, lowercased
pub fn country_of(location: &str) -> Option<String> {
	let last_segment = location.rsplit(',').next().map(str::trim)?;
	if last_segment.is_empty() || last_segment == location.trim() {
		return None;
	}
	Some(last_segment.to_lowercase())
}

/// Daily M&IE cap applied to U.S. per-diem lookups, USD
pub const MIE_DAILY_CAP: f64 = 80.0;

/// Standard U.S. daily M&IE outside premium metros, USD
pub const MIE_US_STANDARD: f64 = 68.0;

/// Flat daily rate for Ethiopia covering meals and incidentals, USD
pub const MIE_ETHIOPIA_FLAT: f64 = 25.0;

/// General international daily M&IE default, USD
pub const MIE_INTL_DEFAULT: f64 = 80.0;

/// Four-tier language demand classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LanguageTier {
	Tier1,
	Tier2,
	Tier3,
	Tier4,
}

const TIER1_LANGUAGES: &[&str] = &["english", "spanish", "french", "portuguese", "italian", "german"];

const TIER2_LANGUAGES: &[&str] = &[
	"dutch", "polish", "russian", "turkish", "swedish", "ukrainian", "romanian", "czech",
	"slovak", "hungarian", "danish", "norwegian", "finnish", "greek", "serbian", "croatian",
	"bulgarian", "slovenian", "albanian", "lithuanian", "latvian", "estonian",
];

const TIER3_LANGUAGES: &[&str] = &[
	"chinese", "mandarin", "cantonese", "japanese", "korean", "arabic", "hindi", "hebrew",
	"persian", "farsi", "thai", "malay", "indonesian", "georgian", "armenian",
];

/// Classify a language by market demand; None when unrecognized
///
/// Unlisted languages are rare/regional (tier 4) in the source tables, but an
/// unrecognized name may equally be a typo, so callers decide the fallback.
pub fn language_tier(language: &str) -> Option<LanguageTier> {
	let normalized = language.trim().to_lowercase();
	if TIER1_LANGUAGES.contains(&normalized.as_str()) {
		return Some(LanguageTier::Tier1);
	}
	if TIER2_LANGUAGES.contains(&normalized.as_str()) {
		return Some(LanguageTier::Tier2);
	}
	if TIER3_LANGUAGES.contains(&normalized.as_str()) {
		return Some(LanguageTier::Tier3);
	}
	None
}

/// Hourly interpretation rate for a tier and delivery mode, USD
///
/// Midpoints of the freelancer min/max bands per tier.
pub fn interpretation_hourly_rate(tier: LanguageTier, mode: InterpreterMode) -> f64 {
	match (tier, mode) {
		(LanguageTier::Tier1, InterpreterMode::Consecutive) => 85.0,
		(LanguageTier::Tier1, InterpreterMode::Simultaneous) => 110.0,
		(LanguageTier::Tier2, InterpreterMode::Consecutive) => 110.0,
		(LanguageTier::Tier2, InterpreterMode::Simultaneous) => 135.0,
		(LanguageTier::Tier3, InterpreterMode::Consecutive) => 135.0,
		(LanguageTier::Tier3, InterpreterMode::Simultaneous) => 165.0,
		(LanguageTier::Tier4, InterpreterMode::Consecutive) => 155.0,
		(LanguageTier::Tier4, InterpreterMode::Simultaneous) => 190.0,
	}
}

/// Country rate multiplier relative to the U.S. baseline
pub fn country_multiplier(country: &str) -> f64 {
	match country.trim().to_lowercase().as_str() {
		"us" | "usa" | "united states" => 1.0,
		"switzerland" => 1.1,
		"japan" => 0.9,
		"sweden" => 0.9,
		"canada" => 0.85,
		"australia" => 0.85,
		"germany" | "france" | "netherlands" | "south korea" => 0.8,
		"uk" | "united kingdom" | "spain" | "italy" | "poland" => 0.7,
		"brazil" | "russia" | "mexico" | "turkey" => 0.65,
		"argentina" => 0.55,
		"china" => 0.6,
		"india" => 0.45,
		_ => 0.8,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_location_tiers() {
		assert_eq!(location_tier("New York, NY"), LocationTier::Premium);
		assert_eq!(location_tier("Des Moines, IA"), LocationTier::Standard);
		assert_eq!(location_tier("Addis Ababa, Ethiopia"), LocationTier::Budget);
	}

	#[test]
	fn test_us_location_detection() {
		assert!(is_us_location("Denver, CO"));
		assert!(is_us_location("Chicago, USA"));
		assert!(!is_us_location("Lyon, France"));
		assert!(!is_us_location("Geneva"));
	}

	#[test]
	fn test_country_extraction() {
		assert_eq!(country_of("Lyon, France").as_deref(), Some("france"));
		assert_eq!(country_of("Geneva"), None);
	}

	#[test]
	fn test_language_tiers() {
		assert_eq!(language_tier("Spanish"), Some(LanguageTier::Tier1));
		assert_eq!(language_tier("polish"), Some(LanguageTier::Tier2));
		assert_eq!(language_tier("Japanese"), Some(LanguageTier::Tier3));
		assert_eq!(language_tier("Klingon"), None);
	}

	#[test]
	fn test_simultaneous_rates_exceed_consecutive() {
		for tier in [
			LanguageTier::Tier1,
			LanguageTier::Tier2,
			LanguageTier::Tier3,
			LanguageTier::Tier4,
		] {
			assert!(
				interpretation_hourly_rate(tier, InterpreterMode::Simultaneous)
					> interpretation_hourly_rate(tier, InterpreterMode::Consecutive)
			);
		}
	}
}
