//! Interpreter compliance estimator: vetting and staffing fees

use async_trait::async_trait;
use tally_types::estimates::{Confidence, CostBreakdown, Estimate};
use tally_types::requests::{EstimateRequest, SecurityClearance, ServiceKind};
use tally_types::{Estimator, EstimatorError, EstimatorResult};

/// Baseline vetting and paperwork fee
const BASE_VETTING_FEE: f64 = 150.0;

/// Conference engagements require a second interpreter on rotation
const CONFERENCE_TEAM_FEE: f64 = 300.0;

/// Additional background processing for non-U.S. citizens
const FOREIGN_CITIZEN_FEE: f64 = 200.0;

#[derive(Debug, Default)]
pub struct InterpreterRulesEstimator;

impl InterpreterRulesEstimator {
	pub fn new() -> Self {
		Self
	}

	fn clearance_surcharge(clearance: Option<SecurityClearance>) -> f64 {
		match clearance {
			Some(SecurityClearance::Secret) => 500.0,
			Some(SecurityClearance::TopSecret) => 1500.0,
			Some(SecurityClearance::None) | None => 0.0,
		}
	}

	fn is_us_citizen(citizenship: &str) -> bool {
		matches!(
			citizenship.trim().to_lowercase().as_str(),
			"us" | "usa" | "united states" | "american"
		)
	}
}

#[async_trait]
impl Estimator for InterpreterRulesEstimator {
	fn kind(&self) -> ServiceKind {
		ServiceKind::InterpreterRules
	}

	async fn estimate(&self, request: &EstimateRequest) -> EstimatorResult<Estimate> {
		let EstimateRequest::InterpreterRules(request) = request else {
			return Err(EstimatorError::KindMismatch {
				expected: self.kind(),
				got: request.kind(),
			});
		};

		let mut fees = 0.0;
		let mut notes = vec!["baseline vetting".to_string()];

		if request.conference_mode {
			fees += CONFERENCE_TEAM_FEE;
			notes.push("conference team minimum (second interpreter)".to_string());
		}
		if !Self::is_us_citizen(&request.interpreter_citizenship) {
			fees += FOREIGN_CITIZEN_FEE;
			notes.push(format!(
				"extended vetting for {} citizenship",
				request.interpreter_citizenship
			));
		}

		let surcharge = Self::clearance_surcharge(request.security_clearance);
		if surcharge > 0.0 {
			notes.push("security clearance verification".to_string());
		}

		let mut breakdown = CostBreakdown::new(BASE_VETTING_FEE);
		if fees > 0.0 {
			breakdown = breakdown.with_fees(fees);
		}
		if surcharge > 0.0 {
			breakdown = breakdown.with_surcharges(surcharge);
		}

		Ok(Estimate::new(self.kind(), BASE_VETTING_FEE + fees + surcharge)
			.with_confidence(Confidence::High)
			.with_breakdown(breakdown)
			.with_notes(notes.join("; ")))
	}
}
