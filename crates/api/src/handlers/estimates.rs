use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use tally_types::invoices::{InvoiceRequest, InvoiceResponse};

/// Produce a cost-estimate invoice for a batch of line-items
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/estimate",
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Invoice estimated successfully", body = InvoiceResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "Request body does not match the schema")
    ),
    tag = "estimates"
))]
pub async fn post_estimate(
	State(state): State<AppState>,
	Json(request): Json<InvoiceRequest>,
) -> Result<Json<InvoiceResponse>, (StatusCode, Json<ErrorResponse>)> {
	info!(
		"Received invoice request with {} line item(s)",
		request.estimates.len()
	);

	// Shape is already guaranteed by deserialization; this is semantic validation
	if let Err(e) = request.validate() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse {
				error: "VALIDATION_ERROR".to_string(),
				message: format!("Invalid request: {}", e),
				timestamp: chrono::Utc::now().timestamp(),
			}),
		));
	}

	let response = state.invoice_service.aggregate(&request).await;

	info!(
		"Returning invoice {} with {} estimate(s), total ${:.2} ({} warning(s))",
		response.estimate_id,
		response.estimates.len(),
		response.total_estimate,
		response.warnings.len()
	);

	Ok(Json(response))
}
