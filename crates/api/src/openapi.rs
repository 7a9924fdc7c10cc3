use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::{estimates, health};
use tally_types::estimates::EstimateResponse;
use tally_types::invoices::{InvoiceRequest, InvoiceResponse};
use tally_types::requests::EstimateRequest;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, estimates::post_estimate),
    components(schemas(
        EstimateRequest,
        EstimateResponse,
        InvoiceRequest,
        InvoiceResponse,
        ErrorResponse
    )),
    tags(
        (name = "estimates", description = "Cost estimate endpoints"),
        (name = "health", description = "Health endpoints")
    )
)]
pub struct ApiDoc;
