use std::sync::Arc;

use tally_service::InvoiceService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub invoice_service: Arc<InvoiceService>,
}
