//! Tally Service
//!
//! Core logic for estimate dispatch and invoice assembly.

pub mod invoice;

pub use invoice::{AggregationStats, InvoiceService, LineItemFailure};
