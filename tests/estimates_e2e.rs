//! E2E tests for the /estimate endpoint

mod mocks;

use mocks::{fixtures, TestServer};
use reqwest::Client;
use tally::ServiceKind;

#[tokio::test]
async fn test_estimate_single_lodging() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::single_lodging_invoice())
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["estimates"].as_array().unwrap().len(), 1);
	assert_eq!(body["estimates"][0]["type"], "lodging");
	assert!(body["estimates"][0]["estimatedCost"].as_f64().unwrap() > 0.0);
	assert_eq!(body["totalEstimate"], body["estimates"][0]["estimatedCost"]);
	assert_eq!(body["warnings"].as_array().unwrap().len(), 0);
	assert_eq!(body["requiresManualReview"], false);
	assert!(!body["estimateId"].as_str().unwrap().is_empty());
	assert!(body["createdAt"].as_str().unwrap() < body["validUntil"].as_str().unwrap());

	server.abort();
}

#[tokio::test]
async fn test_estimate_empty_batch() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::empty_invoice())
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["totalEstimate"], 0.0);
	assert_eq!(body["estimates"].as_array().unwrap().len(), 0);
	assert_eq!(body["requiresManualReview"], false);

	server.abort();
}

#[tokio::test]
async fn test_estimate_mixed_variants_preserve_order() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::mixed_invoice())
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	let estimates = body["estimates"].as_array().unwrap();
	assert_eq!(estimates.len(), 2);
	assert_eq!(estimates[0]["type"], "lodging");
	assert_eq!(estimates[1]["type"], "visa_travel");

	let sum: f64 = estimates
		.iter()
		.map(|e| e["estimatedCost"].as_f64().unwrap())
		.sum();
	assert!((body["totalEstimate"].as_f64().unwrap() - sum).abs() < 0.01);

	server.abort();
}

#[tokio::test]
async fn test_estimate_unknown_type_is_rejected() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::bogus_type_invoice())
		.send()
		.await
		.unwrap();

	// Shape validation failure: rejected before the handler runs
	assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

	server.abort();
}

#[tokio::test]
async fn test_estimate_malformed_json() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.body("{ invalid json")
		.header("content-type", "application/json")
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}

#[tokio::test]
async fn test_estimate_semantic_validation_returns_400() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::semantically_invalid_invoice())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "VALIDATION_ERROR");

	server.abort();
}

#[tokio::test]
async fn test_estimate_wrong_http_method() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/estimate", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

	server.abort();
}

#[tokio::test]
async fn test_estimate_failing_line_item_surfaces_warning() {
	let server = TestServer::spawn_with_failing_estimator(ServiceKind::VisaTravel)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/estimate", server.base_url))
		.json(&fixtures::mixed_invoice())
		.send()
		.await
		.unwrap();

	// Partial failure never fails the batch
	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	let estimates = body["estimates"].as_array().unwrap();
	assert_eq!(estimates.len(), 1);
	assert_eq!(estimates[0]["type"], "lodging");

	let warnings = body["warnings"].as_array().unwrap();
	assert_eq!(warnings.len(), 1);
	assert!(warnings[0].as_str().unwrap().contains("visa_travel"));
	assert_eq!(body["requiresManualReview"], true);

	server.abort();
}

#[tokio::test]
async fn test_health() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	assert_eq!(resp.text().await.unwrap(), "OK");

	server.abort();
}
