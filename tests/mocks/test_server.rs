//! Test server for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use tally::mocks::FailingEstimator;
use tally::{create_router, AggregatorBuilder, ServiceKind};
use tokio::task::JoinHandle;

/// Test server instance bound to an ephemeral local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with the default estimator catalog
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = AggregatorBuilder::default().start().await?;
		let app: Router = create_router().with_state(state);

		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server where one kind's estimator always fails
	#[allow(dead_code)]
	pub async fn spawn_with_failing_estimator(
		kind: ServiceKind,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = AggregatorBuilder::default()
			.with_estimator(Arc::new(FailingEstimator::new(
				kind,
				"pricing source unavailable",
			)))
			.start()
			.await?;
		let app: Router = create_router().with_state(state);

		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("test server failed");
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}
