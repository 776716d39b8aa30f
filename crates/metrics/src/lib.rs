//! Metrics and monitoring for the CoW intent solver
//!
//! This crate provides metrics collection and monitoring capabilities for
//! tracking intent fetches, pair matching, settlements, and solver cycles.
//!
//! # Features
//!
//! - Prometheus metrics exposition
//! - HTTP endpoint for metrics scraping
//! - Tracing integration that counts error events
//!
//! # Example
//!
//! ```no_run
//! use cow_intents_metrics::{MetricsCollector, MetricsServer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Create metrics collector
//!     let collector = Arc::new(MetricsCollector::new());
//!
//!     // Record some metrics
//!     collector.record_intents_fetched(4);
//!
//!     // Start metrics HTTP server
//!     let server = MetricsServer::new(collector.clone(), "0.0.0.0:9090".to_string());
//!     server.serve().await.unwrap();
//! }
//! ```

pub mod collector;
pub mod http;
pub mod metrics;
pub mod tracing;

pub use collector::{MetricsCollector, MetricsError};
pub use http::{metrics_router, MetricsServer, MetricsServerError};
pub use tracing::{init_tracing_with_metrics, MetricsLayer, TracingError};
