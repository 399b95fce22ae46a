//! HTTP surface for the answer validation engine.
//!
//! Stateless: every request carries the reference answer it is checked
//! against, so the service holds nothing but its validator configuration.

pub mod answer;
pub mod config;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod phonetic;
pub mod router;
pub mod state;
pub mod tracing;
pub mod v1;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
