//! # Environmental Dashboard Backend
//!
//! Backend for a city environment dashboard: it proxies a weather provider
//! and an air-quality provider, merges their responses into one reading per
//! city query, and exposes the result over a small REST API consumed by the
//! dashboard frontend.
//!
//! ## Features
//!
//! - **Aggregation**: one city query fans out into two concurrent upstream
//!   calls whose results are merged into an [`models::EnvironmentReading`]
//! - **Classification**: pure threshold-band mapping from raw pollutant
//!   readings to severity tiers, derived at presentation time
//! - **Health advice**: static AQI-keyed advisory lookup
//! - **View state**: an explicit, serializable dashboard state object with
//!   a cancellable auto-refresh task
//! - **HTTP API**: axum-based endpoints for the frontend
//!
//! ## Architecture
//!
//! - [`models`]: the unified reading shape and pollutant vocabulary
//! - [`clients`]: thin adapters over the two upstream providers
//! - [`services`]: aggregation, classification, advice, auto-refresh
//! - [`view`]: dashboard view-state and display derivations
//! - [`http`]: axum HTTP server and request handlers
//! - [`config`], [`error`]: startup configuration and the error taxonomy

pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod view;
