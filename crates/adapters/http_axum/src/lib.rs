//! # poegate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **device REST API**:
//!   - `GET  /device`          — list all devices
//!   - `GET  /device/{id}`     — get a single device
//!   - `POST /device/{id}/on`  — power a device on
//!   - `POST /device/{id}/off` — power a device off
//! - Reject non-integer ids at the routing layer (axum `Path` extractor)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `poegate-app` (for the port trait and services) and
//! `poegate-domain` (for domain types used in response mapping). Never leaks
//! axum types into the domain, and never parses power tool output itself.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
