//! # poegate-domain
//!
//! Pure domain model for the poegate power-over-ethernet gateway.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifier, error conventions
//! - Define **Devices** (one addressable PoE port and the host behind it)
//! - Define **Power states** (the target of an on/off request)
//! - Enforce the record invariants (e.g. hostnames carry no trailing whitespace)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod power;
