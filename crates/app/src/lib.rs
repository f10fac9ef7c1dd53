//! # poegate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** that adapters must implement:
//!   - `PowerController` — list, query and toggle PoE ports
//! - Define the **driving/inbound** use-cases:
//!   - `DeviceService` — list devices, get one device, power on, power off
//! - Turn "no such device" answers from the port into typed errors
//!
//! ## Dependency rule
//! Depends on `poegate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
