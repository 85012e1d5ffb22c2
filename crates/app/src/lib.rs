//! # bedmgmt-app
//!
//! Application layer — use-cases, view state and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the backend adapter must implement
//!   (driven/outbound port):
//!   - `BedBackend` — locations, beds and bed types held by the remote service
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BedTypeLoader` — de-duplicated bed types with loading/error flags
//!   - `BedService` — create, edit and look up beds
//!   - `WardBedService` — concurrent ward → beds aggregation with cancellation
//! - Define **view state** for each screen (loading, error, empty, table)
//!   so presentation adapters only map ready-made rows to markup
//!
//! ## Dependency rule
//! Depends on `bedmgmt-domain` only (plus `tokio`/`tokio-util` for
//! cancellation and `futures` for joining concurrent fetches).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
