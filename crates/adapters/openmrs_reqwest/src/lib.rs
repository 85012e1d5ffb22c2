//! # bedmgmt-adapter-openmrs
//!
//! REST adapter for an OpenMRS bed-management backend, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `BedBackend` port trait defined in `bedmgmt-app::ports`
//! - Map port calls onto `/ws/rest/v1` endpoints (`/location`, `/bed`,
//!   `/bedtype`) and unwrap `{ "results": [...] }` envelopes
//! - Attach optional basic-auth credentials to every request
//! - Map transport failures and non-2xx answers into domain errors
//!
//! ## Dependency rule
//! Depends on `bedmgmt-app` (for the port trait) and `bedmgmt-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::OpenmrsClient;
pub use config::OpenmrsConfig;
pub use error::OpenmrsError;
