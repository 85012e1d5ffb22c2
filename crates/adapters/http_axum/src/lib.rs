//! # bedmgmt-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: the bed listing, the add/edit bed form and the
//!   ward detail page
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTML responses
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - The add-bed modal is a CSS overlay opened by a link
//!   (`/beds?modal=add`) and closed by a link back to the listing.
//! - Forms POST back to the server and redirect on success (PRG pattern);
//!   a rejected submission re-renders the form with the message.
//! - Paging and page-size changes are plain links and GET forms.
//!
//! ## Dependency rule
//! Depends on `bedmgmt-app` (for port traits, services and view state) and
//! `bedmgmt-domain` (for domain types). Never leaks axum types into the
//! domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
