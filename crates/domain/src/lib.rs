//! # bedmgmt-domain
//!
//! Pure domain model for the bed administration screens.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Locations** (physical places; some are tagged as wards)
//! - Define **Bed types** and their client-side de-duplication
//! - Define **Beds**, the create/edit **payload**, and beds joined to their ward
//! - **Aggregation** of wards and their beds into one flat listing
//! - **Pagination** of any list into fixed-size pages
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod aggregation;
pub mod bed;
pub mod bed_type;
pub mod location;
pub mod pagination;

mod nullable;
