//! # remotehub-domain
//!
//! Pure domain model for the remotehub device showcase.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **device kinds** (television, radio) and **power actions** (on, off)
//! - Define **announcements**, the status line a device emits, and the
//!   phrase tables used to render them in each supported [`Language`](announcement::Language)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Capabilities that perform IO are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod announcement;
pub mod device;
