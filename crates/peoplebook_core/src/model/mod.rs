//! Domain model for the people directory.
//!
//! # Responsibility
//! - Define the person record shape shared by source, pipeline and page.
//!
//! # Invariants
//! - Records are immutable once loaded; views derive new collections.

pub mod person;
