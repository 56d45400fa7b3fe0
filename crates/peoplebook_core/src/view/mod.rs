//! URL-encoded view state.
//!
//! # Responsibility
//! - Own the codec between address-bar locations and typed view state.
//! - Derive follow-up locations for filter and sort actions.
//!
//! # Invariants
//! - The location is the only shared view state; nothing here caches it.

pub mod location;
pub mod params;
pub mod state;
pub mod transition;
