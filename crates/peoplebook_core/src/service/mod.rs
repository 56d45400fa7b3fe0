//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate source, session and page composition for callers.
//! - Keep UI/FFI layers decoupled from pipeline details.

pub mod people_page;
