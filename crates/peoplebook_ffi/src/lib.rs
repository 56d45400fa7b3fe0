//! Flutter bridge for the Peoplebook core.

pub mod api;
