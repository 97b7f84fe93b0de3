//! Common utilities for the Tether workspace.
//!
//! This crate provides shared infrastructure used by all components:
//! - **Warning System** - deduplicated warnings for values that had to fall back

pub mod warning;
