//! Domain layer - Pure table logic
//!
//! This module contains pure functions and types without I/O dependencies.

pub mod feature;
pub mod provenance;
pub mod rna;
pub mod table;
