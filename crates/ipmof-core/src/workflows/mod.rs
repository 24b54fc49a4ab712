//! # Workflows Module
//!
//! Top-level entry points that tie [`crate::core`] and [`crate::engine`] together.
//!
//! - **Energy Map Workflow** ([`energy_map`]) - From a host structure and a force field
//!   to a complete `EnergyMap`, including parameter resolution, cutoff selection,
//!   supercell packing and the grid scan.

pub mod energy_map;
