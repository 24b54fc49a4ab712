//! # Engine Module
//!
//! The periodic packing and energy-grid machinery built on top of [`crate::core`].
//!
//! ## Overview
//!
//! An energy map is produced in three steps. The unit cell is replicated into a
//! supercell wide enough to cover the interaction cutoff ([`packing`]). A regular grid
//! is then laid over the original cell ([`energy_grid`]). Finally every grid point
//! accumulates the Lennard-Jones energy of every periodic atom image within the
//! cutoff, once per probe species.
//!
//! - **Supercell Packing** ([`packing`]) - Packing factors, replica translations, centering
//! - **Grid Scanning** ([`energy_grid`]) - Grid construction and the per-point energy sum
//! - **Results** ([`energy_map`]) - `EnergyMap` and `EnergyGridPoint`
//! - **Configuration** ([`config`]) - Grid spacing, cutoff policy, probe species
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - `EngineError` composing all lower-level failures
//!
//! Grid points are independent of one another. With the `parallel` feature (enabled
//! by default) the scan is spread over the rayon thread pool.

pub mod config;
pub mod energy_grid;
pub mod energy_map;
pub mod error;
pub mod packing;
pub mod progress;
