//! # IPMOF Core Library
//!
//! Periodic supercell packing and Lennard-Jones energy maps for metal-organic framework
//! unit cells, used to find the regions of a host framework that a probe species can
//! occupy (for example when screening interpenetrated frameworks).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable value types: unit cells and lattice
//!   vectors, host structures, force field tables, Lorentz-Berthelot mixing and the
//!   12-6 Lennard-Jones potential.
//!
//! - **[`engine`]: The Computation.** Supercell packing, grid construction and the
//!   brute-force energy scan, with configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** [`workflows::energy_map::run`] turns a host
//!   structure, a force field and a configuration into a finished energy map.
//!
//! Structure-file parsing, force field spreadsheets, plotting and export formats are
//! left to the caller. Inputs arrive as values and results leave as values.

pub mod core;
pub mod engine;
pub mod workflows;
