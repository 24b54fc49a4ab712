//! # Force Field Module
//!
//! Lennard-Jones parameters and the pieces that turn them into pair energies.
//!
//! - [`params`] - Per-species parameters and exact-match force field tables
//! - [`parameterization`] - Resolution of a host structure's species against a table
//! - [`mixing`] - Lorentz-Berthelot host × probe parameter matrices
//! - [`potentials`] - The 12-6 Lennard-Jones pair potential

pub mod mixing;
pub mod parameterization;
pub mod params;
pub(crate) mod potentials;
