//! # Core Module
//!
//! Stateless value types and pure functions shared by the energy map engine.
//!
//! - **Crystallography** ([`lattice`]) - Unit cells, lattice vectors, volumes, cutoffs
//! - **Host Representation** ([`models`]) - Atom sites and host framework structures
//! - **Interaction Parameters** ([`forcefield`]) - Force field tables, mixing rules, potentials
//!
//! Everything in this layer is immutable once constructed. Validation happens at
//! construction time, so downstream code can rely on positive volumes and
//! non-negative Lennard-Jones parameters.

pub mod forcefield;
pub mod lattice;
pub mod models;
