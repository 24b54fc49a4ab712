//! # Lattice Module
//!
//! Crystallographic geometry of a single unit cell: conversion of edge lengths and
//! angles into a Cartesian basis, closed-form cell volume, and the cutoff radius
//! derived from the cell's perpendicular widths.
//!
//! - [`cell`] - `UnitCell` validation, volume, and `LatticeVectors`
//! - [`cutoff`] - Half-minimum-width interaction cutoff

pub mod cell;
pub mod cutoff;

pub use cell::{GeometryError, LatticeVectors, UnitCell};
