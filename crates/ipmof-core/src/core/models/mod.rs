//! # Models Module
//!
//! Value types describing the host framework as handed over by a structure reader:
//! the unit cell and an ordered list of atom sites.

pub mod atom;
pub mod structure;

pub use atom::AtomSite;
pub use structure::HostStructure;
