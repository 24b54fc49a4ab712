use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A single atom of the host framework.
///
/// The species label is expected to be already normalized to an element symbol
/// (e.g. `"Zn"`, `"C"`), which is the key used for force field lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSite {
    /// Element symbol identifying the force field entry for this atom.
    pub species: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl AtomSite {
    pub fn new(species: &str, position: Point3<f64>) -> Self {
        Self {
            species: species.to_string(),
            position,
        }
    }
}
