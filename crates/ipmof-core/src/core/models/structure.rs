use super::atom::AtomSite;
use crate::core::lattice::UnitCell;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A host framework: one unit cell and the atoms it contains, in source order.
///
/// Species grouping is always derived from `sites`, never stored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStructure {
    name: String,
    cell: UnitCell,
    sites: Vec<AtomSite>,
}

impl HostStructure {
    pub fn new(name: &str, cell: UnitCell, sites: Vec<AtomSite>) -> Self {
        Self {
            name: name.to_string(),
            cell,
            sites,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell(&self) -> &UnitCell {
        &self.cell
    }

    pub fn sites(&self) -> &[AtomSite] {
        &self.sites
    }

    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.sites.iter().map(|site| site.position).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Unique species labels in order of first appearance.
    pub fn species(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::new();
        for site in &self.sites {
            if !unique.contains(&site.species.as_str()) {
                unique.push(&site.species);
            }
        }
        unique
    }

    /// For every site, the index of its species within [`species`](Self::species).
    pub fn species_indices(&self) -> Vec<usize> {
        let unique = self.species();
        self.sites
            .iter()
            .map(|site| {
                unique
                    .iter()
                    .position(|&s| s == site.species)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Unique species paired with the positions of their sites, both in source order.
    pub fn species_groups(&self) -> Vec<(&str, Vec<Point3<f64>>)> {
        let mut groups: Vec<(&str, Vec<Point3<f64>>)> = self
            .species()
            .into_iter()
            .map(|species| (species, Vec::new()))
            .collect();
        for (site, index) in self.sites.iter().zip(self.species_indices()) {
            groups[index].1.push(site.position);
        }
        groups
    }
}
