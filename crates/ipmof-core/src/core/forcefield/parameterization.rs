use super::params::{ForceFieldError, ForceFieldParam, ForceFieldTable};
use crate::core::models::structure::HostStructure;
use tracing::debug;

/// A host structure together with the force field parameters of its species.
///
/// `params[k]` belongs to the k-th unique species of the structure, and
/// `species_indices[n]` is the species index of the n-th site.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterizedHost {
    structure: HostStructure,
    params: Vec<ForceFieldParam>,
    species_indices: Vec<usize>,
}

impl ParameterizedHost {
    pub fn structure(&self) -> &HostStructure {
        &self.structure
    }

    pub fn params(&self) -> &[ForceFieldParam] {
        &self.params
    }

    pub fn species_indices(&self) -> &[usize] {
        &self.species_indices
    }
}

pub struct Parameterizer<'a> {
    forcefield: &'a ForceFieldTable,
}

impl<'a> Parameterizer<'a> {
    pub fn new(forcefield: &'a ForceFieldTable) -> Self {
        Self { forcefield }
    }

    pub fn parameterize(
        &self,
        structure: &HostStructure,
    ) -> Result<ParameterizedHost, ForceFieldError> {
        let species = structure.species();
        let params = self.forcefield.resolve(&species)?;

        debug!(
            structure = structure.name(),
            forcefield = self.forcefield.name(),
            num_species = params.len(),
            "Resolved host species parameters."
        );

        Ok(ParameterizedHost {
            structure: structure.clone(),
            params,
            species_indices: structure.species_indices(),
        })
    }

    /// Resolves probe species, which need not occur in any structure.
    pub fn parameterize_probes<S: AsRef<str>>(
        &self,
        species: &[S],
    ) -> Result<Vec<ForceFieldParam>, ForceFieldError> {
        self.forcefield.resolve(species)
    }
}
