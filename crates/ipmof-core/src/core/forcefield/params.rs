use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForceFieldError {
    #[error("Species '{species}' not found in force field '{forcefield}'")]
    SpeciesNotFound { species: String, forcefield: String },

    #[error("Species '{species}' appears more than once in force field '{forcefield}'")]
    DuplicateSpecies { species: String, forcefield: String },

    #[error("Invalid {parameter} for species '{species}': {value} (must be finite and non-negative)")]
    InvalidParameter {
        species: String,
        parameter: &'static str,
        value: f64,
    },
}

/// Lennard-Jones parameters of a single species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceFieldParam {
    pub species: String,
    /// Collision diameter in Angstroms.
    pub sigma: f64,
    /// Well depth.
    pub epsilon: f64,
}

impl ForceFieldParam {
    pub fn new(species: &str, sigma: f64, epsilon: f64) -> Result<Self, ForceFieldError> {
        let param = Self {
            species: species.to_string(),
            sigma,
            epsilon,
        };
        param.validate()?;
        Ok(param)
    }

    pub fn validate(&self) -> Result<(), ForceFieldError> {
        for (parameter, value) in [("sigma", self.sigma), ("epsilon", self.epsilon)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ForceFieldError::InvalidParameter {
                    species: self.species.clone(),
                    parameter,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawForceFieldTable {
    name: String,
    atoms: Vec<ForceFieldParam>,
}

/// A named set of per-species parameters (e.g. UFF or DREIDING).
///
/// Every species appears at most once, so a lookup resolves to exactly one entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawForceFieldTable")]
pub struct ForceFieldTable {
    name: String,
    entries: Vec<ForceFieldParam>,
    index: HashMap<String, usize>,
}

impl TryFrom<RawForceFieldTable> for ForceFieldTable {
    type Error = ForceFieldError;

    fn try_from(raw: RawForceFieldTable) -> Result<Self, Self::Error> {
        ForceFieldTable::new(&raw.name, raw.atoms)
    }
}

impl ForceFieldTable {
    pub fn new(name: &str, entries: Vec<ForceFieldParam>) -> Result<Self, ForceFieldError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.species.clone(), i).is_some() {
                return Err(ForceFieldError::DuplicateSpecies {
                    species: entry.species.clone(),
                    forcefield: name.to_string(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            entries,
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ForceFieldParam] {
        &self.entries
    }

    pub fn get(&self, species: &str) -> Option<&ForceFieldParam> {
        self.index.get(species).map(|&i| &self.entries[i])
    }

    /// Exact-match lookup. Missing species are an error, never a zero-filled entry.
    pub fn lookup(&self, species: &str) -> Result<&ForceFieldParam, ForceFieldError> {
        self.get(species)
            .ok_or_else(|| ForceFieldError::SpeciesNotFound {
                species: species.to_string(),
                forcefield: self.name.clone(),
            })
    }

    /// Resolves a list of species in order, failing on the first one missing.
    pub fn resolve<S: AsRef<str>>(
        &self,
        species: &[S],
    ) -> Result<Vec<ForceFieldParam>, ForceFieldError> {
        species
            .iter()
            .map(|s| self.lookup(s.as_ref()).cloned())
            .collect()
    }
}
