use super::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Distance between neighbouring grid points, in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GridSpacing {
    Uniform(f64),
    PerAxis([f64; 3]),
}

impl GridSpacing {
    pub fn per_axis(&self) -> [f64; 3] {
        match *self {
            GridSpacing::Uniform(spacing) => [spacing; 3],
            GridSpacing::PerAxis(spacing) => spacing,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for spacing in self.per_axis() {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(EngineError::invalid(
                    "grid_spacing",
                    spacing,
                    "must be positive and finite",
                ));
            }
        }
        Ok(())
    }
}

/// How the Lennard-Jones interaction cutoff is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CutoffPolicy {
    Fixed(f64),
    /// Half of the narrowest perpendicular width of the unit cell.
    #[default]
    HalfMinimumWidth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMapConfig {
    pub cutoff: CutoffPolicy,
    pub grid_spacing: GridSpacing,
    pub probe_species: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileEnergyMapConfig {
    cutoff: Option<f64>,
    grid_spacing: Option<GridSpacing>,
    probe_species: Option<Vec<String>>,
}

impl EnergyMapConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FileEnergyMapConfig = toml::from_str(content)?;

        let mut builder = EnergyMapConfigBuilder::new();
        if let Some(cutoff) = file.cutoff {
            builder = builder.cutoff(CutoffPolicy::Fixed(cutoff));
        }
        if let Some(spacing) = file.grid_spacing {
            builder = builder.grid_spacing(spacing);
        }
        if let Some(species) = file.probe_species {
            builder = builder.probe_species(species);
        }
        builder.build()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.grid_spacing.validate()?;
        if let CutoffPolicy::Fixed(cutoff) = self.cutoff {
            if !cutoff.is_finite() || cutoff <= 0.0 {
                return Err(EngineError::invalid(
                    "cutoff",
                    cutoff,
                    "must be positive and finite",
                ));
            }
        }
        if self.probe_species.is_empty() {
            return Err(EngineError::invalid(
                "probe_species",
                0.0,
                "at least one probe species is required",
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct EnergyMapConfigBuilder {
    cutoff: Option<CutoffPolicy>,
    grid_spacing: Option<GridSpacing>,
    probe_species: Option<Vec<String>>,
}

impl EnergyMapConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: CutoffPolicy) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
    pub fn grid_spacing(mut self, spacing: GridSpacing) -> Self {
        self.grid_spacing = Some(spacing);
        self
    }
    pub fn probe_species<S: Into<String>>(mut self, species: impl IntoIterator<Item = S>) -> Self {
        self.probe_species = Some(species.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<EnergyMapConfig, ConfigError> {
        Ok(EnergyMapConfig {
            cutoff: self.cutoff.unwrap_or_default(),
            grid_spacing: self
                .grid_spacing
                .ok_or(ConfigError::MissingParameter("grid_spacing"))?,
            probe_species: self
                .probe_species
                .ok_or(ConfigError::MissingParameter("probe_species"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn builder_defaults_to_half_minimum_width_cutoff() {
        let config = EnergyMapConfigBuilder::new()
            .grid_spacing(GridSpacing::Uniform(1.0))
            .probe_species(["H"])
            .build()
            .unwrap();
        assert_eq!(config.cutoff, CutoffPolicy::HalfMinimumWidth);
        assert_eq!(config.probe_species, vec!["H".to_string()]);
    }

    #[test]
    fn builder_requires_grid_spacing() {
        let result = EnergyMapConfigBuilder::new().probe_species(["H"]).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("grid_spacing"))
        ));
    }

    #[test]
    fn builder_requires_probe_species() {
        let result = EnergyMapConfigBuilder::new()
            .grid_spacing(GridSpacing::Uniform(1.0))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("probe_species"))
        ));
    }

    #[test]
    fn from_toml_str_accepts_uniform_spacing_and_fixed_cutoff() {
        let config = EnergyMapConfig::from_toml_str(
            r#"
            cutoff = 12.5
            grid-spacing = 0.5
            probe-species = ["H", "C"]
            "#,
        )
        .unwrap();
        assert_eq!(config.cutoff, CutoffPolicy::Fixed(12.5));
        assert_eq!(config.grid_spacing.per_axis(), [0.5; 3]);
        assert_eq!(config.probe_species.len(), 2);
    }

    #[test]
    fn from_toml_str_accepts_per_axis_spacing() {
        let config = EnergyMapConfig::from_toml_str(
            r#"
            grid-spacing = [0.5, 1.0, 2.0]
            probe-species = ["H"]
            "#,
        )
        .unwrap();
        assert_eq!(config.cutoff, CutoffPolicy::HalfMinimumWidth);
        assert_eq!(config.grid_spacing, GridSpacing::PerAxis([0.5, 1.0, 2.0]));
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = EnergyMapConfig::from_toml_str(
            r#"
            grid-spacing = 1.0
            probe-species = ["H"]
            smoothing = true
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn load_reads_config_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("energy_map.toml");
        fs::write(&path, "grid-spacing = 2.0\nprobe-species = [\"Ar\"]\n").unwrap();

        let config = EnergyMapConfig::load(&path).unwrap();
        assert_eq!(config.grid_spacing, GridSpacing::Uniform(2.0));
        assert_eq!(config.probe_species, vec!["Ar".to_string()]);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = EnergyMapConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn validate_rejects_non_positive_spacing_on_any_axis() {
        let config = EnergyMapConfigBuilder::new()
            .grid_spacing(GridSpacing::PerAxis([1.0, 0.0, 1.0]))
            .probe_species(["H"])
            .build()
            .unwrap();
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidParameter {
                name: "grid_spacing",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_fixed_cutoff() {
        let config = EnergyMapConfigBuilder::new()
            .cutoff(CutoffPolicy::Fixed(-3.0))
            .grid_spacing(GridSpacing::Uniform(1.0))
            .probe_species(["H"])
            .build()
            .unwrap();
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidParameter { name: "cutoff", .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_probe_list() {
        let config = EnergyMapConfigBuilder::new()
            .grid_spacing(GridSpacing::Uniform(1.0))
            .probe_species(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidParameter {
                name: "probe_species",
                ..
            })
        ));
    }
}
