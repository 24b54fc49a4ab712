use crate::core::forcefield::mixing::PairParamMatrix;
use crate::core::forcefield::parameterization::{ParameterizedHost, Parameterizer};
use crate::core::forcefield::params::{ForceFieldParam, ForceFieldTable};
use crate::core::lattice::cutoff;
use crate::core::models::structure::HostStructure;
use crate::engine::config::{CutoffPolicy, EnergyMapConfig, GridSpacing};
use crate::engine::energy_grid::{self, GridAxes, ScanInput};
use crate::engine::energy_map::EnergyMap;
use crate::engine::error::EngineError;
use crate::engine::packing;
use crate::engine::progress::ProgressReporter;
use tracing::{debug, info, instrument};

/// Builds the energy map of `structure` for the probe species named in `config`.
///
/// Host and probe species are both resolved against `forcefield`. Any geometry,
/// lookup or parameter error aborts the run before a single grid point is evaluated.
#[instrument(skip_all, name = "energy_map_workflow", fields(structure = structure.name()))]
pub fn run(
    structure: &HostStructure,
    forcefield: &ForceFieldTable,
    config: &EnergyMapConfig,
    reporter: &ProgressReporter,
) -> Result<EnergyMap, EngineError> {
    let (host, probes, cutoff) = reporter.phase("Preparation", || {
        config.validate()?;

        let parameterizer = Parameterizer::new(forcefield);
        let host = parameterizer.parameterize(structure)?;
        let probes = parameterizer.parameterize_probes(&config.probe_species)?;

        let cutoff = match config.cutoff {
            CutoffPolicy::Fixed(value) => value,
            CutoffPolicy::HalfMinimumWidth => cutoff::half_minimum_width(structure.cell()),
        };
        info!(
            forcefield = forcefield.name(),
            cutoff,
            num_atoms = structure.len(),
            num_probes = probes.len(),
            "Energy map inputs resolved."
        );
        Ok::<_, EngineError>((host, probes, cutoff))
    })?;

    compute(&host, &probes, cutoff, config.grid_spacing, reporter)
}

/// Energy map of an already parameterized host for the given probe parameters.
pub fn compute(
    host: &ParameterizedHost,
    probes: &[ForceFieldParam],
    cutoff: f64,
    grid_spacing: GridSpacing,
    reporter: &ProgressReporter,
) -> Result<EnergyMap, EngineError> {
    grid_spacing.validate()?;
    for probe in probes {
        probe.validate()?;
    }

    let structure = host.structure();
    let cell = structure.cell();
    let lattice = cell.lattice_vectors()?;
    debug!(
        x = ?lattice.x,
        y = ?lattice.y,
        z = ?lattice.z,
        volume = cell.volume(),
        fractional_volume = cell.fractional_volume(),
        "Lattice vectors computed."
    );

    let packed = reporter.phase("Packing", || {
        packing::pack_for_cutoff(cell.lengths(), &lattice, &structure.positions(), cutoff)
    })?;

    let pair_params = PairParamMatrix::lorentz_berthelot(host.params(), probes);
    let axes = GridAxes::new(cell.lengths(), grid_spacing.per_axis())?;
    let input = ScanInput {
        packed: &packed,
        species_indices: host.species_indices(),
        pair_params: &pair_params,
        cutoff,
    };

    let points = reporter.phase("Scanning", || energy_grid::scan(&input, &axes, reporter))?;

    Ok(EnergyMap::new(
        probes.iter().map(|p| p.species.clone()).collect(),
        axes.spacing(),
        axes.counts(),
        cutoff,
        points,
    ))
}
