use super::energy_map::EnergyGridPoint;
use super::error::EngineError;
use super::packing::PackedStructure;
use super::progress::{Progress, ProgressReporter};
use crate::core::forcefield::mixing::PairParamMatrix;
use crate::core::forcefield::potentials;
use itertools::iproduct;
use nalgebra::Point3;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Absorbs representation error in `limit / spacing` before taking the ceiling.
const GRID_SLACK: f64 = 1e-9;

/// Upper bound on the number of points in one scan.
pub const MAX_GRID_POINTS: usize = 1 << 30;

/// Regular sampling grid anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxes {
    spacing: [f64; 3],
    counts: [usize; 3],
}

impl GridAxes {
    /// Grid from 0 to `⌈extent⌉` along each axis, `⌈⌈extent⌉ / spacing⌉ + 1` points per axis.
    pub fn new(extent: [f64; 3], spacing: [f64; 3]) -> Result<Self, EngineError> {
        let mut counts = [0usize; 3];
        for axis in 0..3 {
            let (length, step) = (extent[axis], spacing[axis]);
            if !step.is_finite() || step <= 0.0 {
                return Err(EngineError::invalid(
                    "grid_spacing",
                    step,
                    "must be positive and finite",
                ));
            }
            if !length.is_finite() || length < 0.0 {
                return Err(EngineError::invalid(
                    "scan_extent",
                    length,
                    "must be non-negative and finite",
                ));
            }
            let steps = (length.ceil() / step - GRID_SLACK).ceil().max(0.0);
            if steps >= MAX_GRID_POINTS as f64 {
                return Err(EngineError::invalid(
                    "grid_spacing",
                    step,
                    "too fine for the scan extent",
                ));
            }
            counts[axis] = steps as usize + 1;
        }
        let total = counts
            .iter()
            .try_fold(1usize, |total, &n| total.checked_mul(n))
            .filter(|&total| total <= MAX_GRID_POINTS);
        if total.is_none() {
            return Err(EngineError::invalid(
                "grid_spacing",
                spacing.into_iter().fold(f64::INFINITY, f64::min),
                "yields too many grid points",
            ));
        }
        Ok(Self { spacing, counts })
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid positions with x outermost and z innermost.
    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> {
        let [nx, ny, nz] = self.counts;
        let [sx, sy, sz] = self.spacing;
        iproduct!(0..nx, 0..ny, 0..nz)
            .map(move |(i, j, k)| Point3::new(i as f64 * sx, j as f64 * sy, k as f64 * sz))
    }
}

/// Read-only inputs shared by every grid point of a scan.
pub struct ScanInput<'a> {
    pub packed: &'a PackedStructure,
    /// Species index (row of `pair_params`) of each atom in one unreplicated cell.
    pub species_indices: &'a [usize],
    pub pair_params: &'a PairParamMatrix,
    pub cutoff: f64,
}

impl ScanInput<'_> {
    fn validate(&self) -> Result<(), EngineError> {
        if self.cutoff.is_nan() || self.cutoff < 0.0 {
            return Err(EngineError::invalid(
                "cutoff",
                self.cutoff,
                "must not be negative",
            ));
        }
        let atoms_per_image = self.species_indices.len();
        if self
            .packed
            .images()
            .iter()
            .any(|image| image.len() != atoms_per_image)
        {
            return Err(EngineError::invalid(
                "species_indices",
                atoms_per_image as f64,
                "length must match the number of atoms in every packed image",
            ));
        }
        let num_host = self.pair_params.num_host_species();
        if let Some(&index) = self.species_indices.iter().find(|&&i| i >= num_host) {
            return Err(EngineError::invalid(
                "species_indices",
                index as f64,
                "refers to a host species without mixed parameters",
            ));
        }
        Ok(())
    }

    /// Total Lennard-Jones energy per probe species at `point`.
    ///
    /// Atoms farther than the cutoff contribute nothing. A host atom exactly on
    /// `point` makes every probe energy `+∞`, regardless of any other contribution.
    pub fn energies_at(&self, point: &Point3<f64>) -> Vec<f64> {
        let num_probes = self.pair_params.num_probe_species();
        let mut totals = vec![0.0; num_probes];

        for (atom_index, position) in self.packed.atoms() {
            let r = (position - point).norm();
            if r > self.cutoff {
                continue;
            }
            if r == 0.0 {
                return vec![f64::INFINITY; num_probes];
            }
            let host = self.species_indices[atom_index];
            for (probe, total) in totals.iter_mut().enumerate() {
                let (sigma, epsilon) = self.pair_params.get(host, probe);
                *total += potentials::lennard_jones_12_6(r, sigma, epsilon);
            }
        }
        totals
    }
}

/// Computes the energy field on every point of `axes`.
///
/// Points are independent, so with the `parallel` feature they are evaluated on the
/// rayon pool; the returned order is always the grid order of [`GridAxes::positions`].
#[instrument(skip_all, name = "energy_grid_scan")]
pub fn scan(
    input: &ScanInput,
    axes: &GridAxes,
    reporter: &ProgressReporter,
) -> Result<Vec<EnergyGridPoint>, EngineError> {
    input.validate()?;

    let min_spacing = axes.spacing().into_iter().fold(f64::INFINITY, f64::min);
    if min_spacing > input.cutoff {
        warn!(
            spacing = min_spacing,
            cutoff = input.cutoff,
            "Grid spacing exceeds the interaction cutoff; the map will be very coarse."
        );
    }

    info!(
        grid = ?axes.counts(),
        num_points = axes.len(),
        num_images = input.packed.num_images(),
        num_probes = input.pair_params.num_probe_species(),
        "Scanning energy grid."
    );

    let positions: Vec<Point3<f64>> = axes.positions().collect();
    reporter.report(Progress::ScanStart {
        total_points: positions.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = positions.iter();

    #[cfg(feature = "parallel")]
    let iterator = positions.par_iter();

    let points: Vec<EnergyGridPoint> = iterator
        .map(|position| {
            let energies = input.energies_at(position);
            reporter.report(Progress::PointComplete);
            EnergyGridPoint {
                position: *position,
                energies,
            }
        })
        .collect();

    reporter.report(Progress::ScanFinish);

    let overlaps = points.iter().filter(|p| p.is_overlap()).count();
    info!(num_points = points.len(), overlaps, "Energy grid scan complete.");

    Ok(points)
}
