use super::error::EngineError;
use crate::core::lattice::LatticeVectors;
use itertools::iproduct;
use nalgebra::{Point3, Vector3};
use tracing::{debug, info, instrument};

/// Number of unit-cell replicas along each lattice direction.
pub type PackingFactor = [usize; 3];

/// Upper bound on the number of images in one packed structure.
pub const MAX_IMAGES: usize = 1 << 24;

/// Unit-cell images surrounding (and including) the home cell.
///
/// Each image lists its atoms in the order of the unreplicated structure, so the
/// species of `images()[i][n]` is the species of site `n` of the original cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedStructure {
    factor: PackingFactor,
    images: Vec<Vec<Point3<f64>>>,
}

impl PackedStructure {
    pub fn factor(&self) -> PackingFactor {
        self.factor
    }

    pub fn images(&self) -> &[Vec<Point3<f64>>] {
        &self.images
    }

    pub fn num_images(&self) -> usize {
        self.images.len()
    }

    pub fn num_atoms(&self) -> usize {
        self.images.iter().map(Vec::len).sum()
    }

    /// All packed positions paired with their index in the unreplicated structure.
    pub fn atoms(&self) -> impl Iterator<Item = (usize, &Point3<f64>)> {
        self.images.iter().flat_map(|image| image.iter().enumerate())
    }
}

/// `2·⌈cutoff/length⌉ + 1` replicas per dimension, always odd and at least one.
pub fn factor(lengths: [f64; 3], cutoff: f64) -> Result<PackingFactor, EngineError> {
    if !cutoff.is_finite() || cutoff <= 0.0 {
        return Err(EngineError::invalid(
            "cutoff",
            cutoff,
            "must be positive and finite to size a supercell",
        ));
    }

    let mut packing = [1usize; 3];
    for (slot, length) in packing.iter_mut().zip(lengths) {
        if !length.is_finite() || length <= 0.0 {
            return Err(EngineError::invalid(
                "cell_length",
                length,
                "must be positive and finite",
            ));
        }
        let shells = (cutoff / length).ceil();
        *slot = replicas_for(shells).ok_or_else(|| {
            EngineError::invalid("cutoff", cutoff, "needs more cell replicas than can be packed")
        })?;
    }
    image_count(packing)?;
    Ok(packing)
}

fn replicas_for(shells: f64) -> Option<usize> {
    if shells >= MAX_IMAGES as f64 {
        return None;
    }
    (shells as usize).checked_mul(2)?.checked_add(1)
}

/// Number of images in a packing box, bounded by [`MAX_IMAGES`].
pub fn image_count(factor: PackingFactor) -> Result<usize, EngineError> {
    if let Some(&f) = factor.iter().find(|&&f| f == 0) {
        return Err(EngineError::invalid(
            "packing_factor",
            f as f64,
            "every dimension needs at least one replica",
        ));
    }
    factor
        .iter()
        .try_fold(1usize, |total, &f| total.checked_mul(f))
        .filter(|&total| total <= MAX_IMAGES)
        .ok_or_else(|| {
            EngineError::invalid(
                "packing_factor",
                factor.iter().map(|&f| f as f64).product(),
                "too many cell images to pack",
            )
        })
}

/// Cartesian translations of every replica offset in the packing box.
///
/// Offsets are enumerated with x outermost and z innermost.
pub fn translation_vectors(
    factor: PackingFactor,
    lattice: &LatticeVectors,
) -> Result<Vec<Vector3<f64>>, EngineError> {
    image_count(factor)?;
    let [nx, ny, nz] = factor;
    Ok(iproduct!(0..nx, 0..ny, 0..nz)
        .map(|(i, j, k)| lattice.to_cartesian([i as f64, j as f64, k as f64]))
        .collect())
}

/// Shift that moves replica `((f-1)/2, ...)` back onto the original cell.
pub fn centering_offset(factor: PackingFactor, lattice: &LatticeVectors) -> Vector3<f64> {
    lattice.to_cartesian(factor.map(|f| (f as f64 - 1.0) / 2.0))
}

/// Applies every translation to every atom position, re-centred on the home cell.
///
/// Images follow the order of `translations`; atoms inside an image follow `positions`.
pub fn pack(
    translations: &[Vector3<f64>],
    factor: PackingFactor,
    lattice: &LatticeVectors,
    positions: &[Point3<f64>],
) -> Result<PackedStructure, EngineError> {
    image_count(factor)?;
    let origin = centering_offset(factor, lattice);

    let images = translations
        .iter()
        .map(|translation| {
            let shift = translation - origin;
            positions.iter().map(|p| p + shift).collect()
        })
        .collect();

    Ok(PackedStructure { factor, images })
}

/// Replicates `positions` far enough to cover `cutoff` in every direction.
#[instrument(skip_all, name = "supercell_packing")]
pub fn pack_for_cutoff(
    lengths: [f64; 3],
    lattice: &LatticeVectors,
    positions: &[Point3<f64>],
    cutoff: f64,
) -> Result<PackedStructure, EngineError> {
    let packing = factor(lengths, cutoff)?;
    info!(
        factor = ?packing,
        cutoff,
        "Packing unit cell into supercell."
    );

    let translations = translation_vectors(packing, lattice)?;
    let packed = pack(&translations, packing, lattice, positions)?;

    debug!(
        num_images = packed.num_images(),
        num_atoms = packed.num_atoms(),
        "Supercell packed."
    );
    Ok(packed)
}
