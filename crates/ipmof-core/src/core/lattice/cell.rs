use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GEOMETRY_EPSILON: f64 = 1e-10;

// Cosines smaller than this are treated as exact right angles.
const RIGHT_ANGLE_COSINE_SNAP: f64 = 1e-12;

fn cos_sin_degrees(degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    if cos.abs() < RIGHT_ANGLE_COSINE_SNAP {
        (0.0, 1.0)
    } else {
        (cos, sin)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Unit cell length '{axis}' must be positive and finite, got {value}")]
    InvalidLength { axis: char, value: f64 },

    #[error("Unit cell angle '{angle}' must lie strictly between 0 and 180 degrees, got {value}")]
    InvalidAngle { angle: &'static str, value: f64 },

    #[error("Lattice vector b has no component perpendicular to a (gamma = {gamma} degrees)")]
    CollinearBasis { gamma: f64 },

    #[error("Cell angles are geometrically impossible: {quantity} radicand is {radicand:.6e}")]
    NegativeRadicand {
        quantity: &'static str,
        radicand: f64,
    },
}

/// Crystallographic unit cell described by its edge lengths (Å) and angles (degrees).
///
/// Construction validates that the angles describe a real, non-degenerate cell, so every
/// `UnitCell` in circulation has a strictly positive volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUnitCell")]
pub struct UnitCell {
    lengths: [f64; 3],
    angles: [f64; 3],
}

#[derive(Deserialize)]
struct RawUnitCell {
    lengths: [f64; 3],
    angles: [f64; 3],
}

impl TryFrom<RawUnitCell> for UnitCell {
    type Error = GeometryError;

    fn try_from(raw: RawUnitCell) -> Result<Self, Self::Error> {
        UnitCell::new(raw.lengths, raw.angles)
    }
}

impl UnitCell {
    pub fn new(lengths: [f64; 3], angles: [f64; 3]) -> Result<Self, GeometryError> {
        for (axis, &value) in ['a', 'b', 'c'].iter().zip(lengths.iter()) {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidLength { axis: *axis, value });
            }
        }
        for (angle, &value) in ["alpha", "beta", "gamma"].iter().zip(angles.iter()) {
            if !value.is_finite() || value <= 0.0 || value >= 180.0 {
                return Err(GeometryError::InvalidAngle {
                    angle: *angle,
                    value,
                });
            }
        }

        let cell = Self { lengths, angles };
        cell.volume_radicand()?;
        Ok(cell)
    }

    pub fn cubic(length: f64) -> Result<Self, GeometryError> {
        Self::new([length; 3], [90.0; 3])
    }

    #[inline]
    pub fn lengths(&self) -> [f64; 3] {
        self.lengths
    }

    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }

    /// Cosines of `(alpha, beta, gamma)`, exactly zero for right angles.
    pub fn angle_cosines(&self) -> [f64; 3] {
        self.angles.map(|angle| cos_sin_degrees(angle).0)
    }

    /// Sines of `(alpha, beta, gamma)`, exactly one for right angles.
    pub fn angle_sines(&self) -> [f64; 3] {
        self.angles.map(|angle| cos_sin_degrees(angle).1)
    }

    fn volume_radicand(&self) -> Result<f64, GeometryError> {
        let [cos_a, cos_b, cos_g] = self.angle_cosines();
        let radicand =
            1.0 - cos_a * cos_a - cos_b * cos_b - cos_g * cos_g + 2.0 * cos_a * cos_b * cos_g;
        if radicand <= GEOMETRY_EPSILON {
            return Err(GeometryError::NegativeRadicand {
                quantity: "volume",
                radicand,
            });
        }
        Ok(radicand)
    }

    /// Unit cell volume in Å³ from the closed-form triclinic expression.
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.lengths;
        // Radicand positivity is established in `new`.
        a * b * c * self.volume_radicand().map_or(0.0, f64::sqrt)
    }

    /// Volume relative to a rectangular box with the same edge lengths.
    pub fn fractional_volume(&self) -> f64 {
        let [a, b, c] = self.lengths;
        self.volume() / (a * b * c)
    }

    pub fn lattice_vectors(&self) -> Result<LatticeVectors, GeometryError> {
        LatticeVectors::from_cell(self)
    }
}

/// Cartesian basis spanning one unit cell.
///
/// `x` lies along the Cartesian x-axis and `y` in the xy-plane, which fixes the
/// orientation of the cell uniquely for a given set of lengths and angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeVectors {
    pub x: Vector3<f64>,
    pub y: Vector3<f64>,
    pub z: Vector3<f64>,
}

impl LatticeVectors {
    pub fn from_cell(cell: &UnitCell) -> Result<Self, GeometryError> {
        let [a, b, c] = cell.lengths();
        let [cos_alpha, cos_beta, cos_gamma] = cell.angle_cosines();
        let sin_gamma = cell.angle_sines()[2];

        let x = Vector3::new(a, 0.0, 0.0);
        let y = Vector3::new(b * cos_gamma, b * sin_gamma, 0.0);
        if y.y.abs() <= GEOMETRY_EPSILON * b {
            return Err(GeometryError::CollinearBasis {
                gamma: cell.angles()[2],
            });
        }

        let zx = c * cos_beta;
        let zy = (c * b * cos_alpha - y.x * zx) / y.y;
        let radicand = c * c - zx * zx - zy * zy;
        if radicand <= 0.0 {
            return Err(GeometryError::NegativeRadicand {
                quantity: "z-component of lattice vector c",
                radicand,
            });
        }
        let z = Vector3::new(zx, zy, radicand.sqrt());

        Ok(Self { x, y, z })
    }

    /// Column matrix `[x y z]`, mapping fractional to Cartesian coordinates.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[self.x, self.y, self.z])
    }

    /// Cartesian image of the integer (or fractional) offset `(i, j, k)`.
    #[inline]
    pub fn to_cartesian(&self, offset: [f64; 3]) -> Vector3<f64> {
        self.x * offset[0] + self.y * offset[1] + self.z * offset[2]
    }

    pub fn triple_product_volume(&self) -> f64 {
        self.x.dot(&self.y.cross(&self.z)).abs()
    }

    /// Corners of the cell in the order
    /// `0, a, b, c, a+b, b+c, a+c, a+b+c`.
    pub fn corner_points(&self) -> [Point3<f64>; 8] {
        let (x, y, z) = (self.x, self.y, self.z);
        [
            Point3::origin(),
            Point3::from(x),
            Point3::from(y),
            Point3::from(z),
            Point3::from(x + y),
            Point3::from(y + z),
            Point3::from(x + z),
            Point3::from(x + y + z),
        ]
    }
}
