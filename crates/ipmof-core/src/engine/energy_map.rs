use nalgebra::Point3;
use serde::Serialize;

/// Interaction energy of every probe species at one grid position.
///
/// An energy of `f64::INFINITY` marks a position that coincides with a host atom center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyGridPoint {
    pub position: Point3<f64>,
    pub energies: Vec<f64>,
}

impl EnergyGridPoint {
    pub fn is_overlap(&self) -> bool {
        self.energies.iter().any(|e| *e == f64::INFINITY)
    }
}

/// Completed energy map over one unit cell.
///
/// Points are stored in x-outer, y-middle, z-inner order, so the point with
/// grid indices `(i, j, k)` lives at `(i * ny + j) * nz + k`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMap {
    probe_species: Vec<String>,
    spacing: [f64; 3],
    shape: [usize; 3],
    cutoff: f64,
    points: Vec<EnergyGridPoint>,
}

impl EnergyMap {
    pub(crate) fn new(
        probe_species: Vec<String>,
        spacing: [f64; 3],
        shape: [usize; 3],
        cutoff: f64,
        points: Vec<EnergyGridPoint>,
    ) -> Self {
        debug_assert_eq!(points.len(), shape.iter().product::<usize>());
        Self {
            probe_species,
            spacing,
            shape,
            cutoff,
            points,
        }
    }

    pub fn probe_species(&self) -> &[String] {
        &self.probe_species
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn points(&self) -> &[EnergyGridPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<EnergyGridPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, i: usize, j: usize, k: usize) -> Option<&EnergyGridPoint> {
        let [nx, ny, nz] = self.shape;
        if i >= nx || j >= ny || k >= nz {
            return None;
        }
        self.points.get((i * ny + j) * nz + k)
    }

    fn species_index(&self, species: &str) -> Option<usize> {
        self.probe_species.iter().position(|s| s == species)
    }

    /// The field of a single probe species, in grid order.
    pub fn energies_for(&self, species: &str) -> Option<Vec<f64>> {
        let index = self.species_index(species)?;
        Some(self.points.iter().map(|p| p.energies[index]).collect())
    }

    /// Grid point with the lowest finite energy for `species`.
    pub fn minimum_energy(&self, species: &str) -> Option<(&EnergyGridPoint, f64)> {
        let index = self.species_index(species)?;
        self.points
            .iter()
            .map(|p| (p, p.energies[index]))
            .filter(|(_, e)| e.is_finite())
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Lower and upper grid coordinates bracketing `position` on each axis.
    ///
    /// The fractional grid index is rounded to one decimal before flooring, so
    /// positions within a twentieth of a spacing below a grid plane snap onto it.
    pub fn grid_box(&self, position: &Point3<f64>) -> ([f64; 3], [f64; 3]) {
        let mut floor = [0.0; 3];
        let mut ceil = [0.0; 3];
        for axis in 0..3 {
            let grid = self.spacing[axis];
            let fraction = position[axis] / grid;
            floor[axis] = ((fraction * 10.0).round() / 10.0).floor() * grid;
            ceil[axis] = fraction.floor() * grid + grid;
        }
        (floor, ceil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> EnergyMap {
        let shape = [2, 2, 2];
        let mut points = Vec::new();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let n = (i * 4 + j * 2 + k) as f64;
                    points.push(EnergyGridPoint {
                        position: Point3::new(i as f64, j as f64, k as f64),
                        energies: vec![n - 3.0, -n],
                    });
                }
            }
        }
        points[5].energies = vec![f64::INFINITY, f64::INFINITY];
        EnergyMap::new(
            vec!["H".to_string(), "C".to_string()],
            [1.0; 3],
            shape,
            5.0,
            points,
        )
    }

    fn single_point_map(spacing: [f64; 3]) -> EnergyMap {
        let point = EnergyGridPoint {
            position: Point3::origin(),
            energies: vec![0.0],
        };
        EnergyMap::new(vec!["H".to_string()], spacing, [1, 1, 1], 1.0, vec![point])
    }

    #[test]
    fn point_uses_x_outer_z_inner_indexing() {
        let map = sample_map();
        let point = map.point(1, 0, 1).unwrap();
        assert_eq!(point.position, Point3::new(1.0, 0.0, 1.0));
        assert!(point.is_overlap());
        assert!(map.point(2, 0, 0).is_none());
    }

    #[test]
    fn energies_for_extracts_single_species_field() {
        let map = sample_map();
        let field = map.energies_for("C").unwrap();
        assert_eq!(field.len(), 8);
        assert_eq!(field[0], 0.0);
        assert_eq!(field[7], -7.0);
        assert!(map.energies_for("Xe").is_none());
    }

    #[test]
    fn minimum_energy_skips_overlap_points() {
        let map = sample_map();
        let (point, energy) = map.minimum_energy("C").unwrap();
        assert_eq!(energy, -7.0);
        assert_eq!(point.position, Point3::new(1.0, 1.0, 1.0));

        let (_, energy) = map.minimum_energy("H").unwrap();
        assert_eq!(energy, -3.0);
    }

    #[test]
    fn grid_box_brackets_position() {
        let map = single_point_map([0.5, 1.0, 2.0]);
        let (floor, ceil) = map.grid_box(&Point3::new(1.3, 2.2, 3.1));
        assert_eq!(floor, [1.0, 2.0, 2.0]);
        assert_eq!(ceil, [1.5, 3.0, 4.0]);
    }

    #[test]
    fn grid_box_snaps_positions_just_below_a_grid_plane() {
        let map = single_point_map([1.0; 3]);
        let (floor, _) = map.grid_box(&Point3::new(1.97, 0.5, 0.0));
        assert_eq!(floor[0], 2.0);
        assert_eq!(floor[1], 0.0);
    }
}
