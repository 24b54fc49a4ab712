use super::params::ForceFieldParam;
use nalgebra::DMatrix;

/// Cross-species Lennard-Jones parameters, indexed `(host species, probe species)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairParamMatrix {
    pub sigma: DMatrix<f64>,
    pub epsilon: DMatrix<f64>,
}

impl PairParamMatrix {
    /// Lorentz-Berthelot combination: arithmetic mean of sigma, geometric mean of epsilon.
    pub fn lorentz_berthelot(host: &[ForceFieldParam], probe: &[ForceFieldParam]) -> Self {
        let sigma = DMatrix::from_fn(host.len(), probe.len(), |i, j| {
            (host[i].sigma + probe[j].sigma) / 2.0
        });
        let epsilon = DMatrix::from_fn(host.len(), probe.len(), |i, j| {
            (host[i].epsilon * probe[j].epsilon).sqrt()
        });
        Self { sigma, epsilon }
    }

    #[inline]
    pub fn get(&self, host_index: usize, probe_index: usize) -> (f64, f64) {
        (
            self.sigma[(host_index, probe_index)],
            self.epsilon[(host_index, probe_index)],
        )
    }

    pub fn num_host_species(&self) -> usize {
        self.sigma.nrows()
    }

    pub fn num_probe_species(&self) -> usize {
        self.sigma.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn param(species: &str, sigma: f64, epsilon: f64) -> ForceFieldParam {
        ForceFieldParam::new(species, sigma, epsilon).unwrap()
    }

    #[test]
    fn mixing_produces_host_by_probe_shape() {
        let host = vec![param("Zn", 2.46, 0.12), param("O", 3.12, 0.06), param("C", 3.43, 0.1)];
        let probe = vec![param("H", 2.57, 0.04), param("N", 3.26, 0.07)];
        let table = PairParamMatrix::lorentz_berthelot(&host, &probe);

        assert_eq!(table.num_host_species(), 3);
        assert_eq!(table.num_probe_species(), 2);
    }

    #[test]
    fn mixing_applies_arithmetic_sigma_and_geometric_epsilon() {
        let host = vec![param("C", 3.0, 0.1)];
        let probe = vec![param("H", 2.8, 0.05)];
        let (sigma, epsilon) = PairParamMatrix::lorentz_berthelot(&host, &probe).get(0, 0);

        assert!((sigma - 2.9).abs() < TOLERANCE);
        assert!((epsilon - (0.1f64 * 0.05).sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn mixing_identical_sets_is_symmetric() {
        let set = vec![param("Zn", 2.46, 0.12), param("O", 3.12, 0.06), param("C", 3.43, 0.1)];
        let table = PairParamMatrix::lorentz_berthelot(&set, &set);

        assert_eq!(table.sigma, table.sigma.transpose());
        assert_eq!(table.epsilon, table.epsilon.transpose());
    }

    #[test]
    fn zero_epsilon_on_either_side_yields_zero() {
        let host = vec![param("He", 2.6, 0.0), param("C", 3.4, 0.1)];
        let probe = vec![param("Ne", 2.8, 0.0), param("H", 2.6, 0.04)];
        let table = PairParamMatrix::lorentz_berthelot(&host, &probe);

        assert_eq!(table.epsilon[(0, 0)], 0.0);
        assert_eq!(table.epsilon[(0, 1)], 0.0);
        assert_eq!(table.epsilon[(1, 0)], 0.0);
        assert!(table.epsilon[(1, 1)] > 0.0);
        assert!(table.epsilon.iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn empty_probe_set_yields_empty_columns() {
        let host = vec![param("C", 3.4, 0.1)];
        let table = PairParamMatrix::lorentz_berthelot(&host, &[]);
        assert_eq!(table.num_host_species(), 1);
        assert_eq!(table.num_probe_species(), 0);
    }
}
