/// 12-6 Lennard-Jones energy in the sigma form, `4ε((σ/r)^12 - (σ/r)^6)`.
///
/// `dist` must be strictly positive; coincident centers are handled by the caller.
#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, epsilon: f64) -> f64 {
    let rho = sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    4.0 * epsilon * (rho12 - rho6)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_is_zero_at_sigma() {
        let energy = lennard_jones_12_6(3.4, 3.4, 0.2);
        assert!(f64_approx_equal(energy, 0.0));
    }

    #[test]
    fn lennard_jones_at_minimum_distance_returns_negative_well_depth() {
        let r_min = 2.0f64.powf(1.0 / 6.0) * 3.0;
        let energy = lennard_jones_12_6(r_min, 3.0, 0.5);
        assert!(f64_approx_equal(energy, -0.5));
    }

    #[test]
    fn lennard_jones_is_repulsive_inside_sigma() {
        assert!(lennard_jones_12_6(2.0, 3.0, 0.1) > 0.0);
    }

    #[test]
    fn lennard_jones_is_attractive_beyond_minimum() {
        let energy = lennard_jones_12_6(5.0, 3.0, 0.1);
        assert!(energy < 0.0);
        assert!(energy > -0.1);
    }

    #[test]
    fn lennard_jones_with_zero_well_depth_is_zero() {
        assert_eq!(lennard_jones_12_6(1.5, 3.0, 0.0), 0.0);
    }
}
