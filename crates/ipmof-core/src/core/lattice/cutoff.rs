use super::cell::UnitCell;

/// Perpendicular widths of the cell across the faces opposite `a`, `b` and `c`.
///
/// Each width is `V / (l_i * l_j / sin(angle))`, where `l_i`, `l_j` are the two
/// lengths spanning the face and `angle` is the one between them.
pub fn cell_widths(cell: &UnitCell) -> [f64; 3] {
    let [a, b, c] = cell.lengths();
    let [sin_alpha, sin_beta, sin_gamma] = cell.angle_sines();
    let volume = cell.volume();

    [
        volume / (b * c / sin_alpha),
        volume / (a * c / sin_beta),
        volume / (a * b / sin_gamma),
    ]
}

/// Interaction cutoff equal to half of the narrowest cell width.
pub fn half_minimum_width(cell: &UnitCell) -> f64 {
    cell_widths(cell)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn cubic_cell_cutoff_is_half_the_edge() {
        let cell = UnitCell::cubic(12.0).unwrap();
        assert!(f64_approx_equal(half_minimum_width(&cell), 6.0));
    }

    #[test]
    fn orthorhombic_cell_cutoff_uses_shortest_edge() {
        let cell = UnitCell::new([10.0, 14.0, 8.0], [90.0; 3]).unwrap();
        let widths = cell_widths(&cell);

        assert!(f64_approx_equal(widths[0], 10.0));
        assert!(f64_approx_equal(widths[1], 14.0));
        assert!(f64_approx_equal(widths[2], 8.0));
        assert!(f64_approx_equal(half_minimum_width(&cell), 4.0));
    }

    #[test]
    fn triclinic_cell_cutoff_is_positive_and_finite() {
        let cell = UnitCell::new([9.0, 10.0, 11.0], [70.0, 80.0, 110.0]).unwrap();
        let cutoff = half_minimum_width(&cell);
        assert!(cutoff.is_finite());
        assert!(cutoff > 0.0);
        assert!(cell_widths(&cell).iter().all(|&w| cutoff <= w / 2.0 + TOLERANCE));
    }
}
