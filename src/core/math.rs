pub fn clamp<T: PartialOrd>(x: T, a: T, b: T) -> T {
    if x < a {
        a
    }
    else if x > b {
        b
    }
    else {
        x
    }
}

pub fn clamp_unit(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/**
 * Linearly interpolates between x and y. Where a = 0, x is returned, and
 * where a = 1, y is returned. If a < 0 or a > 1, this function will
 * extrapolate.
 */
pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x + a * (y - x)
}

/**
 * Determines whether a number is zero, within a small epsilon.
 */
pub fn is_nearly_zero(x: f64) -> bool {
    f64::abs(x) < f64::EPSILON
}

/**
 * Determines whether two numbers are equal, within a given tolerance.
 */
pub fn is_close(x: f64, y: f64, tolerance: f64) -> bool {
    f64::abs(x - y) <= tolerance
}

pub fn row_col(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

pub fn index(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp_unit(0.5), 0.5);
    }

    #[test]
    fn lerp_maps_unit_interval_to_window() {
        assert_eq!(lerp(-1.0, 1.0, 0.0), -1.0);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
        assert_eq!(lerp(-1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn row_col_inverts_index() {
        let width = 7;
        for i in 0..49 {
            let (row, col) = row_col(i, width);
            assert_eq!(index(row, col, width), i);
        }
    }
}
