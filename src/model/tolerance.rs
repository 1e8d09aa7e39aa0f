use approx::relative_eq;

/// `isclose` with a purely relative tolerance: `|a - b| <= tolerance * max(|a|, |b|)`.
pub fn is_close(a: f64, b: f64, tolerance: f64) -> bool {
    relative_eq!(a, b, epsilon = 0.0, max_relative = tolerance)
}

/// Acts like floor, but rounds up if `x` is within tolerance of the next integer.
/// A true answer of 42 that arrives as 41.9999999997 stays 42.
pub fn floor_with_tolerance(x: f64, tolerance: f64) -> f64 {
    let ceiling = x.ceil();
    if is_close(x, ceiling, tolerance) {
        return ceiling;
    }

    x.floor()
}
