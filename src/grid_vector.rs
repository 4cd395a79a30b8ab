use grid_util::point::Point;

/// An integer coordinate (or offset) on the routing grid. The y axis grows downward on the
/// rendered board.
pub type GridVector = Point;

/// Cosine of the angle between two vectors. Zero-length input yields `-1.0`, which no real
/// pair of directions can score below.
pub fn cosine_similarity(a: &GridVector, b: &GridVector) -> f64 {
    let la = (a.x as f64).hypot(a.y as f64);
    let lb = (b.x as f64).hypot(b.y as f64);
    if la == 0.0 || lb == 0.0 {
        return -1.0;
    }
    (a.x as f64 * b.x as f64 + a.y as f64 * b.y as f64) / (la * lb)
}

/// Euclidean distance between two cells.
pub fn distance(a: &GridVector, b: &GridVector) -> f64 {
    a.euclidean_distance(b) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_similarity_of_compass_steps() {
        let e = GridVector::new(1, 0);
        let ne = GridVector::new(1, -1);
        let w = GridVector::new(-1, 0);
        assert!((cosine_similarity(&e, &e) - 1.0).abs() < 1e-9);
        assert!((cosine_similarity(&e, &ne) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((cosine_similarity(&e, &w) + 1.0).abs() < 1e-9);
    }

    /// A zero vector must never beat a real direction.
    #[test]
    fn cosine_similarity_sentinel() {
        let e = GridVector::new(1, 0);
        let zero = GridVector::new(0, 0);
        assert_eq!(cosine_similarity(&zero, &e), -1.0);
        assert_eq!(cosine_similarity(&e, &zero), -1.0);
    }

    #[test]
    fn distance_between_cells() {
        let a = GridVector::new(2, 3);
        assert_eq!(distance(&a, &GridVector::new(5, 7)), 5.0);
        assert_eq!(distance(&a, &a), 0.0);
    }
}
