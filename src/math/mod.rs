/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Squared Euclidean distance between two points.
#[must_use]
pub fn distance_squared(a: &Point3, b: &Point3) -> f64 {
    (a - b).norm_squared()
}

/// Average position of a triangle's three corners.
#[must_use]
pub fn centroid(corners: &[Point3; 3]) -> Point3 {
    Point3::from((corners[0].coords + corners[1].coords + corners[2].coords) / 3.0)
}

/// Returns `true` if every coordinate of the point is finite.
#[must_use]
pub fn is_finite(point: &Point3) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_is_corner_average() {
        let c = centroid(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 3.0),
        ]);
        assert_relative_eq!(c, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn distance_squared_skips_sqrt() {
        let d = distance_squared(&Point3::new(1.0, 2.0, 2.0), &Point3::origin());
        assert_relative_eq!(d, 9.0);
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(is_finite(&Point3::new(1.0, -2.0, 0.5)));
        assert!(!is_finite(&Point3::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite(&Point3::new(0.0, f64::INFINITY, 0.0)));
    }
}
