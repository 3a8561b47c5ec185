/// Axis-aligned bounding box over a set of vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of a set of points
    ///
    /// Returns `None` for an empty set, or when the extent in either axis is
    /// not a finite number (non-finite coordinates, or a span past f64::MAX).
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for &(x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                return None;
            }
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let bounds = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        (bounds.width().is_finite() && bounds.height().is_finite()).then_some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether a point lies inside the box, edges included
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![(0.0, 0.0), (1000.0, 2000.0), (500.0, 1000.0)];
        let bounds = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 1000.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2000.0);
        assert_eq!(bounds.width(), 1000.0);
        assert_eq!(bounds.height(), 2000.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_reject_non_finite_extent() {
        assert!(BoundingBox::from_points(&[(-1e308, 0.0), (1e308, 1.0)]).is_none());
        assert!(BoundingBox::from_points(&[(0.0, f64::INFINITY), (1.0, 1.0)]).is_none());
        assert!(BoundingBox::from_points(&[(0.0, f64::NAN), (1.0, 1.0)]).is_none());
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = BoundingBox::from_points(&[(-1.0, -1.0), (1.0, 1.0)]).unwrap();
        assert!(bounds.contains(1.0, -1.0));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(1.0001, 0.0));
    }
}
