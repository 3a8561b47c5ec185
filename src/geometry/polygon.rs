use geo::{Area, Intersects, LineString, Polygon, coord};

use super::BoundingBox;
use crate::error::{DashboardError, Result};

/// Polygons with less area than this are treated as collinear
const MIN_POLYGON_AREA: f64 = 1e-12;

/// A validated, immutable zone boundary
///
/// Construction guarantees at least three finite vertices enclosing a
/// finite, non-zero area, so the bounding box always has positive, finite
/// width and height.
#[derive(Debug, Clone)]
pub struct ZonePolygon {
    vertices: Vec<(f64, f64)>,
    polygon: Polygon<f64>,
    bounds: BoundingBox,
}

impl ZonePolygon {
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(DashboardError::DegeneratePolygon(format!(
                "need at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        if vertices.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(DashboardError::DegeneratePolygon(
                "vertices must have finite coordinates".to_string(),
            ));
        }

        let bounds = BoundingBox::from_points(&vertices).ok_or_else(|| {
            DashboardError::DegeneratePolygon("polygon extent overflows f64".to_string())
        })?;

        let polygon = Polygon::new(LineString::from(vertices.clone()), vec![]);
        let area = polygon.unsigned_area();
        if !area.is_finite() {
            return Err(DashboardError::DegeneratePolygon(format!(
                "polygon area is not finite ({})",
                area
            )));
        }
        if area < MIN_POLYGON_AREA {
            return Err(DashboardError::DegeneratePolygon(format!(
                "polygon encloses no area ({:e})",
                area
            )));
        }

        Ok(Self {
            vertices,
            polygon,
            bounds,
        })
    }

    /// Vertices in the order they were supplied (ring not closed)
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn area(&self) -> f64 {
        self.polygon.unsigned_area()
    }

    /// Point-in-polygon test; points on the boundary count as inside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y) && self.polygon.intersects(&coord! { x: x, y: y })
    }
}
