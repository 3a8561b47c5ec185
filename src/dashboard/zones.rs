use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::{Zone, ZoneSpec};
use crate::error::{DashboardError, Result};
use crate::geometry::ZonePolygon;

/// Draw a random polygon for each zone spec, in order
///
/// Vertices are drawn x then y, each from Normal(center, spread). Zones
/// with more than three vertices are ordered by angle around their mean so
/// the ring does not cross itself.
pub fn generate_zones<R: Rng + ?Sized>(specs: &[ZoneSpec], rng: &mut R) -> Result<Vec<Zone>> {
    specs
        .iter()
        .enumerate()
        .map(|(color_index, spec)| {
            let vertices = draw_vertices(spec, rng)?;
            let polygon = ZonePolygon::new(vertices)?;
            Ok(Zone::new(spec.name.clone(), polygon, color_index))
        })
        .collect()
}

fn draw_vertices<R: Rng + ?Sized>(spec: &ZoneSpec, rng: &mut R) -> Result<Vec<(f64, f64)>> {
    if !spec.spread.is_finite() || spec.spread <= 0.0 {
        return Err(DashboardError::InvalidZone(format!(
            "zone '{}' has non-positive spread {}",
            spec.name, spec.spread
        )));
    }
    if spec.vertex_count < 3 {
        return Err(DashboardError::DegeneratePolygon(format!(
            "zone '{}' asks for {} vertices",
            spec.name, spec.vertex_count
        )));
    }

    let (cx, cy) = spec.center;
    let x_dist = Normal::new(cx, spec.spread)
        .map_err(|e| DashboardError::InvalidZone(format!("zone '{}': {}", spec.name, e)))?;
    let y_dist = Normal::new(cy, spec.spread)
        .map_err(|e| DashboardError::InvalidZone(format!("zone '{}': {}", spec.name, e)))?;

    let mut vertices: Vec<(f64, f64)> = (0..spec.vertex_count)
        .map(|_| (x_dist.sample(rng), y_dist.sample(rng)))
        .collect();

    if vertices.len() > 3 {
        sort_by_angle(&mut vertices);
    }

    Ok(vertices)
}

fn sort_by_angle(vertices: &mut [(f64, f64)]) {
    let n = vertices.len() as f64;
    let mx = vertices.iter().map(|v| v.0).sum::<f64>() / n;
    let my = vertices.iter().map(|v| v.1).sum::<f64>() / n;

    let angle = |&(x, y): &(f64, f64)| (y - my).atan2(x - mx).rem_euclid(2.0 * PI);
    vertices.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_default_zones() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let zones = generate_zones(&ZoneSpec::defaults(), &mut rng).unwrap();

        assert_eq!(zones.len(), 3);
        for (i, zone) in zones.iter().enumerate() {
            assert_eq!(zone.color_index, i);
            assert_eq!(zone.polygon.vertices().len(), 3);
            assert!(zone.polygon.area() > 0.0);
        }
        assert_eq!(zones[0].name, "Work zone");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let specs = ZoneSpec::defaults();
        let a = generate_zones(&specs, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = generate_zones(&specs, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();

        for (za, zb) in a.iter().zip(&b) {
            assert_eq!(za.polygon.vertices(), zb.polygon.vertices());
        }
    }

    #[test]
    fn test_many_vertices_form_simple_ring() {
        let spec = ZoneSpec {
            vertex_count: 8,
            ..ZoneSpec::new("octo", (0.0, 0.0))
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let zones = generate_zones(&[spec], &mut rng).unwrap();
        let vertices = zones[0].polygon.vertices();

        let mx = vertices.iter().map(|v| v.0).sum::<f64>() / 8.0;
        let my = vertices.iter().map(|v| v.1).sum::<f64>() / 8.0;
        let angles: Vec<f64> = vertices
            .iter()
            .map(|&(x, y)| (y - my).atan2(x - mx).rem_euclid(2.0 * PI))
            .collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_too_few_vertices() {
        let spec = ZoneSpec {
            vertex_count: 2,
            ..ZoneSpec::new("line", (0.0, 0.0))
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let err = generate_zones(&[spec], &mut rng).unwrap_err();
        assert!(matches!(err, DashboardError::DegeneratePolygon(_)));
    }

    #[test]
    fn test_invalid_spread() {
        for spread in [0.0, -1.0, f64::NAN] {
            let spec = ZoneSpec {
                spread,
                ..ZoneSpec::new("bad", (0.0, 0.0))
            };
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let err = generate_zones(&[spec], &mut rng).unwrap_err();
            assert!(matches!(err, DashboardError::InvalidZone(_)));
        }
    }
}
