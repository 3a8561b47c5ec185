use serde::{Deserialize, Serialize};

use crate::geometry::ZonePolygon;

fn default_vertex_count() -> usize {
    3
}

fn default_spread() -> f64 {
    0.7
}

/// Recipe for a randomly shaped zone
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ZoneSpec {
    pub name: String,
    /// Mean of the vertex distribution as (x, y)
    pub center: (f64, f64),
    #[serde(default = "default_vertex_count")]
    pub vertex_count: usize,
    /// Standard deviation of each vertex coordinate
    #[serde(default = "default_spread")]
    pub spread: f64,
}

impl ZoneSpec {
    pub fn new(name: impl Into<String>, center: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            center,
            vertex_count: default_vertex_count(),
            spread: default_spread(),
        }
    }

    /// The three zones shown on the mine dashboard
    pub fn defaults() -> Vec<ZoneSpec> {
        vec![
            ZoneSpec::new("Work zone", (-1.0, -1.0)),
            ZoneSpec::new("Strata movement zone", (0.0, 0.0)),
            ZoneSpec::new("Fracture zone", (1.0, 1.0)),
        ]
    }
}

/// A named sampling region
#[derive(Debug, Clone)]
pub struct Zone {
    pub name: String,
    pub polygon: ZonePolygon,
    pub color_index: usize,
}

impl Zone {
    pub fn new(name: impl Into<String>, polygon: ZonePolygon, color_index: usize) -> Self {
        Self {
            name: name.into(),
            polygon,
            color_index,
        }
    }
}
