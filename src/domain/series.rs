use serde::Serialize;

/// A sensor-like reading accepted inside a zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    /// Reading derived from position: x/100 + y/100
    pub value: f64,
    /// Tick timestamp in epoch seconds
    pub timestamp: i64,
    /// Tick date as YYYY-MM-DD
    pub date: String,
}

impl SamplePoint {
    pub fn derived_value(x: f64, y: f64) -> f64 {
        x / 100.0 + y / 100.0
    }
}

/// Rock movement flags for one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementSample {
    pub timestamp: i64,
    pub date: String,
    pub flags: [bool; 4],
}

/// Accepted samples for one zone, in tick order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSeries {
    pub name: String,
    pub color_index: usize,
    pub points: Vec<SamplePoint>,
}

/// Output of a series build: one series per zone plus the movement series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesBundle {
    pub zones: Vec<ZoneSeries>,
    pub movement: Vec<MovementSample>,
}

impl SeriesBundle {
    /// Look up a zone's samples by name
    pub fn series_for(&self, name: &str) -> Option<&[SamplePoint]> {
        self.zones
            .iter()
            .find(|z| z.name == name)
            .map(|z| z.points.as_slice())
    }
}
