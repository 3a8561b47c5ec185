use serde::Serialize;

use crate::domain::{Parameter, SamplePoint, SeriesBundle, TimeWindow, Zone};

/// One movement trace per flag position
pub const MOVEMENT_TRACE_COUNT: usize = 4;

/// Everything a chart layer needs to draw the mine dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub parameter: Parameter,
    pub window: WindowEcho,
    pub titles: PanelTitles,
    /// Hover label for zone readings, e.g. "oxygen: %"
    pub value_label: String,
    pub zone_panel: Vec<ZonePanel>,
    pub average_panel: Vec<LineTrace<f64>>,
    pub movement_panel: Vec<LineTrace<bool>>,
}

/// The requested window as typed by the user and as parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowEcho {
    pub start_time: String,
    pub end_time: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelTitles {
    pub zones: String,
    pub average: String,
    pub movement: String,
}

impl PanelTitles {
    pub fn for_parameter(parameter: Parameter) -> Self {
        Self {
            zones: format!("{} readings across mine zones", parameter.title()),
            average: format!("Average {} level", parameter.label()),
            movement: "Rock movement in the mine".to_string(),
        }
    }
}

/// Zone outline plus the readings accepted inside it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonePanel {
    pub name: String,
    pub color_index: usize,
    pub outline: Vec<(f64, f64)>,
    pub points: Vec<SamplePoint>,
}

/// A named date-indexed line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace<T> {
    pub name: String,
    pub dates: Vec<String>,
    pub values: Vec<T>,
}

/// Shape a series bundle into the three dashboard panels
pub fn shape_payload(
    parameter: Parameter,
    window: WindowEcho,
    zones: &[Zone],
    bundle: SeriesBundle,
) -> DashboardPayload {
    let average_panel = bundle
        .zones
        .iter()
        .map(|series| LineTrace {
            name: series.name.clone(),
            dates: series.points.iter().map(|p| p.date.clone()).collect(),
            values: series.points.iter().map(|p| p.value).collect(),
        })
        .collect();

    let dates: Vec<String> = bundle.movement.iter().map(|m| m.date.clone()).collect();
    let movement_panel = (0..MOVEMENT_TRACE_COUNT)
        .map(|i| LineTrace {
            name: format!("Movement {}", i + 1),
            dates: dates.clone(),
            values: bundle.movement.iter().map(|m| m.flags[i]).collect(),
        })
        .collect();

    let zone_panel = zones
        .iter()
        .zip(bundle.zones)
        .map(|(zone, series)| ZonePanel {
            name: series.name,
            color_index: series.color_index,
            outline: zone.polygon.vertices().to_vec(),
            points: series.points,
        })
        .collect();

    DashboardPayload {
        parameter,
        window,
        titles: PanelTitles::for_parameter(parameter),
        value_label: format!("{}: %", parameter.label()),
        zone_panel,
        average_panel,
        movement_panel,
    }
}

impl WindowEcho {
    pub fn new(start_time: &str, end_time: &str, window: &TimeWindow) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            start: window.start,
            end: window.end,
        }
    }
}
