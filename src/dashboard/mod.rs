//! Synthetic mine dashboard: zone generation, windowed series and panel shaping

pub mod builder;
pub mod payload;
pub mod zones;

pub use builder::{SeriesConfig, build};
pub use payload::{DashboardPayload, LineTrace, PanelTitles, WindowEcho, ZonePanel};
pub use zones::generate_zones;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{Parameter, TimeWindow, ZoneSpec};
use crate::error::Result;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_START_TIME: &str = "2018-09-22T08:54";
pub const DEFAULT_END_TIME: &str = "2021-11-22T09:02";

/// Inputs for one dashboard build
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub start_time: String,
    pub end_time: String,
    pub parameter: Parameter,
    pub seed: u64,
    pub zones: Vec<ZoneSpec>,
    pub series: SeriesConfig,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            parameter: Parameter::default(),
            seed: DEFAULT_SEED,
            zones: ZoneSpec::defaults(),
            series: SeriesConfig::default(),
        }
    }
}

/// Generate the full dashboard payload for a request
///
/// Each call owns its random source, seeded from `request.seed`, so
/// concurrent builds never share state and identical requests give
/// identical payloads.
pub fn generate(request: &DashboardRequest) -> Result<DashboardPayload> {
    let window = TimeWindow::parse(&request.start_time, &request.end_time)?;
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);

    let zones = generate_zones(&request.zones, &mut rng)?;
    let bundle = build(&zones, &window, &request.series, &mut rng)?;

    let accepted: usize = bundle.zones.iter().map(|z| z.points.len()).sum();
    info!(
        "Dashboard for {} ({} .. {}): {} zones, {} readings, {} movement ticks",
        request.parameter.label(),
        request.start_time,
        request.end_time,
        zones.len(),
        accepted,
        bundle.movement.len()
    );

    let echo = WindowEcho::new(&request.start_time, &request.end_time, &window);
    Ok(payload::shape_payload(request.parameter, echo, &zones, bundle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_default_dashboard() {
        let payload = generate(&DashboardRequest::default()).unwrap();

        assert_eq!(payload.zone_panel.len(), 3);
        assert_eq!(payload.average_panel.len(), 3);
        assert_eq!(payload.movement_panel.len(), 4);
        assert_eq!(payload.movement_panel[3].name, "Movement 4");
        assert_eq!(payload.titles.average, "Average oxygen level");
        assert_eq!(payload.value_label, "oxygen: %");

        // 2018-09-22T08:54 .. 2021-11-22T09:02 covers every tick but the first
        let expected_ticks = DashboardRequest::default()
            .series
            .ticks_in_window(&TimeWindow::new(payload.window.start, payload.window.end).unwrap());
        assert_eq!(expected_ticks, 99);
        for trace in &payload.movement_panel {
            assert_eq!(trace.values.len(), expected_ticks);
            assert_eq!(trace.dates.len(), expected_ticks);
        }
    }

    #[test]
    fn test_panels_agree() {
        let payload = generate(&DashboardRequest::default()).unwrap();

        for (zone, line) in payload.zone_panel.iter().zip(&payload.average_panel) {
            assert_eq!(zone.name, line.name);
            assert_eq!(zone.outline.len(), 3);
            let values: Vec<f64> = zone.points.iter().map(|p| p.value).collect();
            assert_eq!(values, line.values);
        }
    }

    #[test]
    fn test_same_seed_same_payload() {
        let request = DashboardRequest {
            parameter: Parameter::Methane,
            ..DashboardRequest::default()
        };
        let a = serde_json::to_string(&generate(&request).unwrap()).unwrap();
        let b = serde_json::to_string(&generate(&request).unwrap()).unwrap();
        assert_eq!(a, b);

        let reseeded = DashboardRequest {
            seed: 43,
            ..request.clone()
        };
        let c = serde_json::to_string(&generate(&reseeded).unwrap()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_bad_window_is_reported() {
        let request = DashboardRequest {
            start_time: "2021-04-22 08:54".to_string(),
            ..DashboardRequest::default()
        };
        assert!(matches!(
            generate(&request),
            Err(DashboardError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_huge_spread_is_rejected() {
        let request = DashboardRequest {
            zones: vec![ZoneSpec {
                spread: 1e308,
                ..ZoneSpec::new("Runaway", (0.0, 0.0))
            }],
            ..DashboardRequest::default()
        };
        assert!(matches!(
            generate(&request),
            Err(DashboardError::DegeneratePolygon(_))
        ));
    }

    #[test]
    fn test_payload_serializes_to_json() {
        let payload = generate(&DashboardRequest::default()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["parameter"], "oxygen");
        assert_eq!(value["window"]["start_time"], DEFAULT_START_TIME);
        assert!(value["zone_panel"][0]["outline"][0].is_array());
        assert!(value["movement_panel"][0]["values"][0].is_boolean());
    }
}
