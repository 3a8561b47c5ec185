use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{
    MovementSample, SamplePoint, SeriesBundle, TimeWindow, Zone, ZoneSeries, format_date,
};
use crate::error::{DashboardError, Result};
use crate::geometry::sample;

/// First tick of the synthetic time axis (2018-09-19T00:59:47Z)
pub const DEFAULT_BASE_TIMESTAMP: i64 = 1_537_318_787;
/// Seconds between ticks
pub const DEFAULT_TICK_INTERVAL_SECS: i64 = 1_000_000;
pub const DEFAULT_TICK_COUNT: usize = 100;
pub const DEFAULT_MAX_ATTEMPTS_PER_TICK: usize = 1000;

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}
fn default_base_timestamp() -> i64 {
    DEFAULT_BASE_TIMESTAMP
}
fn default_tick_interval_secs() -> i64 {
    DEFAULT_TICK_INTERVAL_SECS
}
fn default_max_attempts_per_tick() -> usize {
    DEFAULT_MAX_ATTEMPTS_PER_TICK
}

/// Synthetic time axis and acceptance policy for a series build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeriesConfig {
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_base_timestamp")]
    pub base_timestamp: i64,
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: i64,
    /// Redraw a tick's candidate until it lands inside the zone
    #[serde(default)]
    pub retry_until_accepted: bool,
    /// Upper bound on redraws when `retry_until_accepted` is set
    #[serde(default = "default_max_attempts_per_tick")]
    pub max_attempts_per_tick: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            base_timestamp: DEFAULT_BASE_TIMESTAMP,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            retry_until_accepted: false,
            max_attempts_per_tick: DEFAULT_MAX_ATTEMPTS_PER_TICK,
        }
    }
}

impl SeriesConfig {
    /// Timestamp of a tick, or an error if it overflows i64
    pub fn tick_timestamp(&self, index: usize) -> Result<i64> {
        i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(self.tick_interval_secs))
            .and_then(|offset| self.base_timestamp.checked_add(offset))
            .ok_or(DashboardError::TimestampOutOfRange(self.base_timestamp))
    }

    /// Timestamp of a tick if it falls inside the window
    ///
    /// A tick whose timestamp overflows i64 lies past any window.
    pub fn windowed_timestamp(&self, index: usize, window: &TimeWindow) -> Option<i64> {
        self.tick_timestamp(index)
            .ok()
            .filter(|&timestamp| window.contains(timestamp))
    }

    /// Number of ticks whose timestamp falls inside the window
    pub fn ticks_in_window(&self, window: &TimeWindow) -> usize {
        (0..self.tick_count)
            .filter(|&index| self.windowed_timestamp(index, window).is_some())
            .count()
    }
}

/// Build per-zone sample series and the movement series for a window
///
/// Every tick consumes a candidate draw per zone whether or not it is inside
/// the window, so the random stream does not depend on the window. Movement
/// flags are drawn after all zones, only for ticks inside the window.
pub fn build<R: Rng + ?Sized>(
    zones: &[Zone],
    window: &TimeWindow,
    config: &SeriesConfig,
    rng: &mut R,
) -> Result<SeriesBundle> {
    let mut seen = HashSet::new();
    for zone in zones {
        if !seen.insert(zone.name.as_str()) {
            return Err(DashboardError::DuplicateZone(zone.name.clone()));
        }
    }

    let mut series = Vec::with_capacity(zones.len());
    for zone in zones {
        let points = build_zone_series(zone, window, config, rng)?;
        debug!(
            "Zone '{}': accepted {} of {} ticks",
            zone.name,
            points.len(),
            config.tick_count
        );
        series.push(ZoneSeries {
            name: zone.name.clone(),
            color_index: zone.color_index,
            points,
        });
    }

    let movement = build_movement_series(window, config, rng)?;
    debug!("Movement series: {} samples", movement.len());

    Ok(SeriesBundle {
        zones: series,
        movement,
    })
}

fn build_zone_series<R: Rng + ?Sized>(
    zone: &Zone,
    window: &TimeWindow,
    config: &SeriesConfig,
    rng: &mut R,
) -> Result<Vec<SamplePoint>> {
    let mut points = Vec::new();

    for index in 0..config.tick_count {
        let Some((x, y)) = draw_candidate(zone, config, rng) else {
            if config.retry_until_accepted {
                warn!(
                    "Zone '{}': no point accepted at tick {} after {} attempts",
                    zone.name, index, config.max_attempts_per_tick
                );
            }
            continue;
        };

        let Some(timestamp) = config.windowed_timestamp(index, window) else {
            continue;
        };

        points.push(SamplePoint {
            x,
            y,
            value: SamplePoint::derived_value(x, y),
            timestamp,
            date: format_date(timestamp)?,
        });
    }

    Ok(points)
}

/// Draw one candidate (or several, in retry mode) and return it if contained
fn draw_candidate<R: Rng + ?Sized>(
    zone: &Zone,
    config: &SeriesConfig,
    rng: &mut R,
) -> Option<(f64, f64)> {
    let attempts = if config.retry_until_accepted {
        config.max_attempts_per_tick.max(1)
    } else {
        1
    };

    (0..attempts)
        .map(|_| sample(&zone.polygon, rng))
        .find(|&(x, y)| zone.polygon.contains(x, y))
}

fn build_movement_series<R: Rng + ?Sized>(
    window: &TimeWindow,
    config: &SeriesConfig,
    rng: &mut R,
) -> Result<Vec<MovementSample>> {
    let mut movement = Vec::new();

    for index in 0..config.tick_count {
        let Some(timestamp) = config.windowed_timestamp(index, window) else {
            continue;
        };

        let flags = [
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
        ];
        movement.push(MovementSample {
            timestamp,
            date: format_date(timestamp)?,
            flags,
        });
    }

    Ok(movement)
}
