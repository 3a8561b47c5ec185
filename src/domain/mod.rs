pub mod parameter;
pub mod series;
pub mod window;
pub mod zone;

pub use parameter::Parameter;
pub use series::{MovementSample, SamplePoint, SeriesBundle, ZoneSeries};
pub use window::{TimeWindow, format_date, parse_timestamp};
pub use zone::{Zone, ZoneSpec};
