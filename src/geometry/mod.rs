pub mod bounds;
pub mod polygon;
pub mod sampler;

pub use bounds::BoundingBox;
pub use polygon::ZonePolygon;
pub use sampler::sample;
