//! minedash - Synthetic mine-sensor dashboard data and text sentiment scoring

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod scoring;

pub use error::{DashboardError, ScoringError};
