use serde::{Deserialize, Serialize};

/// Measured quantity shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    #[default]
    Oxygen,
    Humidity,
    Methane,
}

impl Parameter {
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Oxygen => "oxygen",
            Parameter::Humidity => "humidity",
            Parameter::Methane => "methane",
        }
    }

    /// Label with the first letter capitalised, for titles
    pub fn title(&self) -> &'static str {
        match self {
            Parameter::Oxygen => "Oxygen",
            Parameter::Humidity => "Humidity",
            Parameter::Methane => "Methane",
        }
    }
}
