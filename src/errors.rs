use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Domain fault at t = {time} s: chamber pressure became {chamber_pressure} Pa")]
    DomainFault { time: f64, chamber_pressure: f64 },

    #[error("Failed to read configuration file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl SimulationError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidConfiguration {
            parameter,
            value,
            reason,
        }
    }
}
