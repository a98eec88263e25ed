use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    BURN_RATE, BURN_TIME, CHAMBER_PRESSURE, COMBUSTION_EFFICIENCY, EXIT_DIAMETER,
    EXIT_DIAMETER_MAX, EXIT_DIAMETER_MIN, GAMMA, GAS_CONSTANT, GRAVITY, MAX_BURN_TIME,
    MOLAR_MASS_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, THROAT_DIAMETER,
};
use crate::errors::{Result, SimulationError};

/// Physical and engine constants shared read-only by every component.
///
/// Built once at startup (from defaults or a TOML file) and handed around by
/// reference. `combustion_efficiency` and `molar_mass_air` are carried for
/// completeness but no formula consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConstants {
    pub gravity: f64,
    pub gas_constant: f64,
    pub sea_level_pressure: f64,
    pub sea_level_temperature: f64,
    pub throat_diameter: f64,
    pub burn_rate: f64,
    pub chamber_pressure_setpoint: f64,
    pub burn_time: f64,
    pub gamma: f64,
    pub combustion_efficiency: f64,
    pub molar_mass_air: f64,
    pub exit_diameter_min: f64,
    pub exit_diameter_max: f64,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            gravity: GRAVITY,
            gas_constant: GAS_CONSTANT,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            sea_level_temperature: SEA_LEVEL_TEMPERATURE,
            throat_diameter: THROAT_DIAMETER,
            burn_rate: BURN_RATE,
            chamber_pressure_setpoint: CHAMBER_PRESSURE,
            burn_time: BURN_TIME,
            gamma: GAMMA,
            combustion_efficiency: COMBUSTION_EFFICIENCY,
            molar_mass_air: MOLAR_MASS_AIR,
            exit_diameter_min: EXIT_DIAMETER_MIN,
            exit_diameter_max: EXIT_DIAMETER_MAX,
        }
    }
}

impl EngineConstants {
    /// Rejects values that would otherwise divide by zero or feed an
    /// undiagnosable NaN into the first step.
    pub fn validate(&self) -> Result<()> {
        require_positive("gravity", self.gravity)?;
        require_positive("gas_constant", self.gas_constant)?;
        require_positive("sea_level_pressure", self.sea_level_pressure)?;
        require_positive("sea_level_temperature", self.sea_level_temperature)?;
        require_positive("throat_diameter", self.throat_diameter)?;
        require_positive("chamber_pressure_setpoint", self.chamber_pressure_setpoint)?;
        require_positive("exit_diameter_min", self.exit_diameter_min)?;
        require_positive("exit_diameter_max", self.exit_diameter_max)?;
        validate_burn_time(self.burn_time)?;

        if !self.burn_rate.is_finite() || self.burn_rate < 0.0 {
            return Err(SimulationError::invalid(
                "burn_rate",
                self.burn_rate,
                "must be finite and non-negative",
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(SimulationError::invalid(
                "gamma",
                self.gamma,
                "must be finite and greater than 1",
            ));
        }
        if self.exit_diameter_max < self.exit_diameter_min {
            return Err(SimulationError::invalid(
                "exit_diameter_max",
                self.exit_diameter_max,
                "must not be smaller than exit_diameter_min",
            ));
        }

        Ok(())
    }

    /// Isentropic exponent (γ − 1) / γ used by the exit-state relations.
    pub fn isentropic_exponent(&self) -> f64 {
        (self.gamma - 1.0) / self.gamma
    }
}

pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(
            parameter,
            value,
            "must be finite and greater than zero",
        ))
    }
}

pub(crate) fn validate_burn_time(burn_time: f64) -> Result<()> {
    if !burn_time.is_finite() || burn_time < 0.0 {
        return Err(SimulationError::invalid(
            "burn_time",
            burn_time,
            "must be finite and non-negative",
        ));
    }
    if burn_time > MAX_BURN_TIME {
        return Err(SimulationError::invalid(
            "burn_time",
            burn_time,
            "exceeds the maximum simulated burn time",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NozzleModel {
    /// Exit diameter stays at `RunParameters::exit_diameter`.
    #[default]
    Fixed,
    /// Exit diameter follows chamber pressure between the configured bounds.
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunParameters {
    pub nozzle: NozzleModel,
    pub exit_diameter: f64,
    pub initial_pressure: Option<f64>,
    pub burn_time: Option<f64>,
}

impl Default for RunParameters {
    fn default() -> Self {
        RunParameters {
            nozzle: NozzleModel::Fixed,
            exit_diameter: EXIT_DIAMETER,
            initial_pressure: None,
            burn_time: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub engine: EngineConstants,
    pub run: RunParameters,
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Starting chamber pressure; the setpoint unless overridden.
    pub fn initial_pressure(&self) -> f64 {
        self.run
            .initial_pressure
            .unwrap_or(self.engine.chamber_pressure_setpoint)
    }

    pub fn burn_time(&self) -> f64 {
        self.run.burn_time.unwrap_or(self.engine.burn_time)
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        require_positive("initial_pressure", self.initial_pressure())?;
        validate_burn_time(self.burn_time())?;
        if self.run.nozzle == NozzleModel::Fixed {
            require_positive("exit_diameter", self.run.exit_diameter)?;
        }
        Ok(())
    }
}
