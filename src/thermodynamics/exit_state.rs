use crate::config::EngineConstants;

/// Gas conditions at the nozzle exit plane for a given chamber pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitState {
    pub pressure: f64,
    pub temperature: f64,
    pub velocity: f64,
}

/// Exit pressure from the fixed expansion ratio 1 + (γ − 1) / 2.
///
/// Geometry does not enter; the ratio is the same for every nozzle.
pub fn exit_pressure(chamber_pressure: f64, constants: &EngineConstants) -> f64 {
    chamber_pressure / (1.0 + (constants.gamma - 1.0) / 2.0)
}

/// Full isentropic exit state.
///
/// No domain guards: a non-positive chamber pressure yields NaN through the
/// fractional powers and the square root, and that NaN is the fault signal
/// the stepper records.
pub fn exit_state(chamber_pressure: f64, constants: &EngineConstants) -> ExitState {
    let exponent = constants.isentropic_exponent();
    let pressure = exit_pressure(chamber_pressure, constants);
    let temperature = constants.sea_level_temperature
        * (pressure / constants.sea_level_pressure).powf(exponent);
    let velocity = (2.0
        * constants.gamma
        * constants.gas_constant
        * temperature
        * (1.0 - (pressure / chamber_pressure).powf(exponent)))
    .sqrt();

    ExitState {
        pressure,
        temperature,
        velocity,
    }
}

/// Exhaust velocity at the exit plane.
///
/// `_exit_diameter` is accepted so both nozzle models share one signature,
/// but the velocity depends on chamber pressure alone.
pub fn exit_velocity(
    chamber_pressure: f64,
    _exit_diameter: f64,
    constants: &EngineConstants,
) -> f64 {
    exit_state(chamber_pressure, constants).velocity
}
