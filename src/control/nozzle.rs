use crate::config::{EngineConstants, NozzleModel};

/// How the exit diameter is chosen for a given chamber pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiameterPolicy {
    /// Fixed-geometry nozzle.
    Constant { diameter: f64 },
    /// Variable-geometry nozzle driven by [`map_exit_diameter`].
    PressureDependent,
}

impl DiameterPolicy {
    pub fn from_model(model: NozzleModel, fixed_diameter: f64) -> Self {
        match model {
            NozzleModel::Fixed => DiameterPolicy::Constant {
                diameter: fixed_diameter,
            },
            NozzleModel::Variable => DiameterPolicy::PressureDependent,
        }
    }

    pub fn exit_diameter(&self, chamber_pressure: f64, constants: &EngineConstants) -> f64 {
        match *self {
            DiameterPolicy::Constant { diameter } => diameter,
            DiameterPolicy::PressureDependent => map_exit_diameter(chamber_pressure, constants),
        }
    }

    pub fn model(&self) -> NozzleModel {
        match self {
            DiameterPolicy::Constant { .. } => NozzleModel::Fixed,
            DiameterPolicy::PressureDependent => NozzleModel::Variable,
        }
    }
}

/// Linear map from chamber pressure to exit diameter.
///
/// The setpoint maps to `exit_diameter_min` and twice the setpoint to
/// `exit_diameter_max`. The result is NOT clamped: pressures outside that
/// range extrapolate past the bounds, and low enough pressures give a zero or
/// negative diameter.
pub fn map_exit_diameter(chamber_pressure: f64, constants: &EngineConstants) -> f64 {
    let setpoint = constants.chamber_pressure_setpoint;
    let pressure_ratio = (chamber_pressure - setpoint) / setpoint;
    constants.exit_diameter_min
        + pressure_ratio * (constants.exit_diameter_max - constants.exit_diameter_min)
}
