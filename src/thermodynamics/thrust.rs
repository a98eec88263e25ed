use crate::config::EngineConstants;
use crate::utils::geometry::circle_area;

use super::exit_state::{exit_pressure, exit_velocity};

/// Thrust from the simplified pressure-area model.
///
/// The algebra is kept exactly as the engine model defines it:
/// `A_t·(p_c·A_e − p_e·A_t) + A_e·p_e·(d_e / 2)`. It is not a textbook thrust
/// equation and is not dimensionally consistent.
pub fn thrust(chamber_pressure: f64, exit_diameter: f64, constants: &EngineConstants) -> f64 {
    // Part of the exit state; the sum below does not use it.
    let _exit_velocity = exit_velocity(chamber_pressure, exit_diameter, constants);
    let throat_area = circle_area(constants.throat_diameter);
    let exit_area = circle_area(exit_diameter);
    let exit_pressure = exit_pressure(chamber_pressure, constants);

    throat_area * (chamber_pressure * exit_area - exit_pressure * throat_area)
        + exit_area * exit_pressure * (exit_diameter / 2.0)
}
