use std::fmt;

use crate::config::{EngineConstants, NozzleModel};
use crate::control::engine::RocketEngine;
use crate::control::nozzle::DiameterPolicy;
use crate::control::trace::{EngineRun, SimulationTrace};
use crate::errors::Result;

/// Exit velocity expressed in seconds of standard gravity.
pub fn specific_impulse(exit_velocity: f64, constants: &EngineConstants) -> f64 {
    exit_velocity / constants.gravity
}

/// Σ thrust(p) · t over the trace.
///
/// Each entry is weighted by its absolute elapsed time, not by the step
/// length, so the first entry (t = 0) contributes nothing.
pub fn total_impulse(engine: &RocketEngine<'_>, trace: &SimulationTrace) -> f64 {
    trace
        .iter()
        .map(|point| engine.thrust_at(point.chamber_pressure) * point.time)
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    pub total_impulse: f64,
    pub specific_impulse: f64,
    pub chamber_pressure: f64,
    pub exit_diameter: f64,
    pub exit_velocity: f64,
    pub burn_time: f64,
    pub throat_diameter: f64,
    pub burn_rate: f64,
    pub nozzle: NozzlePolicySummary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NozzlePolicySummary {
    Fixed { exit_diameter: f64 },
    Variable { min: f64, max: f64 },
}

impl PerformanceReport {
    /// Builds the summary for a finished run. Faulted runs are rejected.
    pub fn from_run(engine: &RocketEngine<'_>, run: &EngineRun, burn_time: f64) -> Result<Self> {
        if let Some(fault) = run.domain_fault() {
            return Err(fault);
        }

        let constants = engine.constants();
        let nozzle = match engine.policy() {
            DiameterPolicy::Constant { diameter } => NozzlePolicySummary::Fixed {
                exit_diameter: diameter,
            },
            DiameterPolicy::PressureDependent => NozzlePolicySummary::Variable {
                min: constants.exit_diameter_min,
                max: constants.exit_diameter_max,
            },
        };

        Ok(PerformanceReport {
            total_impulse: total_impulse(engine, &run.trace),
            specific_impulse: specific_impulse(run.final_exit_velocity, constants),
            chamber_pressure: run.final_chamber_pressure,
            exit_diameter: run.final_exit_diameter,
            exit_velocity: run.final_exit_velocity,
            burn_time,
            throat_diameter: constants.throat_diameter,
            burn_rate: constants.burn_rate,
            nozzle,
        })
    }

    pub fn model(&self) -> NozzleModel {
        match self.nozzle {
            NozzlePolicySummary::Fixed { .. } => NozzleModel::Fixed,
            NozzlePolicySummary::Variable { .. } => NozzleModel::Variable,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "===================")?;
        writeln!(f, "Total Impulse: {:.2} Ns", self.total_impulse)?;
        writeln!(f, "Specific Impulse: {:.4} s", self.specific_impulse)?;
        writeln!(f)?;
        writeln!(f, "Simulation Details:")?;
        writeln!(f, "===================")?;
        writeln!(f, "Chamber Pressure: {:.2} Pa", self.chamber_pressure)?;
        match self.nozzle {
            NozzlePolicySummary::Fixed { .. } => {}
            NozzlePolicySummary::Variable { .. } => writeln!(
                f,
                "Exit Diameter: {:.4} m (at end of burn)",
                self.exit_diameter
            )?,
        }
        writeln!(f, "Exit Velocity: {:.2} m/s", self.exit_velocity)?;
        writeln!(
            f,
            "Burn Time: {} ({} s)",
            Self::format_time(self.burn_time),
            self.burn_time
        )?;
        writeln!(f, "Throat Diameter: {} m", self.throat_diameter)?;
        match self.nozzle {
            NozzlePolicySummary::Fixed { exit_diameter } => {
                writeln!(f, "Exit Diameter: {} m", exit_diameter)?
            }
            NozzlePolicySummary::Variable { min, max } => {
                writeln!(f, "Exit Diameter Range: {} m to {} m", min, max)?
            }
        }
        write!(f, "Burn Rate: {} kg/s", self.burn_rate)
    }
}
