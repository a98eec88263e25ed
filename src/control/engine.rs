use tracing::{debug, info, warn};

use super::nozzle::DiameterPolicy;
use super::trace::{EngineRun, SimulationTrace};
use crate::config::{require_positive, validate_burn_time, EngineConstants, SimulationConfig};
use crate::constants::TIME_STEP;
use crate::errors::Result;
use crate::thermodynamics::exit_state::{self, exit_pressure, ExitState};
use crate::thermodynamics::thrust;
use crate::utils::geometry::circle_area;

/// One engine configuration: shared constants plus a nozzle policy.
///
/// The fixed- and variable-geometry engines are the same stepper with a
/// different [`DiameterPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct RocketEngine<'a> {
    constants: &'a EngineConstants,
    policy: DiameterPolicy,
}

impl<'a> RocketEngine<'a> {
    pub fn new(constants: &'a EngineConstants, policy: DiameterPolicy) -> Result<Self> {
        constants.validate()?;
        if let DiameterPolicy::Constant { diameter } = policy {
            require_positive("exit_diameter", diameter)?;
        }
        Ok(RocketEngine { constants, policy })
    }

    pub fn fixed(constants: &'a EngineConstants, exit_diameter: f64) -> Result<Self> {
        Self::new(
            constants,
            DiameterPolicy::Constant {
                diameter: exit_diameter,
            },
        )
    }

    pub fn variable(constants: &'a EngineConstants) -> Result<Self> {
        Self::new(constants, DiameterPolicy::PressureDependent)
    }

    pub fn from_config(config: &'a SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            &config.engine,
            DiameterPolicy::from_model(config.run.nozzle, config.run.exit_diameter),
        )
    }

    pub fn constants(&self) -> &'a EngineConstants {
        self.constants
    }

    pub fn policy(&self) -> DiameterPolicy {
        self.policy
    }

    pub fn exit_diameter(&self, chamber_pressure: f64) -> f64 {
        self.policy.exit_diameter(chamber_pressure, self.constants)
    }

    pub fn exit_state(&self, chamber_pressure: f64) -> ExitState {
        exit_state::exit_state(chamber_pressure, self.constants)
    }

    pub fn exit_velocity(&self, chamber_pressure: f64, exit_diameter: f64) -> f64 {
        exit_state::exit_velocity(chamber_pressure, exit_diameter, self.constants)
    }

    pub fn thrust(&self, chamber_pressure: f64, exit_diameter: f64) -> f64 {
        thrust::thrust(chamber_pressure, exit_diameter, self.constants)
    }

    /// Thrust with the diameter the policy picks for this pressure.
    pub fn thrust_at(&self, chamber_pressure: f64) -> f64 {
        self.thrust(chamber_pressure, self.exit_diameter(chamber_pressure))
    }

    /// Pressure change over one step.
    pub fn pressure_delta(&self, chamber_pressure: f64, exit_diameter: f64) -> f64 {
        let mass_flow_rate = self.constants.burn_rate;
        let exit_pressure = exit_pressure(chamber_pressure, self.constants);
        let throat_area = circle_area(self.constants.throat_diameter);
        let exit_area = circle_area(exit_diameter);

        mass_flow_rate * self.exit_velocity(chamber_pressure, exit_diameter)
            + (exit_pressure - chamber_pressure) * (throat_area / exit_area)
    }

    /// Steps chamber pressure from `initial_pressure` at one-second intervals
    /// for every t in [0, burn_time].
    ///
    /// Configuration faults are returned before the first step. Numerical
    /// faults are not: a pressure that goes non-positive turns into NaN on the
    /// next step and stays in the trace, where [`EngineRun::domain_fault`]
    /// reports it.
    pub fn simulate(&self, initial_pressure: f64, burn_time: f64) -> Result<EngineRun> {
        require_positive("initial_pressure", initial_pressure)?;
        validate_burn_time(burn_time)?;

        let steps = (burn_time / TIME_STEP).floor() as usize + 1;
        info!(
            model = ?self.policy.model(),
            initial_pressure,
            burn_time,
            steps,
            "starting engine simulation"
        );

        let mut trace = SimulationTrace::with_capacity(steps);
        let mut step_thrusts = Vec::with_capacity(steps);
        let mut chamber_pressure = initial_pressure;
        let mut fault_reported = false;

        for step in 0..steps {
            let time = step as f64 * TIME_STEP;
            let exit_diameter = self.exit_diameter(chamber_pressure);
            let thrust = self.thrust(chamber_pressure, exit_diameter);
            let delta_pressure = self.pressure_delta(chamber_pressure, exit_diameter);
            chamber_pressure += delta_pressure;

            debug!(
                time,
                chamber_pressure, exit_diameter, thrust, delta_pressure, "engine step"
            );

            trace.record(time, chamber_pressure);
            step_thrusts.push(thrust);

            if !fault_reported && !(chamber_pressure.is_finite() && chamber_pressure > 0.0) {
                warn!(
                    time,
                    chamber_pressure, "chamber pressure left the valid domain"
                );
                fault_reported = true;
            }
        }

        let final_exit_diameter = self.exit_diameter(chamber_pressure);
        let final_exit_velocity = self.exit_velocity(chamber_pressure, final_exit_diameter);
        info!(
            final_chamber_pressure = chamber_pressure,
            final_exit_diameter, final_exit_velocity, "engine simulation complete"
        );

        Ok(EngineRun {
            trace,
            step_thrusts,
            final_chamber_pressure: chamber_pressure,
            final_exit_diameter,
            final_exit_velocity,
        })
    }
}
