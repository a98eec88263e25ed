pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod thermodynamics;
pub mod utils;

pub use config::{EngineConstants, NozzleModel, RunParameters, SimulationConfig};
pub use constants::*;
pub use errors::{Result, SimulationError};

// Re-export the engine and its trace types from control
pub use control::engine::RocketEngine;
pub use control::nozzle::{map_exit_diameter, DiameterPolicy};
pub use control::trace::{EngineRun, SimulationTrace, TracePoint};

// Re-export the formulas from thermodynamics
pub use thermodynamics::exit_state::{exit_pressure, exit_state, exit_velocity, ExitState};
pub use thermodynamics::thrust::thrust;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::{specific_impulse, total_impulse, PerformanceReport};
