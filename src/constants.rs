// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const GAS_CONSTANT: f64 = 287.05; // J/(kg⋅K)
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa (pascals)
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol
pub const GAMMA: f64 = 1.4; // ratio of specific heats

// Engine Constants
pub const THROAT_DIAMETER: f64 = 0.05; // m
pub const EXIT_DIAMETER: f64 = 0.1; // m (fixed nozzle)
pub const BURN_RATE: f64 = 0.01; // kg/s
pub const CHAMBER_PRESSURE: f64 = 1_000_000.0; // Pa (setpoint)
pub const BURN_TIME: f64 = 120.0; // s
pub const COMBUSTION_EFFICIENCY: f64 = 0.95;

// Variable Geometry Nozzle
pub const EXIT_DIAMETER_MIN: f64 = 0.1; // m
pub const EXIT_DIAMETER_MAX: f64 = 0.2; // m

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_BURN_TIME: f64 = 86400.0; // s
