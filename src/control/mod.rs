pub mod engine;
pub mod nozzle;
pub mod trace;
