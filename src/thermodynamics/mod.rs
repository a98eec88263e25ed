pub mod exit_state;
pub mod thrust;
