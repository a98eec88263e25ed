use crate::errors::{Result, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub time: f64,
    pub chamber_pressure: f64,
}

impl TracePoint {
    /// A pressure the exit-state relations can still evaluate.
    pub fn is_physical(&self) -> bool {
        self.chamber_pressure.is_finite() && self.chamber_pressure > 0.0
    }
}

/// Chronological (time, chamber pressure) history of one run.
///
/// Append-only; entries are pushed in step order so times strictly increase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationTrace {
    points: Vec<TracePoint>,
}

impl SimulationTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        SimulationTrace {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, time: f64, chamber_pressure: f64) {
        self.points.push(TracePoint {
            time,
            chamber_pressure,
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &TracePoint> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&TracePoint> {
        self.points.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.chamber_pressure).collect()
    }

    /// First entry whose pressure left the valid domain, if any.
    pub fn first_fault(&self) -> Option<&TracePoint> {
        self.points.iter().find(|p| !p.is_physical())
    }
}

/// Everything the stepper hands to the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineRun {
    pub trace: SimulationTrace,
    /// Thrust evaluated at the start of each step, before the pressure update.
    pub step_thrusts: Vec<f64>,
    pub final_chamber_pressure: f64,
    pub final_exit_diameter: f64,
    pub final_exit_velocity: f64,
}

impl EngineRun {
    pub fn domain_fault(&self) -> Option<SimulationError> {
        self.trace
            .first_fault()
            .map(|point| SimulationError::DomainFault {
                time: point.time,
                chamber_pressure: point.chamber_pressure,
            })
    }

    pub fn is_healthy(&self) -> bool {
        self.trace.first_fault().is_none()
    }

    /// Faults are terminal: a run that left the valid domain is not reported.
    pub fn ensure_healthy(self) -> Result<Self> {
        match self.domain_fault() {
            Some(fault) => Err(fault),
            None => Ok(self),
        }
    }
}
