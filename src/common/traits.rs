//! Common traits defining the seams of the profiling pipeline

/// Actuator boundary: receives one left/right voltage pair per tracked sample
pub trait MotorDispatcher {
    /// Send a voltage pair to the drivetrain
    fn dispatch(&mut self, left: f64, right: f64);
}

impl<F> MotorDispatcher for F
where
    F: FnMut(f64, f64),
{
    fn dispatch(&mut self, left: f64, right: f64) {
        self(left, right)
    }
}

/// Trait for vehicle/robot motion models
pub trait MotionModel {
    /// State type
    type State;
    /// Control type
    type Control;

    /// Propagate state forward in time
    fn propagate(&self, state: &Self::State, control: &Self::Control, dt: f64) -> Self::State;
}
