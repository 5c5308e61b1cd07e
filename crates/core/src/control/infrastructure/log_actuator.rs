use crate::control::domain::actuator::{Actuator, ActuatorError};

/// Actuator that writes every command to the log instead of a vehicle.
///
/// Stands in for the real command link in demos and dry runs. Zero-speed
/// axis sends go to debug so a quiet hover doesn't flood the log.
#[derive(Debug, Default)]
pub struct LogActuator;

impl LogActuator {
    pub fn new() -> Self {
        Self
    }

    fn send(&self, operation: &str, speed: i32) -> Result<(), ActuatorError> {
        if speed == 0 {
            log::debug!("actuator: {operation} 0");
        } else {
            log::info!("actuator: {operation} {speed}");
        }
        Ok(())
    }
}

impl Actuator for LogActuator {
    fn clockwise(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("clockwise", speed)
    }

    fn counter_clockwise(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("counter-clockwise", speed)
    }

    fn up(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("up", speed)
    }

    fn down(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("down", speed)
    }

    fn forward(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("forward", speed)
    }

    fn backward(&mut self, speed: i32) -> Result<(), ActuatorError> {
        self.send("backward", speed)
    }

    fn hover(&mut self) -> Result<(), ActuatorError> {
        log::info!("actuator: hover");
        Ok(())
    }
}
