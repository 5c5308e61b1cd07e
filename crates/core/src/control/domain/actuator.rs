use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActuatorError {
    #[error("command link closed")]
    LinkClosed,
    #[error("command rejected: {0}")]
    Rejected(String),
}

/// The vehicle's command surface.
///
/// One named operation per direction, each taking a magnitude in
/// `[0, 100]`, plus a neutral `hover`. Sending is fire-and-forget from the
/// caller's point of view: a returned error means this command was lost,
/// not that the link is unusable for the next one.
pub trait Actuator: Send {
    fn clockwise(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn counter_clockwise(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn up(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn down(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn forward(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn backward(&mut self, speed: i32) -> Result<(), ActuatorError>;
    fn hover(&mut self) -> Result<(), ActuatorError>;
}
