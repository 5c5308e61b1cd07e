use crate::control::domain::actuator::{Actuator, ActuatorError};
use crate::shared::constants::COMMAND_BOUND;

/// Actuation intent for one dispatch tick, one signed magnitude per axis.
///
/// Sign conventions: yaw positive is clockwise, vertical positive is up,
/// forward_back positive is toward the face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalCommand {
    pub yaw: i32,
    pub vertical: i32,
    pub forward_back: i32,
}

impl DirectionalCommand {
    /// Hold position: every axis at zero.
    pub const NEUTRAL: DirectionalCommand = DirectionalCommand {
        yaw: 0,
        vertical: 0,
        forward_back: 0,
    };

    /// Builds a command with each axis clamped into the vehicle's range.
    pub fn new(yaw: i32, vertical: i32, forward_back: i32) -> Self {
        Self {
            yaw: yaw.clamp(-COMMAND_BOUND, COMMAND_BOUND),
            vertical: vertical.clamp(-COMMAND_BOUND, COMMAND_BOUND),
            forward_back: forward_back.clamp(-COMMAND_BOUND, COMMAND_BOUND),
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Issues this command through the actuator.
    ///
    /// Neutral maps to the single `hover` operation. Otherwise every axis
    /// is transmitted, idle axes as explicit zeroes: the vehicle treats a
    /// missing axis as "keep last".
    pub fn apply(&self, actuator: &mut dyn Actuator) -> Result<(), ActuatorError> {
        if self.is_neutral() {
            return actuator.hover();
        }
        if self.yaw < 0 {
            actuator.counter_clockwise(-self.yaw)?;
        } else {
            actuator.clockwise(self.yaw)?;
        }
        if self.vertical < 0 {
            actuator.down(-self.vertical)?;
        } else {
            actuator.up(self.vertical)?;
        }
        if self.forward_back < 0 {
            actuator.backward(-self.forward_back)?;
        } else {
            actuator.forward(self.forward_back)?;
        }
        Ok(())
    }
}
