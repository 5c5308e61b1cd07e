/// The follow-mode state machine.
///
/// `Disabled` is the initial state; toggling moves to `AwaitingReference`,
/// and the first usable box diagonal seen by the dispatcher locks the
/// reference the depth axis steers against. Toggling off from either
/// enabled state drops the reference, so re-enabling always re-captures
/// from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TrackingState {
    #[default]
    Disabled,
    AwaitingReference,
    Locked {
        reference_distance: f64,
    },
}

impl TrackingState {
    /// Flips between disabled and enabled. Returns whether tracking is
    /// enabled after the flip.
    pub fn toggle(&mut self) -> bool {
        *self = match self {
            TrackingState::Disabled => TrackingState::AwaitingReference,
            TrackingState::AwaitingReference | TrackingState::Locked { .. } => {
                TrackingState::Disabled
            }
        };
        self.is_enabled()
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, TrackingState::Disabled)
    }

    pub fn awaiting_reference(&self) -> bool {
        matches!(self, TrackingState::AwaitingReference)
    }

    /// The captured reference diagonal, once locked.
    pub fn reference_distance(&self) -> Option<f64> {
        match self {
            TrackingState::Locked { reference_distance } => Some(*reference_distance),
            _ => None,
        }
    }

    /// Locks the reference diagonal. A degenerate zero (or negative)
    /// diagonal is ignored and the state keeps awaiting a usable one.
    /// No-op outside `AwaitingReference`.
    pub fn capture_reference(&mut self, diagonal: f64) {
        if matches!(self, TrackingState::AwaitingReference) && diagonal > 0.0 {
            *self = TrackingState::Locked {
                reference_distance: diagonal,
            };
        }
    }
}
