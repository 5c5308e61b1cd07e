use std::sync::{Arc, Mutex};

use crate::control::domain::actuator::Actuator;
use crate::control::domain::axis::{depth_command, vertical_command, yaw_command};
use crate::control::domain::command::DirectionalCommand;
use crate::control::domain::tracking_state::TrackingState;
use crate::shared::geometry::FrameGeometry;
use crate::shared::target_slot::TargetSlot;

/// The control dispatcher: turns the latest selected box into one
/// actuation command per tick.
///
/// Holds the only mutable controller state (tracking phase, last issued
/// command) and the actuator. Ticks are self-contained: nothing carries
/// over between them except `TrackingState`, so a failed send is simply
/// superseded by the next tick's freshly computed command.
pub struct FaceFollower {
    geometry: FrameGeometry,
    tolerance: f64,
    target: Arc<TargetSlot>,
    actuator: Box<dyn Actuator>,
    state: TrackingState,
    last_command: DirectionalCommand,
}

impl FaceFollower {
    pub fn new(
        geometry: FrameGeometry,
        target: Arc<TargetSlot>,
        actuator: Box<dyn Actuator>,
    ) -> Self {
        Self {
            geometry,
            tolerance: geometry.distance_tolerance(),
            target,
            actuator,
            state: TrackingState::default(),
            last_command: DirectionalCommand::NEUTRAL,
        }
    }

    /// One dispatch tick.
    ///
    /// Disabled: the actuator is left alone (teleoperation, if any, owns
    /// it). Enabled with no current box: hold position, since a detection
    /// gap is a normal signal rather than an error. Otherwise capture the
    /// reference if still pending, then evaluate the three axes
    /// independently.
    pub fn tick(&mut self) {
        if !self.state.is_enabled() {
            return;
        }

        let Some(target) = self.target.snapshot() else {
            log::debug!("no face this tick, holding position");
            self.issue(DirectionalCommand::NEUTRAL);
            return;
        };

        if self.state.awaiting_reference() {
            self.state.capture_reference(target.diagonal());
            if let Some(reference) = self.state.reference_distance() {
                log::info!("reference distance captured: {reference:.1}");
            }
        }

        let command = DirectionalCommand::new(
            yaw_command(&target, &self.geometry),
            vertical_command(&target, &self.geometry),
            depth_command(&target, self.state.reference_distance(), self.tolerance),
        );
        self.issue(command);
    }

    /// Flips tracking on or off and immediately issues a hold command so
    /// no residual motion outlives the transition. Returns whether
    /// tracking is enabled afterwards.
    pub fn toggle(&mut self) -> bool {
        let enabled = self.state.toggle();
        if enabled {
            log::info!("face tracking enabled");
        } else {
            log::info!("face tracking disabled");
        }
        self.issue(DirectionalCommand::NEUTRAL);
        enabled
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_enabled()
    }

    /// The most recently issued command, for display and logging only.
    pub fn last_command(&self) -> DirectionalCommand {
        self.last_command
    }

    fn issue(&mut self, command: DirectionalCommand) {
        self.last_command = command;
        if let Err(e) = command.apply(self.actuator.as_mut()) {
            log::warn!("actuator send failed, next tick will reissue: {e}");
        }
    }
}

/// Clonable, thread-safe handle to a follower.
///
/// The dispatch loop, the toggle source, and observers all go through the
/// same mutex, which is the entire synchronization story for the
/// controller state.
#[derive(Clone)]
pub struct FollowerHandle {
    inner: Arc<Mutex<FaceFollower>>,
}

impl FollowerHandle {
    pub fn new(follower: FaceFollower) -> Self {
        Self {
            inner: Arc::new(Mutex::new(follower)),
        }
    }

    pub fn tick(&self) {
        self.lock().tick();
    }

    pub fn toggle(&self) -> bool {
        self.lock().toggle()
    }

    pub fn is_tracking(&self) -> bool {
        self.lock().is_tracking()
    }

    pub fn last_command(&self) -> DirectionalCommand {
        self.lock().last_command()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FaceFollower> {
        self.inner.lock().expect("follower lock poisoned")
    }
}
