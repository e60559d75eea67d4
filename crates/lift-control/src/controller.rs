//! `CarController` — named operations over one owned car.

use lift_core::{Floor, Person, SystemClock, WallClock};
use lift_sim::{
    DispatchStrategy, DispatchSummary, ElevatorCar, NoopObserver, ResetScope, StepBudget,
};

use crate::error::{ControlError, ControlResult};
use crate::snapshot::CarSnapshot;

/// Owns one [`ElevatorCar`] and the clock its lobby policy consults.
///
/// The controller is the single mutation point a collaborator should use:
/// every named operation validates its input before touching the car, so
/// the car's trusted-caller invariants (distinct trip floors, unique names)
/// hold by construction.
///
/// Generic over the clock so tests can pin the hour; production callers use
/// [`CarController::with_system_clock`].
pub struct CarController<C: WallClock> {
    car:         ElevatorCar,
    clock:       C,
    step_budget: StepBudget,
}

impl CarController<SystemClock> {
    /// A controller over a fresh car, reading the real wall clock.
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: WallClock> CarController<C> {
    /// A controller over a fresh car with an injected clock.
    pub fn new(clock: C) -> Self {
        Self {
            car: ElevatorCar::new(),
            clock,
            step_budget: StepBudget::default(),
        }
    }

    /// Cap the moves any single dispatch call may make.  Defaults to
    /// unbounded; dispatch terminates on its own for every batch this
    /// controller can have admitted, so the cap is purely defensive.
    pub fn with_step_budget(mut self, budget: StepBudget) -> Self {
        self.step_budget = budget;
        self
    }

    /// Read-only access to the underlying car.
    pub fn car(&self) -> &ElevatorCar {
        &self.car
    }

    // ── Request CRUD ──────────────────────────────────────────────────────

    /// Validate and queue a new pickup request; returns the queued person.
    ///
    /// Rejects an empty (or whitespace) name, equal pickup/drop-off floors,
    /// and a name already waiting or aboard.
    pub fn add_request(
        &mut self,
        name:           &str,
        current_floor:  Floor,
        drop_off_floor: Floor,
    ) -> ControlResult<Person> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ControlError::EmptyName);
        }
        if current_floor == drop_off_floor {
            return Err(ControlError::SameFloorTrip {
                name:  name.to_owned(),
                floor: current_floor,
            });
        }
        if self.knows_name(name) {
            return Err(ControlError::DuplicateName(name.to_owned()));
        }

        let person = Person::new(name, current_floor, drop_off_floor);
        self.car.add_request(person.clone());
        Ok(person)
    }

    /// Remove a pending request by name.
    pub fn remove_request(&mut self, name: &str) -> ControlResult<Person> {
        self.car
            .remove_request(name)
            .ok_or_else(|| ControlError::NoSuchRequest(name.to_owned()))
    }

    /// Remove a rider by name (an out-of-band drop-off).
    pub fn remove_rider(&mut self, name: &str) -> ControlResult<Person> {
        self.car
            .remove_rider(name)
            .ok_or_else(|| ControlError::NoSuchRider(name.to_owned()))
    }

    /// Manually board a pending request, ignoring where the car is.
    pub fn board(&mut self, name: &str) -> ControlResult<Person> {
        self.car
            .board_by_name(name)
            .ok_or_else(|| ControlError::NoSuchRequest(name.to_owned()))
    }

    // ── Car state ─────────────────────────────────────────────────────────

    /// Administrative override: park the car at `floor` directly, counting
    /// the distance but servicing nothing.  Returns the resulting state.
    pub fn jump_to_floor(&mut self, floor: Floor) -> CarSnapshot {
        self.car.jump_to_floor(floor);
        self.snapshot()
    }

    /// A full state snapshot: floor, counters, pending requests, riders.
    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot::of(&self.car)
    }

    // ── Simulation triggers ───────────────────────────────────────────────

    /// Run a dispatch under the configured step budget.
    pub fn dispatch(&mut self, strategy: DispatchStrategy) -> ControlResult<DispatchSummary> {
        let summary = self
            .car
            .dispatch(strategy, self.step_budget, &mut NoopObserver)?;
        Ok(summary)
    }

    /// Reset the car; see [`ResetScope`] for what is cleared.
    pub fn reset(&mut self, scope: ResetScope) {
        self.car.reset(scope);
    }

    // ── Lobby policy ──────────────────────────────────────────────────────

    /// Evaluate the lobby-return rule against this controller's clock.
    pub fn should_return_to_lobby(&self) -> bool {
        self.car.should_return_to_lobby(&self.clock)
    }

    /// Send the car back to the ground floor.
    pub fn return_to_lobby(&mut self) {
        self.car.return_to_lobby(&mut NoopObserver);
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn knows_name(&self, name: &str) -> bool {
        self.car.requests().iter().any(|p| p.name == name)
            || self.car.riders().iter().any(|p| p.name == name)
    }
}
