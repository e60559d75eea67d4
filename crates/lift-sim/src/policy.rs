//! Lobby-return policy.
//!
//! Before noon, an idle car drifts back to the lobby to meet the morning
//! inbound rush; after noon it parks wherever its last dropoff left it.
//! This ties scheduling policy to the wall clock on purpose — it is a
//! documented business rule, not an artifact.  The clock is injected (see
//! [`WallClock`]) so the rule stays testable.
//!
//! Dispatch never invokes this policy on its own.  The caller decides after
//! dispatch completes, typically:
//!
//! ```rust,ignore
//! car.dispatch(DispatchStrategy::Scan, StepBudget::Unbounded, &mut obs)?;
//! if car.should_return_to_lobby(&SystemClock) {
//!     car.return_to_lobby(&mut obs);
//! }
//! ```

use lift_core::WallClock;

use crate::car::ElevatorCar;
use crate::observer::{CarObserver, Direction};

impl ElevatorCar {
    /// Should the car head back to the lobby?  True when nobody is aboard
    /// and the hour is before noon.
    pub fn should_return_to_lobby<C: WallClock>(&self, clock: &C) -> bool {
        self.riders.is_empty() && clock.hour_of_day() < 12
    }

    /// Move down to the ground floor, one floor at a time.
    ///
    /// Traversal is counted as usual but no stops are detected or serviced;
    /// the ride home is empty by definition of the policy.  Unconditional:
    /// callers gate on [`should_return_to_lobby`][Self::should_return_to_lobby].
    pub fn return_to_lobby<O: CarObserver>(&mut self, observer: &mut O) {
        while !self.floor.is_ground() {
            self.move_down();
            observer.on_move(Direction::Down, self.floor);
        }
    }
}
