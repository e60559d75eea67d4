//! The `ElevatorCar` — position, counters, and the people it is serving.
//!
//! # State invariants
//!
//! - A given person appears in at most one of `requests` / `riders`.
//! - `floor` can never drop below [`Floor::GROUND`]: [`move_down`] at the
//!   ground floor is a no-op, not an error.  There is no ceiling.
//! - `floors_traversed` only ever grows, except through [`reset`].
//!
//! Name uniqueness across `requests ∪ riders` is a control-layer obligation;
//! the car itself never validates incoming people.
//!
//! [`move_down`]: ElevatorCar::move_down
//! [`reset`]: ElevatorCar::reset

use lift_core::{Floor, Person};

// ── ResetScope ────────────────────────────────────────────────────────────────

/// What [`ElevatorCar::reset`] clears.
///
/// Both variants zero the transit counters and clear the riders; they differ
/// only in whether pending requests survive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ResetScope {
    /// Clear everything: counters, riders, and pending requests.  The default,
    /// so consecutive simulation runs start from a clean car.
    #[default]
    Full,
    /// Clear counters and riders but keep pending requests queued, so a fresh
    /// dispatch can replay them from the ground floor.
    KeepPending,
}

// ── ElevatorCar ───────────────────────────────────────────────────────────────

/// A single elevator car and everything it is currently servicing.
///
/// The car is plain owned state with no interior locking: callers that share
/// one car across threads must serialize access themselves (the control
/// layer does exactly that).  All operations run to completion before
/// returning.
#[derive(Debug, Default)]
pub struct ElevatorCar {
    pub(crate) floor:            Floor,
    pub(crate) stops:            u32,
    pub(crate) floors_traversed: u64,
    /// Pending pickups, in arrival order.  FCFS dispatch depends on the order.
    pub(crate) requests:         Vec<Person>,
    /// People currently aboard, in boarding order.
    pub(crate) riders:           Vec<Person>,
}

impl ElevatorCar {
    /// A car parked at the ground floor with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    // ── State queries ─────────────────────────────────────────────────────

    /// The floor the car is currently at.
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Floors visited with at least one pickup or dropoff.  A floor where
    /// both happen still counts as a single stop.
    #[inline]
    pub fn stops(&self) -> u32 {
        self.stops
    }

    /// Total single-floor moves made since the last reset.
    #[inline]
    pub fn floors_traversed(&self) -> u64 {
        self.floors_traversed
    }

    /// Pending pickup requests, in arrival order.
    #[inline]
    pub fn requests(&self) -> &[Person] {
        &self.requests
    }

    /// People currently aboard, in boarding order.
    #[inline]
    pub fn riders(&self) -> &[Person] {
        &self.riders
    }

    /// `true` when nobody is waiting and nobody is aboard.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.requests.is_empty() && self.riders.is_empty()
    }

    // ── Movement primitives ───────────────────────────────────────────────

    /// Move one floor up.  Always succeeds; the building has no modeled roof.
    #[inline]
    pub fn move_up(&mut self) {
        self.floor = self.floor.up();
        self.floors_traversed += 1;
    }

    /// Move one floor down, unless already at the ground floor.
    ///
    /// At the ground floor this is a no-op: the floor stays put and the
    /// traversal counter does not advance.
    #[inline]
    pub fn move_down(&mut self) {
        if !self.floor.is_ground() {
            self.floor = self.floor.down();
            self.floors_traversed += 1;
        }
    }

    // ── Stop detection and servicing ──────────────────────────────────────

    /// Does anyone need this floor?  True if a pending request is waiting
    /// here or a rider wants off here.  Pure predicate, no mutation.
    pub fn has_stop_here(&self) -> bool {
        let pickup = self.requests.iter().any(|p| p.current_floor == self.floor);
        let dropoff = self.riders.iter().any(|p| p.drop_off_floor == self.floor);
        pickup || dropoff
    }

    /// Board every request waiting at the current floor, preserving their
    /// relative order.  Returns how many boarded.
    pub fn board_waiting(&mut self) -> usize {
        let mut boarded = 0;
        let mut i = 0;
        while i < self.requests.len() {
            if self.requests[i].current_floor == self.floor {
                let person = self.requests.remove(i);
                self.riders.push(person);
                boarded += 1;
            } else {
                i += 1;
            }
        }
        boarded
    }

    /// Discharge every rider whose destination is the current floor.  Their
    /// trips are complete; they are dropped.  Returns how many alighted.
    pub fn discharge_arrived(&mut self) -> usize {
        let before = self.riders.len();
        let here = self.floor;
        self.riders.retain(|p| p.drop_off_floor != here);
        before - self.riders.len()
    }

    // ── Request/rider mutation (control-layer interface) ──────────────────

    /// Append a pickup request.  The car trusts the caller to have validated
    /// the trip (distinct floors, unique name).
    pub fn add_request(&mut self, person: Person) {
        self.requests.push(person);
    }

    /// Remove and return the pending request with this name, if any.
    pub fn remove_request(&mut self, name: &str) -> Option<Person> {
        let i = self.requests.iter().position(|p| p.name == name)?;
        Some(self.requests.remove(i))
    }

    /// Remove and return the rider with this name, if any.
    pub fn remove_rider(&mut self, name: &str) -> Option<Person> {
        let i = self.riders.iter().position(|p| p.name == name)?;
        Some(self.riders.remove(i))
    }

    /// Move the named pending request aboard without any floor matching.
    ///
    /// This is the manual-board override: it bypasses the floor check that
    /// [`board_waiting`][Self::board_waiting] performs and touches no
    /// counters.  Returns the boarded person, or `None` if no pending
    /// request has this name.
    pub fn board_by_name(&mut self, name: &str) -> Option<Person> {
        let i = self.requests.iter().position(|p| p.name == name)?;
        let person = self.requests.remove(i);
        self.riders.push(person.clone());
        Some(person)
    }

    /// Administrative floor override: park the car at `target` directly.
    ///
    /// Adds the full distance to `floors_traversed` but performs no stop
    /// detection and no servicing.  This is not a simulated move.
    pub fn jump_to_floor(&mut self, target: Floor) {
        self.floors_traversed += u64::from(self.floor.distance(target));
        self.floor = target;
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Park the car at the ground floor with zeroed counters and no riders.
    /// [`ResetScope`] controls whether pending requests are also cleared.
    pub fn reset(&mut self, scope: ResetScope) {
        self.floor = Floor::GROUND;
        self.stops = 0;
        self.floors_traversed = 0;
        self.riders.clear();
        if scope == ResetScope::Full {
            self.requests.clear();
        }
    }
}
