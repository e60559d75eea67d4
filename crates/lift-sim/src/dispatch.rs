//! The two dispatch strategies: SCAN and naive first-come-first-served.
//!
//! # SCAN
//!
//! The car sweeps toward the highest floor anyone needs, servicing every
//! floor along the way, then reverses toward the lowest remaining floor, and
//! repeats until nobody is waiting and nobody is aboard.  The outer loop is
//! deliberately a loop and not an unrolled up-then-down pair: a pickup at
//! the sweep's starting floor is only reached on a later pass, and a rider
//! boarded mid-sweep can extend the floor range in either direction.
//!
//! Termination: every full up+down pass services every floor in the pending
//! range except possibly the pass's starting floor, and the floor range is
//! bounded by the min/max over pending people, so `requests ∪ riders`
//! strictly shrinks across passes.
//!
//! # FCFS
//!
//! The baseline strategy replays requests strictly in arrival order, one
//! full round trip per person, with no consolidation.  It exists to be
//! measured against: SCAN never traverses more floors on the same batch.

use lift_core::{Floor, Person};

use crate::car::ElevatorCar;
use crate::error::{SimError, SimResult};
use crate::observer::{CarObserver, Direction};

// ── Strategy selection ────────────────────────────────────────────────────────

/// Which algorithm [`ElevatorCar::dispatch`] runs.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DispatchStrategy {
    /// Sweep dispatch: minimize backtracking by servicing whole directional
    /// sweeps.  The primary algorithm.
    #[default]
    Scan,
    /// First-come-first-served baseline: one person at a time, in arrival
    /// order, no consolidation.
    Fcfs,
}

// ── Step budget ───────────────────────────────────────────────────────────────

/// Upper bound on single-floor moves a dispatch call may make.
///
/// Dispatch terminates on its own for every well-formed request set; the
/// budget exists for callers that cannot rule out a concurrently mutated or
/// otherwise malformed car and want a hard stop instead of an open-ended
/// loop.  Exhaustion aborts with [`SimError::StepBudgetExhausted`], leaving
/// the car wherever it was.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum StepBudget {
    /// No limit.  Dispatch is infallible.
    #[default]
    Unbounded,
    /// Abort after this many single-floor moves.
    Max(u64),
}

/// Mutable debit counter for one dispatch call.
struct StepMeter {
    remaining: Option<u64>,
    limit:     u64,
}

impl StepMeter {
    fn new(budget: StepBudget) -> Self {
        match budget {
            StepBudget::Unbounded => Self { remaining: None, limit: 0 },
            StepBudget::Max(n) => Self { remaining: Some(n), limit: n },
        }
    }

    fn debit(&mut self) -> SimResult<()> {
        match self.remaining.as_mut() {
            None => Ok(()),
            Some(n) if *n > 0 => {
                *n -= 1;
                Ok(())
            }
            Some(_) => Err(SimError::StepBudgetExhausted { limit: self.limit }),
        }
    }
}

// ── Dispatch summary ──────────────────────────────────────────────────────────

/// What one dispatch (or single-trip) call did.
///
/// Counters are deltas for the call, not car totals, so back-to-back runs on
/// the same car report their own work.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DispatchSummary {
    /// Single-floor moves made.
    pub moves:       u64,
    /// Stops serviced.
    pub stops:       u32,
    /// Where the car ended up.
    pub final_floor: Floor,
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

impl ElevatorCar {
    /// Service every pending request and deliver every rider.
    ///
    /// Blocks until the car is idle (or the budget runs dry).  A car that is
    /// already idle makes zero moves and zero stops.  The car does not
    /// return to the lobby afterwards; that decision belongs to the caller
    /// (see [`should_return_to_lobby`][Self::should_return_to_lobby]).
    pub fn dispatch<O: CarObserver>(
        &mut self,
        strategy: DispatchStrategy,
        budget:   StepBudget,
        observer: &mut O,
    ) -> SimResult<DispatchSummary> {
        let mut meter = StepMeter::new(budget);
        let stops_before = self.stops;
        let moves_before = self.floors_traversed;

        match strategy {
            DispatchStrategy::Scan => self.run_scan(&mut meter, observer)?,
            DispatchStrategy::Fcfs => self.run_fcfs(&mut meter, observer)?,
        }

        let summary = DispatchSummary {
            moves:       self.floors_traversed - moves_before,
            stops:       self.stops - stops_before,
            final_floor: self.floor,
        };
        observer.on_idle(&summary);
        Ok(summary)
    }

    /// Handle a single person's full trip: travel to their floor, stop to
    /// board, travel to their destination, stop to discharge.
    ///
    /// Both legs move floor-by-floor in the needed direction but do not
    /// service intermediate floors.  Each leg counts exactly one stop, even
    /// if the car was already at the leg's target floor.  Also the building
    /// block of FCFS dispatch.
    pub fn go_to_floor<O: CarObserver>(
        &mut self,
        person:   &Person,
        budget:   StepBudget,
        observer: &mut O,
    ) -> SimResult<DispatchSummary> {
        let mut meter = StepMeter::new(budget);
        let stops_before = self.stops;
        let moves_before = self.floors_traversed;

        self.run_trip(person, &mut meter, observer)?;

        let summary = DispatchSummary {
            moves:       self.floors_traversed - moves_before,
            stops:       self.stops - stops_before,
            final_floor: self.floor,
        };
        observer.on_idle(&summary);
        Ok(summary)
    }

    // ── SCAN ──────────────────────────────────────────────────────────────

    fn run_scan<O: CarObserver>(&mut self, meter: &mut StepMeter, observer: &mut O) -> SimResult<()> {
        while !self.is_idle() {
            // Sweep up to the highest floor anyone needs.
            let highest = self.highest_pending_floor();
            while self.floor < highest {
                self.step(Direction::Up, meter, observer)?;
                self.service_floor(observer);
            }

            if self.is_idle() {
                break;
            }

            // Sweep down to the lowest floor still needed.
            let lowest = self.lowest_pending_floor();
            while self.floor > lowest {
                self.step(Direction::Down, meter, observer)?;
                self.service_floor(observer);
            }
        }
        Ok(())
    }

    /// Highest floor among the car's own position, every pending request's
    /// pickup and destination, and every rider's destination.  Seeding with
    /// the car's position means an up-sweep whose targets are all below is a
    /// zero-move fall-through.
    fn highest_pending_floor(&self) -> Floor {
        let mut highest = self.floor;
        for p in &self.requests {
            highest = highest.max(p.current_floor).max(p.drop_off_floor);
        }
        for p in &self.riders {
            highest = highest.max(p.drop_off_floor);
        }
        highest
    }

    /// Mirror of [`highest_pending_floor`][Self::highest_pending_floor].
    fn lowest_pending_floor(&self) -> Floor {
        let mut lowest = self.floor;
        for p in &self.requests {
            lowest = lowest.min(p.current_floor).min(p.drop_off_floor);
        }
        for p in &self.riders {
            lowest = lowest.min(p.drop_off_floor);
        }
        lowest
    }

    // ── FCFS ──────────────────────────────────────────────────────────────

    fn run_fcfs<O: CarObserver>(&mut self, meter: &mut StepMeter, observer: &mut O) -> SimResult<()> {
        // One full round trip per request, in arrival order.  A head request
        // that already boarded as a side effect of an earlier trip (shared
        // pickup floor) is simply no longer in the queue.
        while let Some(head) = self.requests.first().cloned() {
            self.run_trip(&head, meter, observer)?;
        }

        // Riders swept up from shared pickup floors may still be aboard;
        // deliver them directly so FCFS also terminates empty.
        while let Some(rider) = self.riders.first().cloned() {
            self.travel_to(rider.drop_off_floor, meter, observer)?;
            self.stops += 1;
            let alighted = self.discharge_arrived();
            observer.on_stop(self.floor, 0, alighted);
        }
        Ok(())
    }

    fn run_trip<O: CarObserver>(
        &mut self,
        person:   &Person,
        meter:    &mut StepMeter,
        observer: &mut O,
    ) -> SimResult<()> {
        self.travel_to(person.current_floor, meter, observer)?;
        self.stops += 1;
        let boarded = self.board_waiting();
        observer.on_stop(self.floor, boarded, 0);

        self.travel_to(person.drop_off_floor, meter, observer)?;
        self.stops += 1;
        let alighted = self.discharge_arrived();
        observer.on_stop(self.floor, 0, alighted);
        Ok(())
    }

    // ── Shared plumbing ───────────────────────────────────────────────────

    /// Move directly to `target`, one floor at a time, without servicing
    /// intermediate floors.
    fn travel_to<O: CarObserver>(
        &mut self,
        target:   Floor,
        meter:    &mut StepMeter,
        observer: &mut O,
    ) -> SimResult<()> {
        while self.floor != target {
            let direction = if self.floor < target {
                Direction::Up
            } else {
                Direction::Down
            };
            self.step(direction, meter, observer)?;
        }
        Ok(())
    }

    /// One budgeted single-floor move.
    fn step<O: CarObserver>(
        &mut self,
        direction: Direction,
        meter:     &mut StepMeter,
        observer:  &mut O,
    ) -> SimResult<()> {
        meter.debit()?;
        match direction {
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
        observer.on_move(direction, self.floor);
        Ok(())
    }

    /// Service the current floor if anyone needs it: count one stop, board
    /// the waiting, then discharge the arrived.  Boarding before discharging
    /// keeps the event order deterministic; a person can never do both at
    /// one floor because pickup and destination floors are distinct.
    fn service_floor<O: CarObserver>(&mut self, observer: &mut O) {
        if !self.has_stop_here() {
            return;
        }
        self.stops += 1;
        let boarded = self.board_waiting();
        let alighted = self.discharge_arrived();
        observer.on_stop(self.floor, boarded, alighted);
    }
}
