//! `lift-sim` — the elevator car state machine for the rust_lift simulator.
//!
//! # The dispatch loop
//!
//! ```text
//! while requests or riders remain:
//!   ① Target   — compute the highest floor any pending person needs.
//!   ② Sweep up — move one floor at a time; at every floor with a waiting
//!                pickup or an arriving rider: count one stop, board the
//!                waiting, discharge the arrived.
//!   ③ Done?    — stop if nobody is waiting and nobody is aboard.
//!   ④ Sweep down symmetrically to the lowest pending floor.
//! ```
//!
//! The naive FCFS baseline instead services requests strictly in arrival
//! order, one full round trip per person, with no consolidation.  Both
//! strategies are selected through [`DispatchStrategy`] and report their
//! work through a [`CarObserver`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`car`]      | `ElevatorCar`, movement primitives, stop servicing   |
//! | [`dispatch`] | `DispatchStrategy`, `StepBudget`, the two algorithms |
//! | [`observer`] | `CarObserver` trait, `Direction`, `NoopObserver`     |
//! | [`policy`]   | Lobby-return policy (clock-injected)                 |
//! | [`scenario`] | Seeded random request-batch generator                |
//! | [`error`]    | `SimError`, `SimResult`                              |

pub mod car;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod policy;
pub mod scenario;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{ElevatorCar, ResetScope};
pub use dispatch::{DispatchStrategy, DispatchSummary, StepBudget};
pub use error::{SimError, SimResult};
pub use observer::{CarObserver, Direction, NoopObserver};
