//! `lift-control` — the boundary-facing interface to one elevator car.
//!
//! An external CRUD collaborator (an HTTP layer, a REPL, a test harness)
//! talks to the simulation exclusively through [`CarController`]: named
//! create/remove/board operations with validation, the manual floor
//! override, the two stateful triggers (dispatch and reset), and a
//! serializable full-state snapshot.
//!
//! The split of obligations with `lift-sim` is deliberate: everything the
//! car trusts its caller about (distinct trip floors, unique names) is
//! enforced *here*, and every failure the collaborator can observe
//! (bad-request vs not-found conditions) is raised *here*.  The car itself
//! has no failure paths.
//!
//! The controller owns exactly one car and provides no internal locking;
//! a collaborator sharing it across threads must serialize access itself,
//! e.g. behind a mutex or a single-threaded request queue.
//!
//! # Crate layout
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`controller`] | `CarController` — the named operations          |
//! | [`snapshot`]   | `CarSnapshot` — serializable full state         |
//! | [`loader`]     | CSV request-batch loading                       |
//! | [`error`]      | `ControlError`, `ControlResult`                 |

pub mod controller;
pub mod error;
pub mod loader;
pub mod snapshot;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controller::CarController;
pub use error::{ControlError, ControlResult};
pub use loader::{load_requests_csv, load_requests_reader};
pub use snapshot::CarSnapshot;
