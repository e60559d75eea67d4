//! `lift-core` — foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`floor`]   | `Floor` — non-negative building floor         |
//! | [`person`]  | `Person` — one pickup/drop-off trip           |
//! | [`clock`]   | `WallClock`, `SystemClock`, `FixedClock`      |
//! | [`rng`]     | `SimRng` (seeded scenario randomness)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |
//!           | Required by `lift-control`.                           |

pub mod clock;
pub mod floor;
pub mod person;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{FixedClock, SystemClock, WallClock};
pub use floor::Floor;
pub use person::Person;
pub use rng::SimRng;
