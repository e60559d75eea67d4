//! Error types for lift-control.

use lift_core::Floor;
use lift_sim::SimError;
use thiserror::Error;

/// Errors raised at the control boundary.
///
/// A collaborator mapping these onto a wire protocol should treat
/// [`NoSuchRequest`][Self::NoSuchRequest] and [`NoSuchRider`][Self::NoSuchRider]
/// as not-found conditions and the validation variants (`EmptyName`,
/// `SameFloorTrip`, `DuplicateName`) as bad requests.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("a request needs a non-empty name")]
    EmptyName,

    #[error("pickup and drop-off floors must differ ({name} gave {floor} for both)")]
    SameFloorTrip { name: String, floor: Floor },

    #[error("{0:?} is already waiting or aboard")]
    DuplicateName(String),

    #[error("no pending request named {0:?}")]
    NoSuchRequest(String),

    #[error("no rider named {0:?}")]
    NoSuchRider(String),

    #[error("dispatch aborted: {0}")]
    Dispatch(#[from] SimError),

    #[error("request file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ControlError>`.
pub type ControlResult<T> = Result<T, ControlError>;
