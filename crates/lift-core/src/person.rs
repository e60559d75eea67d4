//! A person requesting an elevator trip.

use std::fmt;

use crate::Floor;

/// One pickup/drop-off trip through the building.
///
/// A `Person` is immutable for the duration of its trip and moves through a
/// strictly linear lifecycle: it sits in the car's pending-request list until
/// the car stops at `current_floor`, rides until the car stops at
/// `drop_off_floor`, and is then discarded.  There is no reversal and no
/// re-boarding.
///
/// `name` is the unique key — the control layer rejects duplicates, and all
/// remove/board-by-name operations resolve against it.
///
/// # Caller obligation
///
/// `current_floor != drop_off_floor` is validated by the control layer before
/// a `Person` ever reaches the car.  The car itself never re-checks it;
/// dispatching a person whose floors are equal is unspecified behavior.
///
/// The serialized field names (`currentFloor`, `dropOffFloor`) are fixed for
/// interoperability with pre-existing clients of the state snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Person {
    pub name:           String,
    /// The floor the person is waiting on (pickup location).
    pub current_floor:  Floor,
    /// The floor the person wants to reach.
    pub drop_off_floor: Floor,
}

impl Person {
    pub fn new(name: impl Into<String>, current_floor: Floor, drop_off_floor: Floor) -> Self {
        Self {
            name: name.into(),
            current_floor,
            drop_off_floor,
        }
    }

    /// Single-floor moves a direct trip from pickup to drop-off would take.
    #[inline]
    pub fn trip_length(&self) -> u32 {
        self.current_floor.distance(self.drop_off_floor)
    }

    /// `true` when the destination is above the pickup floor.
    #[inline]
    pub fn is_upward(&self) -> bool {
        self.drop_off_floor > self.current_floor
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} → {})",
            self.name, self.current_floor, self.drop_off_floor
        )
    }
}
