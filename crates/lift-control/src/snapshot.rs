//! Serializable full-state snapshot.

use lift_core::{Floor, Person};
use lift_sim::ElevatorCar;
use serde::{Deserialize, Serialize};

/// A plain copy of the car's full observable state.
///
/// Field names in the serialized form (`currentFloor`, `floorsTraversed`,
/// …) are fixed: existing clients and test fixtures of the original wire
/// format depend on them.  No pagination — the snapshot is always complete.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSnapshot {
    pub current_floor:    Floor,
    pub stops:            u32,
    pub floors_traversed: u64,
    pub requests:         Vec<Person>,
    pub riders:           Vec<Person>,
}

impl CarSnapshot {
    /// Copy the car's observable state.
    pub fn of(car: &ElevatorCar) -> Self {
        Self {
            current_floor:    car.floor(),
            stops:            car.stops(),
            floors_traversed: car.floors_traversed(),
            requests:         car.requests().to_vec(),
            riders:           car.riders().to_vec(),
        }
    }
}
