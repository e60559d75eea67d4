//! CSV request-batch loader.
//!
//! # CSV format
//!
//! One row per pickup request, headers matching the snapshot's wire names:
//!
//! ```csv
//! name,currentFloor,dropOffFloor
//! Oliver,3,6
//! Angela,1,5
//! ```
//!
//! Every row goes through [`CarController::add_request`], so a batch file is
//! held to the same rules as individually created requests: non-empty
//! unique names, distinct floors.  Loading stops at the first bad row,
//! leaving the rows before it queued.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, WallClock};

use crate::controller::CarController;
use crate::error::{ControlError, ControlResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestRecord {
    name:           String,
    current_floor:  u32,
    drop_off_floor: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and queue pickup requests from a CSV file.  Returns how many were
/// queued.
pub fn load_requests_csv<C: WallClock>(
    path:       &Path,
    controller: &mut CarController<C>,
) -> ControlResult<usize> {
    let file = std::fs::File::open(path).map_err(ControlError::Io)?;
    load_requests_reader(file, controller)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_requests_reader<R: Read, C: WallClock>(
    reader:     R,
    controller: &mut CarController<C>,
) -> ControlResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut queued = 0;

    for result in csv_reader.deserialize::<RequestRecord>() {
        let row = result.map_err(|e| ControlError::Parse(e.to_string()))?;
        controller.add_request(
            &row.name,
            Floor(row.current_floor),
            Floor(row.drop_off_floor),
        )?;
        queued += 1;
    }

    Ok(queued)
}
