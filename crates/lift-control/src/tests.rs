//! Tests for the control boundary: validation, named operations, snapshot
//! wire format, and the CSV loader.

use std::io::Cursor;

use lift_core::{FixedClock, Floor};
use lift_sim::{DispatchStrategy, ResetScope, SimError, StepBudget};

use crate::{CarController, ControlError, load_requests_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Morning controller: the lobby-return rule is live.
fn morning() -> CarController<FixedClock> {
    CarController::new(FixedClock::at_hour(9))
}

/// Afternoon controller: the lobby-return rule is off.
fn afternoon() -> CarController<FixedClock> {
    CarController::new(FixedClock::at_hour(15))
}

// ── Request validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn accepts_a_well_formed_request() {
        let mut ctl = morning();
        let person = ctl.add_request("Oliver", Floor(3), Floor(6)).unwrap();
        assert_eq!(person.name, "Oliver");
        assert_eq!(ctl.car().requests().len(), 1);
    }

    #[test]
    fn rejects_blank_names() {
        let mut ctl = morning();
        assert!(matches!(
            ctl.add_request("", Floor(1), Floor(2)),
            Err(ControlError::EmptyName)
        ));
        assert!(matches!(
            ctl.add_request("   ", Floor(1), Floor(2)),
            Err(ControlError::EmptyName)
        ));
    }

    #[test]
    fn rejects_equal_pickup_and_drop_off() {
        let mut ctl = morning();
        let err = ctl.add_request("Ann", Floor(4), Floor(4)).unwrap_err();
        assert!(matches!(
            err,
            ControlError::SameFloorTrip { floor: Floor(4), .. }
        ));
    }

    #[test]
    fn rejects_duplicate_names_waiting_or_aboard() {
        let mut ctl = morning();
        ctl.add_request("Ann", Floor(1), Floor(5)).unwrap();
        assert!(matches!(
            ctl.add_request("Ann", Floor(2), Floor(6)),
            Err(ControlError::DuplicateName(_))
        ));

        // Still a duplicate once she's aboard rather than waiting.
        ctl.board("Ann").unwrap();
        assert!(matches!(
            ctl.add_request("Ann", Floor(2), Floor(6)),
            Err(ControlError::DuplicateName(_))
        ));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut ctl = morning();
        let person = ctl.add_request("  Ann  ", Floor(1), Floor(5)).unwrap();
        assert_eq!(person.name, "Ann");
    }
}

// ── Named operations ──────────────────────────────────────────────────────────

#[cfg(test)]
mod operations {
    use super::*;

    #[test]
    fn remove_request_round_trips() {
        let mut ctl = morning();
        ctl.add_request("Ann", Floor(1), Floor(5)).unwrap();
        let removed = ctl.remove_request("Ann").unwrap();
        assert_eq!(removed.name, "Ann");
        assert!(ctl.car().is_idle());
    }

    #[test]
    fn missing_names_surface_as_distinct_not_found_errors() {
        let mut ctl = morning();
        assert!(matches!(
            ctl.remove_request("ghost"),
            Err(ControlError::NoSuchRequest(_))
        ));
        assert!(matches!(
            ctl.remove_rider("ghost"),
            Err(ControlError::NoSuchRider(_))
        ));
        assert!(matches!(
            ctl.board("ghost"),
            Err(ControlError::NoSuchRequest(_))
        ));
    }

    #[test]
    fn manual_board_then_remove_rider() {
        let mut ctl = morning();
        ctl.add_request("Zoe", Floor(9), Floor(2)).unwrap();
        // Boarding is floor-blind: the car never left the lobby.
        let boarded = ctl.board("Zoe").unwrap();
        assert_eq!(boarded.name, "Zoe");
        assert_eq!(ctl.car().riders().len(), 1);

        let removed = ctl.remove_rider("Zoe").unwrap();
        assert_eq!(removed.name, "Zoe");
        assert!(ctl.car().is_idle());
    }

    #[test]
    fn floor_override_counts_distance_only() {
        let mut ctl = morning();
        ctl.add_request("Ann", Floor(4), Floor(6)).unwrap();
        let snap = ctl.jump_to_floor(Floor(4));

        assert_eq!(snap.current_floor, Floor(4));
        assert_eq!(snap.floors_traversed, 4);
        assert_eq!(snap.stops, 0);
        // Stop detection was bypassed: Ann is still waiting.
        assert_eq!(snap.requests.len(), 1);
    }
}

// ── Dispatch, reset, lobby policy ─────────────────────────────────────────────

#[cfg(test)]
mod triggers {
    use super::*;

    #[test]
    fn scan_dispatch_through_the_controller() {
        let mut ctl = afternoon();
        ctl.add_request("Oliver", Floor(3), Floor(6)).unwrap();
        ctl.add_request("Angela", Floor(1), Floor(5)).unwrap();

        let summary = ctl.dispatch(DispatchStrategy::Scan).unwrap();
        assert_eq!(summary.moves, 6);
        assert_eq!(summary.stops, 4);
        assert_eq!(summary.final_floor, Floor(6));
        assert!(ctl.car().is_idle());
    }

    #[test]
    fn step_budget_is_enforced() {
        let mut ctl = afternoon().with_step_budget(StepBudget::Max(2));
        ctl.add_request("Max", Floor(8), Floor(2)).unwrap();

        let err = ctl.dispatch(DispatchStrategy::Scan).unwrap_err();
        assert!(matches!(
            err,
            ControlError::Dispatch(SimError::StepBudgetExhausted { limit: 2 })
        ));
    }

    #[test]
    fn lobby_return_follows_the_injected_clock() {
        let mut ctl = morning();
        ctl.add_request("Ann", Floor(2), Floor(5)).unwrap();
        ctl.dispatch(DispatchStrategy::Scan).unwrap();
        assert_eq!(ctl.car().floor(), Floor(5));

        assert!(ctl.should_return_to_lobby());
        ctl.return_to_lobby();
        assert_eq!(ctl.car().floor(), Floor::GROUND);

        let mut ctl = afternoon();
        ctl.add_request("Ann", Floor(2), Floor(5)).unwrap();
        ctl.dispatch(DispatchStrategy::Scan).unwrap();
        assert!(!ctl.should_return_to_lobby());
    }

    #[test]
    fn reset_scopes_pass_through() {
        let mut ctl = afternoon();
        ctl.add_request("Ann", Floor(1), Floor(5)).unwrap();
        ctl.add_request("Ben", Floor(2), Floor(6)).unwrap();
        ctl.jump_to_floor(Floor(3));

        ctl.reset(ResetScope::KeepPending);
        assert_eq!(ctl.car().requests().len(), 2);
        assert_eq!(ctl.car().floors_traversed(), 0);

        ctl.reset(ResetScope::Full);
        assert!(ctl.car().is_idle());
    }
}

// ── Snapshot wire format ──────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use super::*;

    #[test]
    fn serializes_with_the_legacy_field_names() {
        let mut ctl = morning();
        ctl.add_request("Oliver", Floor(3), Floor(6)).unwrap();
        ctl.add_request("Angela", Floor(1), Floor(5)).unwrap();
        ctl.board("Angela").unwrap();

        let json = serde_json::to_value(ctl.snapshot()).unwrap();
        assert_eq!(json["currentFloor"], 0);
        assert_eq!(json["stops"], 0);
        assert_eq!(json["floorsTraversed"], 0);
        assert_eq!(json["requests"][0]["name"], "Oliver");
        assert_eq!(json["requests"][0]["currentFloor"], 3);
        assert_eq!(json["requests"][0]["dropOffFloor"], 6);
        assert_eq!(json["riders"][0]["name"], "Angela");
    }

    #[test]
    fn json_round_trip() {
        let mut ctl = morning();
        ctl.add_request("Ann", Floor(2), Floor(8)).unwrap();
        let snap = ctl.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: crate::CarSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const GOOD_CSV: &str = "\
name,currentFloor,dropOffFloor
Oliver,3,6
Angela,1,5
Max,8,2
";

    #[test]
    fn queues_every_row() {
        let mut ctl = morning();
        let queued = load_requests_reader(Cursor::new(GOOD_CSV), &mut ctl).unwrap();
        assert_eq!(queued, 3);

        let names: Vec<&str> = ctl
            .car()
            .requests()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Oliver", "Angela", "Max"]);
    }

    #[test]
    fn loaded_requests_dispatch_normally() {
        let mut ctl = afternoon();
        load_requests_reader(Cursor::new(GOOD_CSV), &mut ctl).unwrap();
        let summary = ctl.dispatch(DispatchStrategy::Scan).unwrap();
        assert!(ctl.car().is_idle());
        assert!(summary.moves > 0);
    }

    #[test]
    fn bad_rows_fail_validation_keeping_earlier_rows() {
        let csv = "\
name,currentFloor,dropOffFloor
Oliver,3,6
Ann,4,4
";
        let mut ctl = morning();
        let err = load_requests_reader(Cursor::new(csv), &mut ctl).unwrap_err();
        assert!(matches!(err, ControlError::SameFloorTrip { .. }));
        assert_eq!(ctl.car().requests().len(), 1);
    }

    #[test]
    fn malformed_numbers_surface_as_parse_errors() {
        let csv = "\
name,currentFloor,dropOffFloor
Oliver,three,6
";
        let mut ctl = morning();
        let err = load_requests_reader(Cursor::new(csv), &mut ctl).unwrap_err();
        assert!(matches!(err, ControlError::Parse(_)));
    }
}
