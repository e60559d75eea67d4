//! scanbench — compares SCAN dispatch against the FCFS baseline.
//!
//! Runs the four canonical two-person scenarios plus a seeded random batch
//! through both strategies, logs the per-scenario traversal counts, writes
//! a `results.csv`, and finishes with a controller round trip that prints
//! the final state snapshot as JSON.
//!
//! Usage: `scanbench [output-dir]` (default `output/`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use lift_control::CarController;
use lift_core::{Floor, Person, SimRng};
use lift_sim::{
    CarObserver, Direction, DispatchStrategy, ElevatorCar, StepBudget,
    scenario::random_batch,
};

const RANDOM_SEED:        u64 = 42;
const RANDOM_BATCH_SIZE:  usize = 10;
const RANDOM_TOP_FLOOR:   u32 = 15;

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn person(name: &str, from: u32, to: u32) -> Person {
    Person::new(name, Floor(from), Floor(to))
}

fn scenarios() -> Vec<(String, Vec<Person>)> {
    let mut all = vec![
        ("both-up".to_owned(), vec![person("Oliver", 3, 6), person("Angela", 1, 5)]),
        ("up-down".to_owned(), vec![person("Beverly", 3, 6), person("James", 5, 1)]),
        ("down-up".to_owned(), vec![person("Jeanne", 7, 1), person("Karl", 2, 8)]),
        ("both-down".to_owned(), vec![person("Max", 8, 2), person("Charlie", 5, 0)]),
    ];

    let mut rng = SimRng::new(RANDOM_SEED);
    all.push((
        format!("random-{RANDOM_BATCH_SIZE}@seed{RANDOM_SEED}"),
        random_batch(&mut rng, RANDOM_BATCH_SIZE, RANDOM_TOP_FLOOR),
    ));
    all
}

// ── Per-run measurement ───────────────────────────────────────────────────────

struct RunResult {
    moves:       u64,
    stops:       u32,
    final_floor: Floor,
}

/// Logs each serviced stop at debug level.
struct StopLogger;

impl CarObserver for StopLogger {
    fn on_move(&mut self, direction: Direction, floor: Floor) {
        log::trace!("move {direction:?} to {floor}");
    }

    fn on_stop(&mut self, floor: Floor, boarded: usize, alighted: usize) {
        log::debug!("stop at {floor}: +{boarded} aboard, -{alighted} delivered");
    }
}

fn run(batch: &[Person], strategy: DispatchStrategy) -> Result<RunResult> {
    let mut car = ElevatorCar::new();
    for p in batch {
        car.add_request(p.clone());
    }
    let summary = car.dispatch(strategy, StepBudget::Unbounded, &mut StopLogger)?;
    Ok(RunResult {
        moves:       summary.moves,
        stops:       summary.stops,
        final_floor: summary.final_floor,
    })
}

// ── Results CSV ───────────────────────────────────────────────────────────────

fn write_results(
    path: &Path,
    rows: &[(String, &'static str, RunResult)],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["scenario", "strategy", "moves", "stops", "final_floor"])?;
    for (scenario, strategy, result) in rows {
        writer.write_record(&[
            scenario.clone(),
            (*strategy).to_owned(),
            result.moves.to_string(),
            result.stops.to_string(),
            result.final_floor.0.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "output".to_owned())
        .into();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rows = Vec::new();
    let mut scan_total = 0u64;
    let mut fcfs_total = 0u64;

    for (label, batch) in scenarios() {
        let swept = run(&batch, DispatchStrategy::Scan)?;
        let naive = run(&batch, DispatchStrategy::Fcfs)?;

        info!(
            "{label}: SCAN {} moves / {} stops, FCFS {} moves / {} stops",
            swept.moves, swept.stops, naive.moves, naive.stops,
        );
        scan_total += swept.moves;
        fcfs_total += naive.moves;
        rows.push((label.clone(), "scan", swept));
        rows.push((label, "fcfs", naive));
    }

    info!(
        "totals: SCAN {scan_total} moves vs FCFS {fcfs_total} moves ({} saved)",
        fcfs_total.saturating_sub(scan_total),
    );

    let results_path = out_dir.join("results.csv");
    write_results(&results_path, &rows)?;
    info!("wrote {}", results_path.display());

    // Controller round trip: the boundary interface an HTTP layer would use.
    let mut controller = CarController::with_system_clock();
    controller.add_request("Oliver", Floor(3), Floor(6))?;
    controller.add_request("Angela", Floor(1), Floor(5))?;
    let summary = controller.dispatch(DispatchStrategy::Scan)?;
    info!("controller dispatch: {} moves, ended at {}", summary.moves, summary.final_floor);

    if controller.should_return_to_lobby() {
        info!("before noon with an empty car: returning to the lobby");
        controller.return_to_lobby();
    }

    println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    Ok(())
}
