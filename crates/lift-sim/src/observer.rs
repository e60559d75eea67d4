//! Dispatch observer trait for progress reporting and data collection.

use lift_core::Floor;

use crate::DispatchSummary;

/// Direction of a single-floor move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
}

/// Callbacks invoked by the dispatch loops at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl CarObserver for MovePrinter {
///     fn on_move(&mut self, dir: Direction, floor: Floor) {
///         println!("{dir:?} to {floor}");
///     }
/// }
/// ```
pub trait CarObserver {
    /// Called after every single-floor move the dispatcher makes.
    fn on_move(&mut self, _direction: Direction, _floor: Floor) {}

    /// Called once per serviced stop, after boarding and discharging.
    ///
    /// `boarded` and `alighted` are the number of people who entered and
    /// left the car at this floor.
    fn on_stop(&mut self, _floor: Floor, _boarded: usize, _alighted: usize) {}

    /// Called once when a dispatch or single-trip operation completes.
    fn on_idle(&mut self, _summary: &DispatchSummary) {}
}

/// A [`CarObserver`] that does nothing.  Use when you need to dispatch but
/// don't want progress callbacks.
pub struct NoopObserver;

impl CarObserver for NoopObserver {}
