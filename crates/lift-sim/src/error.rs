use thiserror::Error;

/// Errors that can occur while driving the car.
///
/// Dispatch has no failure paths of its own; the only error is the optional
/// step budget running dry.  With [`StepBudget::Unbounded`] every dispatch
/// call is infallible.
///
/// [`StepBudget::Unbounded`]: crate::StepBudget::Unbounded
#[derive(Debug, Error)]
pub enum SimError {
    #[error("dispatch exceeded its step budget of {limit} moves")]
    StepBudgetExhausted { limit: u64 },
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
