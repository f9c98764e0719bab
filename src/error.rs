use thiserror::Error;

/// Reasons a stepped range cannot reach its bound.
///
/// Only [`try_range_to_step`](crate::try_range_to_step) reports these;
/// [`range_to_step`](crate::range_to_step) yields an empty range instead.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError<T> {
    /// The step is zero, so the range would never advance.
    #[error("step must not be zero")]
    ZeroStep,

    /// The step points away from `end`.
    #[error("step {step} moves away from {end} when starting at {start}")]
    WrongDirection {
        /// First value of the rejected range.
        start: T,

        /// Bound of the rejected range.
        end: T,

        /// The offending step.
        step: T,
    },
}

impl<T> StepError<T> {
    /// Short static description, without the values involved.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ZeroStep => "zero step",
            Self::WrongDirection { .. } => "step points away from end",
        }
    }
}
