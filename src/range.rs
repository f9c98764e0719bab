use core::fmt;
use core::iter::FusedIterator;

use num_traits::{PrimInt, Signed};

use crate::error::StepError;
use crate::trace;

/// Where a range generator is in its sequence.
///
/// `Emitting` holds the value handed out by the most recent pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor<T> {
    NotStarted,
    Emitting(T),
    Exhausted,
}

impl<T: Copy> Cursor<T> {
    #[inline]
    fn settle(&mut self, next: Option<T>) -> Option<T> {
        *self = next.map_or(Cursor::Exhausted, Cursor::Emitting);
        next
    }
}

/// Number of unit steps between `a` and `b`, or `None` if it does not fit a `u128`.
fn distance<T: PrimInt>(a: T, b: T) -> Option<u128> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    match (low.to_i128(), high.to_i128()) {
        (Some(low), Some(high)) => high.checked_sub(low).map(i128::unsigned_abs),
        _ => high.to_u128()?.checked_sub(low.to_u128()?),
    }
}

fn exact_hint(count: Option<u128>) -> (usize, Option<usize>) {
    match count {
        Some(count) => match usize::try_from(count) {
            Ok(count) => (count, Some(count)),
            Err(_) => (usize::MAX, None),
        },
        None => (0, None),
    }
}

/// Inclusive integer range whose direction is inferred from its endpoints.
///
/// Created by [`range_to`] or [`RangeExt::to`]. Ascends by one when
/// `start <= end` and descends by one otherwise. Both endpoints are yielded,
/// so the sequence always holds `|end - start| + 1` values.
///
/// Values are computed one pull at a time. Clone an unstarted range to
/// traverse the same sequence again.
///
/// # Examples
/// ```
/// use lazy_seq::range_to;
///
/// assert_eq!(range_to(1, 4).collect::<Vec<_>>(), [1, 2, 3, 4]);
/// assert_eq!(range_to(4, 1).collect::<Vec<_>>(), [4, 3, 2, 1]);
/// assert_eq!(range_to(5, 5).collect::<Vec<_>>(), [5]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct InclusiveRange<T> {
    start: T,
    end: T,
    cursor: Cursor<T>,
}

impl<T: PrimInt> InclusiveRange<T> {
    /// Returns the first value of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the last value of the range (inclusive).
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if the range counts down from `start` to `end`.
    #[inline]
    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    #[inline]
    fn advance(&self, current: T) -> Option<T> {
        // `current` lies strictly between the endpoints here, so the unit
        // step toward `end` cannot overflow.
        if current == self.end {
            None
        } else if self.is_descending() {
            Some(current - T::one())
        } else {
            Some(current + T::one())
        }
    }

    fn remaining(&self) -> Option<u128> {
        match self.cursor {
            Cursor::NotStarted => distance(self.start, self.end)?.checked_add(1),
            Cursor::Emitting(current) => distance(current, self.end),
            Cursor::Exhausted => Some(0),
        }
    }
}

impl<T: PrimInt> Iterator for InclusiveRange<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let next = match self.cursor {
            Cursor::NotStarted => Some(self.start),
            Cursor::Emitting(current) => self.advance(current),
            Cursor::Exhausted => None,
        };
        self.cursor.settle(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        exact_hint(self.remaining())
    }
}

impl<T: PrimInt> FusedIterator for InclusiveRange<T> {}

impl<T: PrimInt + fmt::Debug> fmt::Debug for InclusiveRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InclusiveRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Inclusive integer range advancing by an explicit signed step.
///
/// Created by [`range_to_step`], [`try_range_to_step`] or
/// [`RangeExt::to_step`]. Yields `start, start + step, start + 2 * step, ...`
/// while the value has not passed `end` in the direction of travel.
///
/// A zero step, or a step pointing away from `end`, yields nothing. A step
/// that would overflow `T` ends the sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct SteppedRange<T> {
    start: T,
    end: T,
    step: T,
    cursor: Cursor<T>,
}

impl<T: PrimInt + Signed> SteppedRange<T> {
    /// Returns the first value of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the bound of the range (inclusive).
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the step added between consecutive values.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Checks the step against the endpoints.
    ///
    /// A range that fails this check yields no values.
    pub fn validate(&self) -> Result<(), StepError<T>> {
        let zero = T::zero();
        if self.step == zero {
            return Err(StepError::ZeroStep);
        }
        let away = (self.start > self.end && self.step > zero)
            || (self.start < self.end && self.step < zero);
        if away {
            return Err(StepError::WrongDirection {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    #[inline]
    fn within_bound(&self, value: T) -> bool {
        if self.step.is_positive() {
            value <= self.end
        } else {
            value >= self.end
        }
    }

    #[inline]
    fn advance(&self, current: T) -> Option<T> {
        current
            .checked_add(&self.step)
            .filter(|&value| self.within_bound(value))
    }

    fn remaining(&self) -> Option<u128> {
        let stride = self.step.to_i128()?.unsigned_abs();
        match self.cursor {
            Cursor::NotStarted if self.validate().is_err() => Some(0),
            Cursor::NotStarted => (distance(self.start, self.end)? / stride).checked_add(1),
            Cursor::Emitting(current) => Some(distance(current, self.end)? / stride),
            Cursor::Exhausted => Some(0),
        }
    }
}

impl<T: PrimInt + Signed> Iterator for SteppedRange<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let next = match self.cursor {
            Cursor::NotStarted => self.validate().ok().map(|()| self.start),
            Cursor::Emitting(current) => self.advance(current),
            Cursor::Exhausted => None,
        };
        self.cursor.settle(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Exhausted => (0, Some(0)),
            _ => exact_hint(self.remaining()),
        }
    }
}

impl<T: PrimInt + Signed> FusedIterator for SteppedRange<T> {}

impl<T: PrimInt + fmt::Debug> fmt::Debug for SteppedRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteppedRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step", &self.step)
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Returns the inclusive range from `start` to `end`, counting down when
/// `start > end`.
#[inline]
pub fn range_to<T: PrimInt>(start: T, end: T) -> InclusiveRange<T> {
    InclusiveRange {
        start,
        end,
        cursor: Cursor::NotStarted,
    }
}

/// Returns the inclusive range from `start` toward `end` in increments of `step`.
///
/// Degenerate inputs produce an empty sequence rather than an error:
/// - `step == 0`
/// - `start > end` with a positive step
/// - `start < end` with a negative step
///
/// Use [`try_range_to_step`] to have those reported as a [`StepError`].
///
/// # Examples
/// ```
/// use lazy_seq::range_to_step;
///
/// assert_eq!(range_to_step(1, 10, 3).collect::<Vec<_>>(), [1, 4, 7, 10]);
/// assert_eq!(range_to_step(10, 1, -3).collect::<Vec<_>>(), [10, 7, 4, 1]);
/// assert_eq!(range_to_step(0, 5, 2).collect::<Vec<_>>(), [0, 2, 4]);
///
/// assert_eq!(range_to_step(1, 10, 0).count(), 0);
/// assert_eq!(range_to_step(10, 1, 3).count(), 0);
/// assert_eq!(range_to_step(1, 10, -3).count(), 0);
/// ```
pub fn range_to_step<T: PrimInt + Signed>(start: T, end: T, step: T) -> SteppedRange<T> {
    let range = SteppedRange {
        start,
        end,
        step,
        cursor: Cursor::NotStarted,
    };
    if let Err(error) = range.validate() {
        trace::step_rejected(error.reason());
    }
    range
}

/// Like [`range_to_step`], but rejects a zero step or a step pointing away
/// from `end` instead of returning an empty range.
///
/// # Examples
/// ```
/// use lazy_seq::{try_range_to_step, StepError};
///
/// let range = try_range_to_step(0, 6, 3).unwrap();
/// assert_eq!(range.collect::<Vec<_>>(), [0, 3, 6]);
///
/// assert_eq!(try_range_to_step(0, 6, 0).unwrap_err(), StepError::ZeroStep);
/// assert!(matches!(
///     try_range_to_step(0, 6, -1),
///     Err(StepError::WrongDirection { .. })
/// ));
/// ```
pub fn try_range_to_step<T: PrimInt + Signed>(
    start: T,
    end: T,
    step: T,
) -> Result<SteppedRange<T>, StepError<T>> {
    let range = SteppedRange {
        start,
        end,
        step,
        cursor: Cursor::NotStarted,
    };
    range.validate()?;
    Ok(range)
}

/// Range constructors as methods on the primitive integers.
///
/// ```
/// use lazy_seq::RangeExt;
///
/// assert_eq!(3u8.to(0).collect::<Vec<_>>(), [3, 2, 1, 0]);
/// assert_eq!((-4i64).to_step(4, 4).collect::<Vec<_>>(), [-4, 0, 4]);
/// ```
pub trait RangeExt: PrimInt {
    /// See [`range_to`].
    #[inline]
    fn to(self, end: Self) -> InclusiveRange<Self> {
        range_to(self, end)
    }

    /// See [`range_to_step`].
    #[inline]
    fn to_step(self, end: Self, step: Self) -> SteppedRange<Self>
    where
        Self: Signed,
    {
        range_to_step(self, end, step)
    }
}

impl<T: PrimInt> RangeExt for T {}
