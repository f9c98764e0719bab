use alloc::string::String;
use core::fmt;
use core::iter::FusedIterator;

use crate::join::{self, JoinOptions};
use crate::trace;

/// Iterator that runs a callback on each element as it is pulled.
///
/// Created by [`for_each_tap`] or [`SequenceExt::tap`]. The callback for an
/// element runs before that element is handed to the consumer, and never for
/// elements the consumer does not pull.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Tap<I, F> {
    iter: I,
    action: Option<F>,
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        if let Some(action) = &mut self.action {
            action(&item);
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> ExactSizeIterator for Tap<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item),
{
}

impl<I, F> FusedIterator for Tap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

impl<I: fmt::Debug, F> fmt::Debug for Tap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tap")
            .field("iter", &self.iter)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Iterator that replays its source a fixed number of times.
///
/// Created by [`repeat`] or [`SequenceExt::repeat_times`]. Every pass
/// traverses a fresh clone of the unstarted source, so the source iterator
/// must produce the same elements each time it is cloned. An endless source
/// never gets past its first pass.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<I> {
    source: I,
    pass: Option<I>,
    passes_left: usize,
}

impl<I: Iterator + Clone> Iterator for Repeat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(pass) = &mut self.pass {
                if let Some(item) = pass.next() {
                    return Some(item);
                }
                self.pass = None;
            }
            if self.passes_left == 0 {
                return None;
            }
            self.passes_left -= 1;
            trace::repeat_pass(self.passes_left);
            self.pass = Some(self.source.clone());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (pass_low, pass_high) = self
            .pass
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        if self.passes_left == 0 {
            return (pass_low, pass_high);
        }

        let (source_low, source_high) = self.source.size_hint();
        let low = source_low
            .saturating_mul(self.passes_left)
            .saturating_add(pass_low);
        let high = match (source_high, pass_high) {
            (Some(source_high), Some(pass_high)) => source_high
                .checked_mul(self.passes_left)
                .and_then(|rest| rest.checked_add(pass_high)),
            _ => None,
        };
        (low, high)
    }
}

impl<I: Iterator + Clone> FusedIterator for Repeat<I> {}

/// Returns `source` unchanged, calling `action` on each element just before
/// it is yielded. A `None` action makes this a plain pass-through.
///
/// # Examples
/// ```
/// use lazy_seq::for_each_tap;
///
/// let mut seen = Vec::new();
/// let doubled: Vec<_> = for_each_tap([1, 2, 3], Some(|x: &i32| seen.push(*x)))
///     .map(|x| x * 2)
///     .collect();
///
/// assert_eq!(doubled, [2, 4, 6]);
/// assert_eq!(seen, [1, 2, 3]);
/// ```
#[inline]
pub fn for_each_tap<I, F>(source: I, action: Option<F>) -> Tap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item),
{
    Tap {
        iter: source.into_iter(),
        action,
    }
}

/// Returns `source` repeated `times` times back to back.
///
/// `times == 0` yields nothing and never touches `source`.
///
/// # Examples
/// ```
/// use lazy_seq::repeat;
///
/// assert_eq!(repeat([1, 2], 3).collect::<Vec<_>>(), [1, 2, 1, 2, 1, 2]);
/// assert_eq!(repeat([1, 2], 0).count(), 0);
/// ```
#[inline]
pub fn repeat<I>(source: I, times: usize) -> Repeat<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    Repeat {
        source: source.into_iter(),
        pass: None,
        passes_left: times,
    }
}

/// Sequence helpers as methods on every [`Iterator`].
///
/// ```
/// use lazy_seq::SequenceExt;
///
/// let text = (1..=3).repeat_times(2).join_quoted("|", "<", ">");
/// assert_eq!(text, "<1>|<2>|<3>|<1>|<2>|<3>");
/// ```
pub trait SequenceExt: Iterator {
    /// See [`for_each_tap`].
    #[inline]
    fn tap<F>(self, action: F) -> Tap<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        for_each_tap(self, Some(action))
    }

    /// See [`repeat`].
    #[inline]
    fn repeat_times(self, times: usize) -> Repeat<Self>
    where
        Self: Sized + Clone,
    {
        repeat(self, times)
    }

    /// See [`join_to_string`](crate::join_to_string).
    fn join_to_string(self, options: &JoinOptions<'_, Self::Item>) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join::join_to_string(self, options)
    }

    /// Joins the elements' `Display` output with `glue`.
    fn join_with(self, glue: &str) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join::join_to_string(self, &JoinOptions::new().glue(glue))
    }

    /// Joins the elements with `glue`, wrapping each in `prefix` and `suffix`.
    fn join_quoted(self, glue: &str, prefix: &str, suffix: &str) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join::join_to_string(self, &JoinOptions::new().glue(glue).quotes(prefix, suffix))
    }

    /// Joins the strings `formatter` produces for each element with `glue`.
    ///
    /// Unlike the other join methods this does not need `Self::Item: Display`.
    fn join_formatted<F>(self, glue: &str, formatter: F) -> String
    where
        Self: Sized,
        F: Fn(&Self::Item) -> String,
    {
        join::join_formatted(self, glue, formatter)
    }
}

impl<I: Iterator> SequenceExt for I {}
