#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use lazy_seq::{JoinOptions, RangeExt, SequenceExt};
//!
//! // Inclusive ranges pick their direction from the endpoints
//! assert_eq!(1i32.to(4).collect::<Vec<_>>(), [1, 2, 3, 4]);
//! assert_eq!(4i32.to(1).collect::<Vec<_>>(), [4, 3, 2, 1]);
//!
//! // Explicit steps must point toward the end, otherwise the range is empty
//! assert_eq!(10i32.to_step(1, -3).collect::<Vec<_>>(), [10, 7, 4, 1]);
//! assert_eq!(1i32.to_step(10, -3).count(), 0);
//!
//! // Sequences can be tapped, repeated and joined
//! let mut taps = 0;
//! let text = [1, 2]
//!     .into_iter()
//!     .repeat_times(2)
//!     .tap(|_| taps += 1)
//!     .join_to_string(&JoinOptions::new().glue(" ").quotes("<", ">"));
//!
//! assert_eq!(text, "<1> <2> <1> <2>");
//! assert_eq!(taps, 4);
//! ```
//!
//! # Laziness
//!
//! Everything except joining is an ordinary [`Iterator`]: nothing is computed
//! until a value is pulled, and a consumer that stops early leaves the rest of
//! the sequence untouched.
//!
//! ```rust
//! use lazy_seq::{range_to, SequenceExt};
//!
//! let mut visited = Vec::new();
//! let first_two: Vec<_> = range_to(1, 1_000_000)
//!     .tap(|x| visited.push(*x))
//!     .take(2)
//!     .collect();
//!
//! assert_eq!(first_two, [1, 2]);
//! assert_eq!(visited, [1, 2]);
//! ```
//!
//! # Restarting
//!
//! All iterators here are `Clone`. Cloning one that has not started yet gives
//! an independent traversal of the same values; [`repeat`] relies on this.
//!
//! ```rust
//! use lazy_seq::range_to_step;
//!
//! let evens = range_to_step(0, 8, 2);
//! let first: Vec<_> = evens.clone().collect();
//! let second: Vec<_> = evens.collect();
//! assert_eq!(first, second);
//! ```
//!
//! # Features
//!
//! - `tracing`: emits `trace`-level events through the `tracing` crate when a
//!   stepped range is rejected and when [`Repeat`] starts a pass.

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod join;
mod range;
mod sequence;
mod trace;

pub use error::StepError;
pub use join::{join_to_string, write_joined, JoinOptions, OrNull, DEFAULT_GLUE};
pub use range::{
    range_to, range_to_step, try_range_to_step, InclusiveRange, RangeExt, SteppedRange,
};
pub use sequence::{for_each_tap, repeat, Repeat, SequenceExt, Tap};

#[cfg(test)]
#[path = "tests/range_tests.rs"]
mod range_tests;

#[cfg(test)]
#[path = "tests/sequence_tests.rs"]
mod sequence_tests;

#[cfg(test)]
#[path = "tests/join_tests.rs"]
mod join_tests;
