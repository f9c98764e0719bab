use crate::{for_each_tap, range_to, repeat, SequenceExt};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

// =============================================================================
// for_each_tap() Tests
// =============================================================================

#[test]
fn test_tap_yields_source_unchanged() {
    let calls = Cell::new(0);
    let values: Vec<i32> =
        for_each_tap([1, 2, 3], Some(|_: &i32| calls.set(calls.get() + 1))).collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_tap_without_action() {
    let values: Vec<i32> = for_each_tap([1, 2, 3], None::<fn(&i32)>).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_tap_runs_action_before_element_is_observed() {
    let log = RefCell::new(Vec::<String>::new());
    let tapped = for_each_tap(
        [1, 2, 3],
        Some(|x: &i32| log.borrow_mut().push(format!("tap {x}"))),
    );
    for x in tapped {
        log.borrow_mut().push(format!("see {x}"));
    }
    assert_eq!(
        log.into_inner(),
        vec!["tap 1", "see 1", "tap 2", "see 2", "tap 3", "see 3"]
    );
}

#[test]
fn test_tap_is_lazy() {
    let calls = Cell::new(0);
    let mut tapped = [1, 2, 3].into_iter().tap(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);

    assert_eq!(tapped.next(), Some(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_tap_abandoned_early_skips_remaining_actions() {
    let seen = RefCell::new(Vec::new());
    let first_two: Vec<i32> = range_to(1, 100)
        .tap(|x| seen.borrow_mut().push(*x))
        .take(2)
        .collect();
    assert_eq!(first_two, vec![1, 2]);
    assert_eq!(seen.into_inner(), vec![1, 2]);
}

#[test]
fn test_tap_forwards_exact_size() {
    let tapped = vec![1, 2, 3].into_iter().tap(|_| {});
    assert_eq!(tapped.len(), 3);
    assert_eq!(tapped.size_hint(), (3, Some(3)));
}

#[test]
fn test_tap_debug_format() {
    let with_action = for_each_tap([1], Some(|_: &i32| {}));
    let debug_str = format!("{:?}", with_action);
    assert!(debug_str.contains("Tap"));
    assert!(debug_str.contains("has_action: true"));

    let without_action = for_each_tap([1], None::<fn(&i32)>);
    assert!(format!("{:?}", without_action).contains("has_action: false"));
}

// =============================================================================
// repeat() Tests
// =============================================================================

#[test]
fn test_repeat_three_times() {
    let values: Vec<i32> = repeat([1, 2], 3).collect();
    assert_eq!(values, vec![1, 2, 1, 2, 1, 2]);
}

#[test]
fn test_repeat_zero_times_is_empty() {
    let values: Vec<i32> = repeat([1, 2], 0).collect();
    assert!(values.is_empty());
}

#[test]
fn test_repeat_zero_times_never_touches_source() {
    let calls = Cell::new(0);
    let source = range_to(1, 3).tap(|_| calls.set(calls.get() + 1));
    assert_eq!(repeat(source, 0).count(), 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_repeat_empty_source() {
    let values: Vec<i32> = repeat(Vec::<i32>::new(), 5).collect();
    assert!(values.is_empty());
}

#[test]
fn test_repeat_once_is_identity() {
    let values: Vec<&str> = repeat(["a", "b", "c"], 1).collect();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn test_repeat_traverses_source_afresh_each_pass() {
    let calls = Cell::new(0);
    let source = range_to(1, 2).tap(|_| calls.set(calls.get() + 1));
    let values: Vec<i32> = repeat(source, 3).collect();
    assert_eq!(values, vec![1, 2, 1, 2, 1, 2]);
    assert_eq!(calls.get(), 6);
}

#[test]
fn test_repeat_is_lazy() {
    let calls = Cell::new(0);
    let source = range_to(1, 1_000).tap(|_| calls.set(calls.get() + 1));
    let first: Vec<i32> = repeat(source, 1_000).take(3).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_repeat_stays_exhausted() {
    let mut repeated = repeat([7], 2);
    assert_eq!(repeated.next(), Some(7));
    assert_eq!(repeated.next(), Some(7));
    assert_eq!(repeated.next(), None);
    assert_eq!(repeated.next(), None);
}

#[test]
fn test_repeat_size_hint() {
    let mut repeated = repeat([1, 2, 3], 2);
    assert_eq!(repeated.size_hint(), (6, Some(6)));
    repeated.next();
    assert_eq!(repeated.size_hint(), (5, Some(5)));
    repeated.next();
    repeated.next();
    assert_eq!(repeated.size_hint(), (3, Some(3)));
    repeated.by_ref().for_each(drop);
    assert_eq!(repeated.size_hint(), (0, Some(0)));

    assert_eq!(repeat([1, 2, 3], 0).size_hint(), (0, Some(0)));
    assert_eq!(repeat([1, 2], usize::MAX).size_hint(), (usize::MAX, None));
}

#[test]
fn test_repeat_times_method() {
    let text: String = "ab".chars().repeat_times(3).collect();
    assert_eq!(text, "ababab");
}

// =============================================================================
// Re-traversal Tests
// =============================================================================

#[test]
fn test_identical_calls_are_independent() {
    let mut first = repeat([1, 2], 2);
    let second = repeat([1, 2], 2);
    assert_eq!(first.next(), Some(1));
    assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 1, 2]);
    assert_eq!(first.collect::<Vec<_>>(), vec![2, 1, 2]);
}

#[test]
fn test_clone_replays_unstarted_adapters() {
    let repeated = repeat(range_to(3, 1), 2);
    assert_eq!(
        repeated.clone().collect::<Vec<_>>(),
        repeated.collect::<Vec<_>>()
    );
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn repeat_matches_flattened_copies(source in prop::collection::vec(any::<i32>(), 0..20), times in 0usize..10) {
            let ours: Vec<i32> = repeat(source.clone(), times).collect();
            let expected: Vec<i32> = (0..times).flat_map(|_| source.iter().copied()).collect();
            prop_assert_eq!(ours, expected);
        }

        #[test]
        fn repeat_size_hint_is_exact(source in prop::collection::vec(any::<u8>(), 0..20), times in 0usize..10, skip in 0usize..50) {
            let mut repeated = repeat(source, times);
            for _ in 0..skip {
                repeated.next();
            }
            let (low, high) = repeated.size_hint();
            let count = repeated.count();
            prop_assert_eq!(low, count);
            prop_assert_eq!(high, Some(count));
        }

        #[test]
        fn tap_observes_every_element_once(source in prop::collection::vec(any::<i64>(), 0..50)) {
            let seen = RefCell::new(Vec::new());
            let out: Vec<i64> = source.clone().into_iter().tap(|x| seen.borrow_mut().push(*x)).collect();
            prop_assert_eq!(&out, &source);
            prop_assert_eq!(seen.into_inner(), source);
        }
    }
}
