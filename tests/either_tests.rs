//! Unit tests for Either<L, R>.
//!
//! Either carries a success (`Right`) or a failure (`Left`):
//! - `map`, `chain` and `flatten` skip `Left`
//! - `catch` is the only transition from `Left` to `Right`
//! - `map` and `catch` keep a `Right` on the success track
//! - `chain` and `flatten` surface a `Left` produced by the step

#![cfg(feature = "control")]

use railway::control::{Either, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert!(!value.is_left());
}

// =============================================================================
// Value Access
// =============================================================================

#[rstest]
fn either_left_extraction() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.left_ref(), Some(&42));
    assert_eq!(value.left(), Some(42));
}

#[rstest]
fn either_right_extraction_from_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.right_ref(), None);
    assert_eq!(value.right(), None);
}

#[rstest]
fn either_into_inner_reads_either_side() {
    let left: Either<&str, &str> = Either::Left("failure");
    let right: Either<&str, &str> = Either::Right("success");

    assert_eq!(left.into_inner(), "failure");
    assert_eq!(right.into_inner(), "success");
}

#[rstest]
fn either_fold_eliminates_both_variants() {
    let left: Either<i32, String> = Either::Left(42);
    let right: Either<i32, String> = Either::Right("hello".to_string());

    assert_eq!(left.fold(|n| n.to_string(), |s| s), "42");
    assert_eq!(right.fold(|n: i32| n.to_string(), |s| s), "hello");
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn either_map_on_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.map(|s| s.len()), Either::Right(5));
}

#[rstest]
fn either_left_absorbs_map() {
    let value: Either<i32, String> = Either::Left(42);
    let result = value.map(|s: String| s.len()).map(|n| n * 2);
    assert_eq!(result, Either::Left(42));
}

#[rstest]
fn either_map_left_keeps_variant() {
    let value: Either<i32, String> = Either::Left(42);
    assert_eq!(value.map_left(|n| n + 1), Either::Left(43));
}

// =============================================================================
// flatten / flatten_payload / chain
// =============================================================================

#[rstest]
#[case(Either::Right(Either::Right(1)), Either::Right(1))]
#[case(Either::Right(Either::Left("inner")), Either::Left("inner"))]
#[case(Either::Left("outer"), Either::Left("outer"))]
fn either_flatten(
    #[case] nested: Either<&'static str, Either<&'static str, i32>>,
    #[case] expected: Either<&'static str, i32>,
) {
    assert_eq!(nested.flatten(), expected);
}

#[rstest]
#[case(Either::Right(Either::Right(1)), Either::Right(1))]
#[case(Either::Right(Either::Left(2)), Either::Right(2))]
#[case(Either::Left("outer"), Either::Left("outer"))]
fn either_flatten_payload_takes_inner_value(
    #[case] nested: Either<&'static str, Either<i32, i32>>,
    #[case] expected: Either<&'static str, i32>,
) {
    assert_eq!(nested.flatten_payload(), expected);
}

#[rstest]
fn either_chain_equals_map_then_flatten() {
    let function = |n: i32| {
        if n >= 0 { Either::Right(n * 10) } else { Either::Left("negative") }
    };

    for value in [Either::Right(2), Either::Right(-2), Either::Left("earlier")] {
        assert_eq!(value.chain(function), value.map(function).flatten());
    }
}

#[rstest]
fn either_chain_stops_at_first_failure() {
    let calls = Cell::new(0);
    let step = |n: i32| {
        calls.set(calls.get() + 1);
        if n > 0 { Either::Right(n - 1) } else { Either::Left(format!("stopped at {n}")) }
    };

    let result = Either::Right(1).chain(step).chain(step).chain(step);

    assert_eq!(result, Either::Left("stopped at 0".to_string()));
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// catch
// =============================================================================

#[rstest]
fn either_right_is_immune_to_catch() {
    let handler_calls = Cell::new(0);
    let value: Either<String, i32> = Either::Right(2);

    let result = value.map(|n| n * 5).catch(|_| {
        handler_calls.set(handler_calls.get() + 1);
        0
    });

    assert_eq!(result, Either::Right(10));
    assert_eq!(handler_calls.get(), 0);
}

#[rstest]
fn either_catch_recovers_left() {
    let value: Either<String, usize> = Either::Left("Invalid mail".to_string());
    assert_eq!(value.catch(|error| error.len()), Either::Right(12));
}

#[rstest]
fn either_catch_resumes_success_track() {
    let value: Either<&str, i32> = Either::Left("bad");
    let result = value.catch(|_| 1).map(|n| n + 1).chain(|n| Either::Right(n * 10));
    assert_eq!(result, Either::Right(20));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn either_into_maybe_drops_failure() {
    let left: Either<&str, i32> = Either::Left("bad");
    let right: Either<&str, i32> = Either::Right(1);

    assert_eq!(left.into_maybe(), Maybe::empty());
    assert_eq!(right.into_maybe(), Maybe::present(1));
}

#[rstest]
fn either_from_result() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(42));
}

#[rstest]
fn either_into_result() {
    let value: Either<String, i32> = Either::Left("error".to_string());
    assert_eq!(value.into_result(), Err("error".to_string()));
}

#[rstest]
fn either_as_ref_keeps_variant() {
    let value: Either<String, Vec<u8>> = Either::Right(vec![1, 2]);
    assert_eq!(value.as_ref().map(Vec::len), Either::Right(2));
    assert!(value.is_right());
}
