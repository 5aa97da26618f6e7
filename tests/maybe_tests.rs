//! Unit tests for Maybe<T>.
//!
//! Maybe holds either a value (`Present`) or nothing (`Empty`):
//! - every transformation on `Empty` is skipped
//! - raw nullable values are classified through `IntoMaybe`
//! - `get_or_else` is the only way out of the container

#![cfg(feature = "control")]

use railway::control::{Either, IntoMaybe, Maybe};
use rstest::rstest;
use std::cell::Cell;
use std::collections::HashMap;

// =============================================================================
// Construction and Classification
// =============================================================================

#[rstest]
fn maybe_new_with_some_is_present() {
    let maybe = Maybe::new(Some("value"));
    assert!(maybe.is_present());
    assert!(!maybe.is_absent());
}

#[rstest]
fn maybe_new_with_none_is_absent() {
    let maybe: Maybe<&str> = Maybe::new(None);
    assert!(maybe.is_absent());
}

#[rstest]
fn maybe_empty_is_absent() {
    let maybe: Maybe<i32> = Maybe::empty();
    assert!(maybe.is_absent());
    assert_eq!(maybe.value(), None);
}

#[rstest]
fn maybe_from_option_matches_new() {
    assert_eq!(Maybe::from(Some(1)), Maybe::new(Some(1)));
    assert_eq!(Maybe::<i32>::from(None), Maybe::new(None));
}

#[rstest]
fn option_into_maybe_classifies() {
    assert_eq!(Some(2).into_maybe(), Maybe::present(2));
    assert_eq!(Option::<i32>::None.into_maybe(), Maybe::empty());
}

// =============================================================================
// map / map_nullable
// =============================================================================

#[rstest]
fn maybe_map_transforms_present_value() {
    assert_eq!(Maybe::present(3).map(|n| n * 3), Maybe::present(9));
}

#[rstest]
fn maybe_map_propagates_empty() {
    let empty: Maybe<i32> = Maybe::empty();
    assert_eq!(empty.map(|n| n * 3), Maybe::empty());
}

#[rstest]
fn maybe_map_nullable_collapses_missing_field() {
    let record: HashMap<&str, &str> = HashMap::from([("name", "foo")]);

    let mail = Maybe::present(&record).map_nullable(|user| user.get("mail").copied());

    assert!(mail.is_absent());
}

#[rstest]
fn maybe_map_nullable_keeps_found_field() {
    let record: HashMap<&str, &str> = HashMap::from([("name", "foo"), ("mail", "bar@example.com")]);

    let mail = Maybe::present(&record).map_nullable(|user| user.get("mail").copied());

    assert_eq!(mail, Maybe::present("bar@example.com"));
}

#[rstest]
fn maybe_map_nullable_accepts_maybe_results() {
    let result = Maybe::present(4).map_nullable(|n| {
        if n > 3 { Maybe::present(n) } else { Maybe::empty() }
    });
    assert_eq!(result, Maybe::present(4));
}

// =============================================================================
// flatten / chain
// =============================================================================

#[rstest]
#[case(Maybe::present(Maybe::present(1)), Maybe::present(1))]
#[case(Maybe::present(Maybe::empty()), Maybe::empty())]
#[case(Maybe::empty(), Maybe::empty())]
fn maybe_flatten_unwraps_one_level(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
    assert_eq!(nested.flatten(), expected);
}

#[rstest]
fn maybe_chain_equals_map_then_flatten() {
    let function = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::empty() };

    for value in [Maybe::present(4), Maybe::present(3), Maybe::empty()] {
        assert_eq!(value.chain(function), value.map(function).flatten());
    }
}

#[rstest]
fn maybe_chain_stops_after_first_empty() {
    let calls = Cell::new(0);
    let step = |n: i32| {
        calls.set(calls.get() + 1);
        if n > 0 { Maybe::present(n - 1) } else { Maybe::empty() }
    };

    let result = Maybe::present(1).chain(step).chain(step).chain(step).chain(step);

    assert!(result.is_absent());
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Extraction and Conversion
// =============================================================================

#[rstest]
#[case(Maybe::present("mail"), "mail")]
#[case(Maybe::empty(), "no mail")]
fn maybe_get_or_else(#[case] maybe: Maybe<&'static str>, #[case] expected: &str) {
    assert_eq!(maybe.get_or_else("no mail"), expected);
}

#[rstest]
fn maybe_get_or_else_with_computes_default_when_empty() {
    let empty: Maybe<String> = Maybe::empty();
    assert_eq!(empty.get_or_else_with(|| "computed".to_string()), "computed");
}

#[rstest]
fn maybe_ok_or_crosses_into_either() {
    assert_eq!(Maybe::present(1).ok_or("missing"), Either::Right(1));
    assert_eq!(Maybe::<i32>::empty().ok_or("missing"), Either::Left("missing"));
}

#[rstest]
fn maybe_into_option_round_trip() {
    let option: Option<i32> = Maybe::present(5).into();
    assert_eq!(option, Some(5));
    assert_eq!(Maybe::<i32>::empty().into_option(), None);
}

#[rstest]
fn maybe_as_ref_leaves_original_usable() {
    let maybe = Maybe::present(vec![1, 2, 3]);
    let length = maybe.as_ref().map(Vec::len);

    assert_eq!(length, Maybe::present(3));
    assert_eq!(maybe.get_or_else(Vec::new()), vec![1, 2, 3]);
}
