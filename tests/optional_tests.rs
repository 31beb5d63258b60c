//! Unit tests for the Optional<T> type.
//!
//! Optional represents a value that may be missing:
//! - `Present(T)`: Contains exactly one value of type T
//! - `Absent`: Contains nothing
//!
//! It is the result of every pull of the iterator protocol.

use lazyseq::optional::{AbsentValueError, Optional};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn present_is_present() {
    let value = Optional::present(42);
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn absent_is_absent() {
    let value: Optional<String> = Optional::absent();
    assert!(value.is_absent());
    assert!(!value.is_present());
}

#[rstest]
fn default_is_absent() {
    assert_eq!(Optional::<i32>::default(), Optional::Absent);
}

#[rstest]
fn as_ref_does_not_consume() {
    let value = Optional::present(vec![1, 2, 3]);
    assert_eq!(value.as_ref().map(Vec::len), Optional::Present(3));
    assert_eq!(value, Optional::Present(vec![1, 2, 3]));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn unwrap_present() {
    assert_eq!(Optional::present("hello").unwrap(), "hello");
}

#[rstest]
#[should_panic(expected = "called `Optional::unwrap()` on an `Absent` value")]
fn unwrap_absent_panics() {
    let value: Optional<i32> = Optional::absent();
    value.unwrap();
}

#[rstest]
#[should_panic(expected = "no configuration loaded")]
fn expect_absent_panics_with_message() {
    let value: Optional<i32> = Optional::absent();
    value.expect("no configuration loaded");
}

#[rstest]
#[case(Optional::Present(1), 1)]
#[case(Optional::Absent, 99)]
fn unwrap_or(#[case] value: Optional<i32>, #[case] expected: i32) {
    assert_eq!(value.unwrap_or(99), expected);
}

#[rstest]
fn unwrap_or_else_is_lazy_when_present() {
    let calls = Cell::new(0);
    let result = Optional::present(5).unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(result, 5);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn unwrap_or_else_invokes_fallback_when_absent() {
    let calls = Cell::new(0);
    let result = Optional::absent().unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(result, 7);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn unwrap_or_default() {
    assert_eq!(Optional::<String>::absent().unwrap_or_default(), String::new());
    assert_eq!(Optional::present(3_u8).unwrap_or_default(), 3);
}

#[rstest]
fn try_unwrap_reports_absence_as_error() {
    assert_eq!(Optional::present(1).try_unwrap(), Ok(1));
    assert_eq!(Optional::<i32>::absent().try_unwrap(), Err(AbsentValueError));
}

#[rstest]
fn try_unwrap_composes_with_question_mark() {
    fn first_even(values: &[i32]) -> Result<i32, Box<dyn std::error::Error>> {
        let found: Optional<i32> = values.iter().copied().find(|x| x % 2 == 0).into();
        Ok(found.try_unwrap()? * 10)
    }

    assert_eq!(first_even(&[1, 4, 6]).unwrap(), 40);
    let error = first_even(&[1, 3]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "attempted to extract a value from an absent optional"
    );
}

#[rstest]
fn take_leaves_absent() {
    let mut slot = Optional::present(String::from("once"));
    assert_eq!(slot.take(), Optional::Present(String::from("once")));
    assert_eq!(slot.take(), Optional::Absent);
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_present() {
    assert_eq!(Optional::present(2).map(|x| x.to_string()), Optional::Present("2".to_string()));
}

#[rstest]
fn map_absent_does_not_call_function() {
    let calls = Cell::new(0);
    let result = Optional::<i32>::absent().map(|x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(result, Optional::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn and_then_chains() {
    let parse = |text: &str| Optional::from(text.parse::<i32>().ok());
    assert_eq!(Optional::present("12").and_then(parse), Optional::Present(12));
    assert_eq!(Optional::present("x").and_then(parse), Optional::Absent);
}

#[rstest]
#[case(Optional::Present(4), Optional::Present(4))]
#[case(Optional::Present(3), Optional::Absent)]
#[case(Optional::Absent, Optional::Absent)]
fn filter(#[case] value: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(value.filter(|x| x % 2 == 0), expected);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn ok_or() {
    assert_eq!(Optional::present(1).ok_or("missing"), Ok(1));
    assert_eq!(Optional::<i32>::absent().ok_or("missing"), Err("missing"));
}

#[rstest]
fn into_iterator_yields_zero_or_one() {
    let present: Vec<i32> = Optional::present(1).into_iter().collect();
    let absent: Vec<i32> = Optional::absent().into_iter().collect();
    assert_eq!(present, vec![1]);
    assert!(absent.is_empty());
}

#[rstest]
fn ordering_places_absent_first() {
    assert!(Optional::Absent < Optional::Present(i32::MIN));
}
