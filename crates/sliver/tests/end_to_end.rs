//! Integration test: the canonical slice scenarios end to end.
//!
//! Construct from a literal sequence, re-slice, copy into a made view,
//! and grow the absent view by appending.

use sliver::{view, View, ViewError};
use sliver_test_utils::{assert_view_eq, letters, LETTERS};

#[test]
fn subview_of_letters() {
    let got = letters().subview(1, 3);
    assert_eq!(got.len(), 2);
    assert_eq!(got.at(0), "b");
    assert_eq!(got.at(1), "c");
}

#[test]
fn copy_letters_into_made_view() {
    let from = letters();
    let to: View<&str> = View::make(3, 3);
    let n = from.copy_into(&to);
    assert_eq!(n, 3);
    assert_view_eq!(to, ["a", "b", "c"]);
}

#[test]
fn copy_subview_into_longer_dest_keeps_tail() {
    let from = letters().subview(1, 3);
    let to: View<&str> = View::make(3, 3);
    to.set(2, "z");
    assert_eq!(from.copy_into(&to), 2);
    assert_view_eq!(to, ["b", "c", "z"]);
}

#[test]
fn append_to_absent_then_outgrow() {
    let s: View<&str> = View::absent();
    assert_eq!(s.len(), 0);

    let s = s.append(&["a", "b", "c"]);
    assert_view_eq!(s, ["a", "b", "c"]);
    assert_eq!(s.cap(), 3);

    let t = s.append(&["d"]);
    assert_eq!(t.cap(), 8);
    assert!(t.cap() >= t.len());
    assert_view_eq!(t, ["a", "b", "c", "d"]);

    let u = t.append(&["e", "f", "g", "h", "i"]);
    assert_eq!(u.cap(), 18);
    assert_view_eq!(u, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
}

#[test]
fn macro_and_slice_constructors_agree() {
    let a = view!["a", "b", "c", "d", "e"];
    let b = View::from_slice(&LETTERS);
    assert_eq!(a, b);
    assert!(!a.shares_storage(&b));
}

#[test]
fn failed_operations_do_not_mutate() {
    let v = letters();
    assert_eq!(
        v.try_subview(2, 9).unwrap_err(),
        ViewError::EndOutOfRange { end: 9, cap: 5 }
    );
    assert!(v.try_set(5, "z").is_err());
    assert_view_eq!(v, ["a", "b", "c", "d", "e"]);
}

#[test]
#[should_panic(expected = "slice bounds out of range")]
fn subview_past_capacity_panics() {
    let _ = letters().subview(0, 6);
}

#[test]
#[should_panic(expected = "invalid slice indices: 3 > 2")]
fn inverted_subview_panics() {
    let _ = letters().subview(3, 2);
}
