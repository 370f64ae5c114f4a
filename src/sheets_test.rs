use super::*;

// =============================================================
// Pairing from selector matches
// =============================================================

#[test]
fn two_matches_pair_up_by_role() {
    let pair = SheetPair::from_matches(vec!["first", "second"]).unwrap();
    assert_eq!(pair.primary, "second");
    assert_eq!(pair.buffer, "first");
}

#[test]
fn extra_matches_are_ignored() {
    let pair = SheetPair::from_matches(vec!["first", "second", "third"]).unwrap();
    assert_eq!(pair.primary, "second");
    assert_eq!(pair.buffer, "first");
}

#[test]
fn zero_matches_is_too_few() {
    let err = SheetPair::<&str>::from_matches(vec![]).unwrap_err();
    let PairError::TooFew { found } = err;
    assert_eq!(found, 0);
}

#[test]
fn one_match_is_too_few() {
    let err = SheetPair::from_matches(vec!["only"]).unwrap_err();
    let PairError::TooFew { found } = err;
    assert_eq!(found, 1);
}

// =============================================================
// Slot lookup
// =============================================================

#[test]
fn get_maps_slots_to_elements() {
    let pair = SheetPair { primary: 1, buffer: 0 };
    assert_eq!(*pair.get(Slot::Primary), 1);
    assert_eq!(*pair.get(Slot::Buffer), 0);
}

#[test]
fn pair_error_names_the_count() {
    let err = SheetPair::<u8>::from_matches(vec![]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected two managed stylesheet links, found 0"
    );
}
