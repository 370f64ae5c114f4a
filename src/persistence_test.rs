use super::*;

// =============================================================
// Preference flag decoding
// =============================================================

#[test]
fn preference_true_decodes() {
    assert!(decode_preference("[true]").unwrap());
}

#[test]
fn preference_false_decodes() {
    assert!(!decode_preference("[false]").unwrap());
}

#[test]
fn preference_takes_first_of_trailing_elements() {
    assert!(decode_preference("[true, false]").unwrap());
    assert!(!decode_preference("[false, true]").unwrap());
}

#[test]
fn preference_empty_array_is_rejected() {
    assert!(matches!(
        decode_preference("[]"),
        Err(DecodeError::EmptyPreference)
    ));
}

#[test]
fn preference_bare_boolean_is_rejected() {
    // The producer always wraps the value in an array.
    assert!(matches!(
        decode_preference("true"),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn preference_non_boolean_element_is_rejected() {
    assert!(matches!(decode_preference("[1]"), Err(DecodeError::Json(_))));
    assert!(matches!(
        decode_preference("[\"true\"]"),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn preference_garbage_is_rejected() {
    assert!(matches!(
        decode_preference("not json"),
        Err(DecodeError::Json(_))
    ));
    assert!(matches!(decode_preference(""), Err(DecodeError::Json(_))));
}

// =============================================================
// Theme URL pair decoding
// =============================================================

#[test]
fn theme_urls_pair_decodes() {
    let urls = decode_theme_urls(r#"["a.css","b.css"]"#).unwrap();
    assert_eq!(urls.default_url(), "a.css");
    assert_eq!(urls.alternate_url(), "b.css");
}

#[test]
fn theme_urls_single_element_is_rejected() {
    assert!(matches!(
        decode_theme_urls(r#"["a.css"]"#),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn theme_urls_extra_elements_are_rejected() {
    assert!(matches!(
        decode_theme_urls(r#"["a.css","b.css","c.css"]"#),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn theme_urls_non_string_elements_are_rejected() {
    assert!(matches!(
        decode_theme_urls("[1, 2]"),
        Err(DecodeError::Json(_))
    ));
}

#[test]
fn theme_urls_garbage_is_rejected() {
    assert!(matches!(
        decode_theme_urls("{}"),
        Err(DecodeError::Json(_))
    ));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn choose_default_when_flag_off() {
    let urls = ThemeUrls::new("a.css", "b.css");
    assert_eq!(urls.choose(false), "a.css");
}

#[test]
fn choose_alternate_when_flag_on() {
    let urls = ThemeUrls::new("a.css", "b.css");
    assert_eq!(urls.choose(true), "b.css");
}

#[test]
fn choose_returns_stored_value_unchanged() {
    // Round-trip: no trimming, escaping, or normalization of the URL.
    let odd = " https://cdn.jsdelivr.net/x.css?v=1&q=%20 ";
    let urls = decode_theme_urls(&format!(r#"["{odd}","b.css"]"#)).unwrap();
    assert_eq!(urls.choose(false), odd);
}
