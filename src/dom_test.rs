use super::*;

// =============================================================
// Selector shape
// =============================================================

#[test]
fn selector_targets_cdn_hosted_stylesheet_links() {
    assert_eq!(
        stylesheet_selector(),
        r#"link[rel=stylesheet][href^="https://cdn.jsdelivr"]"#
    );
}

#[test]
fn timer_delay_converts_to_whole_milliseconds() {
    assert_eq!(
        u32::try_from(crate::consts::BUFFER_WRITE_DELAY.as_millis()).ok(),
        Some(100)
    );
}
