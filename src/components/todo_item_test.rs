use super::*;

#[test]
fn format_created_at_keeps_the_date_portion() {
    assert_eq!(format_created_at("2026-08-05T12:34:56.789Z"), "2026-08-05");
}

#[test]
fn format_created_at_passes_through_unexpected_values() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
    assert_eq!(format_created_at(""), "");
}
