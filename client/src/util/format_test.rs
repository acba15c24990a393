use super::*;

#[test]
fn clock_time_slices_hours_and_minutes() {
    assert_eq!(clock_time("2026-08-08T09:15:00Z"), "09:15");
    assert_eq!(clock_time("2026-08-08T23:59:59.123+09:00"), "23:59");
}

#[test]
fn clock_time_is_empty_for_non_iso_input() {
    assert_eq!(clock_time(""), "");
    assert_eq!(clock_time("noon"), "");
    assert_eq!(clock_time("2026-08-08"), "");
    assert_eq!(clock_time("2026-08-08Tlate"), "");
}
