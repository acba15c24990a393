//! Pure formatting helpers for the transcript and header.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Clock label (`HH:MM`) for an ISO 8601 timestamp.
///
/// Slices the wall-clock minutes straight out of the string; good enough for
/// transcript labels, and it keeps the helper free of date math.
#[must_use]
pub fn clock_time(timestamp: &str) -> String {
    timestamp
        .split_once('T')
        .and_then(|(_, rest)| rest.get(..5))
        .filter(|hhmm| hhmm.len() == 5 && hhmm.as_bytes()[2] == b':')
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Header date line, e.g. `"Fri Aug 08 2026"`. Empty on the server.
#[must_use]
pub fn header_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_date_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
