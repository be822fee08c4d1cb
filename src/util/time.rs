//! Creation timestamps in ISO-8601 form.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time as an ISO-8601 string (e.g. `2026-08-05T12:34:56.789Z`).
///
/// Requires a browser environment for a real clock; on non-WASM targets
/// (host-side tests) returns a fixed epoch string so tests stay
/// deterministic.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}
