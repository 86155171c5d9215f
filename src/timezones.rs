//! Bundled reference list of timezone identifiers.
//
// The list is a JSON array of IANA "Area/Location" names shipped with the
// binary and parsed once on first access. It is read-only for the lifetime
// of the process.

use once_cell::sync::Lazy;

static TIMEZONES_JSON: &str = include_str!("../data/timezones.json");

/// Ordered reference list used by the default resolver. Order matters:
/// resolution is first-match.
pub static REFERENCE_ZONES: Lazy<Vec<String>> =
    Lazy::new(|| serde_json::from_str(TIMEZONES_JSON).expect("bundled timezone list is valid JSON"));
