use anyhow::Result;
use chrono::{NaiveDate, Timelike};
use pretty_assertions::assert_eq;

use meetfind::{find_overlapping_slots, AcceptanceWindow, ResolveError, ZoneResolver};

// A non-DST reference day: New York sits at UTC-5, London at UTC+0.
fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn test_resolve_then_search_end_to_end() -> Result<()> {
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["new_york", "london"])?;

    let slots = find_overlapping_slots(&zones, AcceptanceWindow::default(), reference_day())?;

    // Overlap of local 9-20 windows at UTC-5 and UTC+0 is UTC 14:00-20:00.
    assert_eq!(slots.len(), 7);
    assert_eq!(slots[0].utc().hour(), 14);
    assert_eq!(
        slots[0].zone_times(),
        &["09:00 AM (America/New_York)".to_string(), "02:00 PM (Europe/London)".to_string()]
    );
    assert!(slots.iter().all(|s| s.utc().hour() != 2));
    Ok(())
}

#[test]
fn test_queries_use_underscores_not_spaces() {
    // Identifiers carry underscores, so a spaced query matches nothing.
    let resolver = ZoneResolver::bundled();
    assert_eq!(resolver.resolve("new york"), None);
    assert_eq!(resolver.resolve("new_york"), Some("America/New_York"));
    let err = resolver.resolve_zones(&["new york", "london"]).unwrap_err();
    assert_eq!(err, ResolveError::NotFound { query: "new york".to_string() });
}

#[test]
fn test_three_continent_default_window_has_no_overlap() -> Result<()> {
    // New York, London and Tokyo span too many hours for the default
    // window; no candidate satisfies all three at once.
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["new_york", "london", "tokyo"])?;

    let slots = find_overlapping_slots(&zones, AcceptanceWindow::default(), reference_day())?;
    assert!(slots.is_empty());
    Ok(())
}

#[test]
fn test_unresolvable_query_aborts_before_search() {
    let resolver = ZoneResolver::bundled();
    let err = resolver.resolve_zones(&["new_york", "Atlantis", "london"]).unwrap_err();
    assert_eq!(err, ResolveError::NotFound { query: "Atlantis".to_string() });
}

#[test]
fn test_three_zone_search_respects_every_window() -> Result<()> {
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["los_angeles", "berlin", "tokyo"])?;

    let window = AcceptanceWindow::new(7, 22)?;
    let slots = find_overlapping_slots(&zones, window, reference_day())?;
    for slot in &slots {
        for tz in &zones {
            assert!(window.contains(slot.utc().with_timezone(tz).hour()));
        }
    }
    Ok(())
}

#[test]
fn test_fuzzy_queries_resolve_case_insensitively() -> Result<()> {
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["TOKYO", "Sao_paulo", "kolkata"])?;
    assert_eq!(
        zones,
        vec![chrono_tz::Asia::Tokyo, chrono_tz::America::Sao_Paulo, chrono_tz::Asia::Kolkata]
    );
    Ok(())
}

#[test]
fn test_half_hour_offset_zone_formats_minutes() -> Result<()> {
    // Kolkata is UTC+5:30; slot strings must carry the :30.
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["kolkata"])?;

    let slots = find_overlapping_slots(&zones, AcceptanceWindow::default(), reference_day())?;
    assert!(!slots.is_empty());
    // 04:00 UTC is 09:30 local, the earliest acceptable hour.
    assert_eq!(slots[0].utc().hour(), 4);
    assert_eq!(slots[0].zone_times(), &["09:30 AM (Asia/Kolkata)".to_string()]);
    Ok(())
}

#[test]
fn test_no_overlap_yields_empty_result() -> Result<()> {
    // Honolulu (UTC-10) and Tokyo (UTC+9) share no daytime hours in a
    // narrow window.
    let resolver = ZoneResolver::bundled();
    let zones = resolver.resolve_zones(&["honolulu", "tokyo"])?;

    let window = AcceptanceWindow::new(9, 12)?;
    let slots = find_overlapping_slots(&zones, window, reference_day())?;
    assert!(slots.is_empty());
    Ok(())
}
