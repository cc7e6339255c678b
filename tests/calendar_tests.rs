// Host-side tests for the contributions payload and cell layout.

use folio_core::{build_cells, parse_response, CalendarLayout, CellKey, FieldError};
use glam::Vec2;

const FLAT: &str = r#"{
    "totalContributions": 6,
    "weeks": [
        { "contributionDays": [
            { "contributionCount": 0, "date": "2024-01-07" },
            { "contributionCount": 4, "date": "2024-01-08" }
        ] },
        { "contributionDays": [
            { "contributionCount": 2, "date": "2024-01-14" }
        ] }
    ]
}"#;

#[test]
fn parses_flat_calendar() {
    let calendar = parse_response(FLAT).unwrap();
    assert_eq!(calendar.total_contributions, 6);
    assert_eq!(calendar.weeks.len(), 2);
    assert_eq!(calendar.day_count(), 3);
    assert_eq!(calendar.weeks[0].contribution_days[1].contribution_count, 4);
}

#[test]
fn parses_graphql_envelope() {
    let body = format!(
        r#"{{ "data": {{ "user": {{ "contributionsCollection": {{ "contributionCalendar": {} }} }} }} }}"#,
        FLAT
    );
    assert_eq!(parse_response(&body).unwrap(), parse_response(FLAT).unwrap());
}

#[test]
fn error_body_becomes_remote_error() {
    match parse_response(r#"{ "error": "Failed to fetch GitHub contributions" }"#) {
        Err(FieldError::Remote(msg)) => assert!(msg.contains("GitHub")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn malformed_bodies_are_payload_errors() {
    assert!(matches!(
        parse_response("<html>"),
        Err(FieldError::Payload(_))
    ));
    assert!(matches!(
        parse_response(r#"{ "weeks": 3 }"#),
        Err(FieldError::Payload(_))
    ));
}

#[test]
fn cells_are_week_major_with_fixed_pitch() {
    let calendar = parse_response(FLAT).unwrap();
    let layout = CalendarLayout::default();
    let cells = build_cells(&calendar, &layout);
    let keys: Vec<CellKey> = cells.iter().map(|c| c.visual.key).collect();
    assert_eq!(
        keys,
        vec![
            CellKey { week: 0, day: 0 },
            CellKey { week: 0, day: 1 },
            CellKey { week: 1, day: 0 },
        ]
    );
    // 11px cells, 4px between weeks, 8px between days, centered
    assert_eq!(cells[0].rest(), Vec2::new(5.5, 5.5));
    assert_eq!(cells[1].rest(), Vec2::new(5.5, 24.5));
    assert_eq!(cells[2].rest(), Vec2::new(20.5, 5.5));
    assert_eq!(cells[1].visual.count, 4);
    assert!(cells.iter().all(|c| c.offset == Vec2::ZERO && !c.activated));
}

#[test]
fn cell_ids_use_week_then_day() {
    assert_eq!(CellKey { week: 12, day: 3 }.to_string(), "12-3");
}

#[test]
fn extent_covers_a_full_year() {
    let layout = CalendarLayout::default();
    assert_eq!(layout.extent(52, 7), Vec2::new(776.0, 125.0));
    assert_eq!(layout.extent(0, 7), Vec2::new(0.0, 125.0));
}

#[test]
fn empty_calendar_builds_no_cells() {
    let calendar = parse_response(r#"{ "totalContributions": 0, "weeks": [] }"#).unwrap();
    assert!(build_cells(&calendar, &CalendarLayout::default()).is_empty());
}
