use std::collections::BTreeMap;

use timegrid::models::{Slot, Weekday};
use timegrid::sqlgen::{DEFAULT_SEMESTER_ID, VALID_START_TIMES, generate_insert_statements, parse_start_time};

fn slot(day: Weekday, time: &str, room: &str) -> Slot {
    Slot {
        day,
        time: time.to_string(),
        room: room.to_string(),
    }
}

fn subjects(entries: &[(&str, Slot)]) -> BTreeMap<String, Vec<Slot>> {
    let mut map: BTreeMap<String, Vec<Slot>> = BTreeMap::new();
    for (key, s) in entries {
        map.entry(key.to_string()).or_default().push(s.clone());
    }
    map
}

#[test]
fn test_parse_start_time_zero_pads() {
    assert_eq!(parse_start_time("8:00 - 8:50").as_deref(), Some("08:00:00"));
    assert_eq!(parse_start_time("13:05-13:55").as_deref(), Some("13:05:00"));
    assert_eq!(parse_start_time("9:5 - 9:55").as_deref(), Some("09:05:00"));
}

#[test]
fn test_parse_start_time_rejects_malformed_labels() {
    // no range separator
    assert_eq!(parse_start_time("8:00 8:50"), None);
    // no colon in the start segment
    assert_eq!(parse_start_time("0800 - 0850"), None);
    // non-numeric components
    assert_eq!(parse_start_time("ab:cd - 9:00"), None);
    assert_eq!(parse_start_time(""), None);
}

#[test]
fn test_whitelist_matches_time_slots_table() {
    assert_eq!(VALID_START_TIMES.len(), 5);
    assert!(VALID_START_TIMES.contains(&"08:00:00"));
    assert!(VALID_START_TIMES.contains(&"12:00:00"));
    assert!(!VALID_START_TIMES.contains(&"14:00:00"));
}

#[test]
fn test_accepted_slot_emits_exact_statement() {
    let map = subjects(&[("IT205", slot(Weekday::Monday, "8:00 - 8:50", "Room1"))]);
    let sql = generate_insert_statements(&map, DEFAULT_SEMESTER_ID);

    let expected = "INSERT INTO subject_schedule (subject_id, day_id, slot_id)\n\
                    SELECT s.id, w.id, t.id\n\
                    FROM subjects s, week_days w, time_slots t\n\
                    WHERE s.code = 'IT205' AND s.semester_id = 2\n  \
                    AND w.name = 'MONDAY'\n  \
                    AND t.start_time = '08:00:00'\n\
                    ON CONFLICT (subject_id, day_id, slot_id) DO NOTHING;\n";
    assert!(sql.contains(expected), "generated SQL was:\n{}", sql);

    // file header
    assert!(sql.starts_with("-- Auto-generated subject schedule data\n"));
    assert!(sql.contains("-- Filters: semester_id = 2"));
}

#[test]
fn test_unparseable_label_leaves_warning_comment() {
    let map = subjects(&[("IT205", slot(Weekday::Monday, "morning", "Room1"))]);
    let sql = generate_insert_statements(&map, DEFAULT_SEMESTER_ID);

    assert!(sql.contains("-- WARNING: Invalid time format 'morning' for IT205\n"));
    assert!(!sql.contains("INSERT INTO"));
}

#[test]
fn test_out_of_whitelist_slot_is_skipped_with_notice() {
    // parses fine but 14:00 is not a valid teaching slot
    let map = subjects(&[("CS301-A", slot(Weekday::Friday, "14:00 - 14:50", "Room1"))]);
    let sql = generate_insert_statements(&map, DEFAULT_SEMESTER_ID);

    assert!(sql.contains("-- SKIP: CS301-A FRIDAY at 14:00:00 (Not in valid slots)\n"));
    assert!(!sql.contains("INSERT INTO"));
}

#[test]
fn test_rejected_slots_do_not_stop_processing() {
    let map = subjects(&[
        ("AA100", slot(Weekday::Monday, "garbage", "R1")),
        ("BB200", slot(Weekday::Tuesday, "9:00 - 9:50", "R2")),
        ("CC300", slot(Weekday::Wednesday, "15:00 - 15:50", "R3")),
    ]);
    let sql = generate_insert_statements(&map, DEFAULT_SEMESTER_ID);

    assert!(sql.contains("-- WARNING: Invalid time format 'garbage' for AA100"));
    assert!(sql.contains("WHERE s.code = 'BB200'"));
    assert!(sql.contains("-- SKIP: CC300 WEDNESDAY at 15:00:00"));
}

#[test]
fn test_semester_id_is_interpolated() {
    let map = subjects(&[("IT205", slot(Weekday::Monday, "8:00 - 8:50", "Room1"))]);
    let sql = generate_insert_statements(&map, 5);
    assert!(sql.contains("s.semester_id = 5"));
    assert!(sql.contains("-- Filters: semester_id = 5"));
}

#[test]
fn test_subject_keys_are_sql_quoted() {
    // verbose fallback suffixes can carry arbitrary name text
    let map = subjects(&[("CS301-Int'l Law", slot(Weekday::Monday, "9:00 - 9:50", "R1"))]);
    let sql = generate_insert_statements(&map, DEFAULT_SEMESTER_ID);
    assert!(sql.contains("s.code = 'CS301-Int''l Law'"));
}
