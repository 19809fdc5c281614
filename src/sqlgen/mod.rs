//! Module `sqlgen`: turns the subject → slots mapping into idempotent
//! `INSERT ... ON CONFLICT DO NOTHING` statements against the
//! `subject_schedule` table. Slots whose start time cannot be parsed or
//! falls outside the whitelist are recorded as comment lines in the output
//! and skipped; nothing here is fatal.

use crate::models::Slot;
use std::collections::BTreeMap;

/// Start times present in the `time_slots` table. Anything else is a
/// policy skip, not an error.
pub const VALID_START_TIMES: [&str; 5] = [
    "08:00:00",
    "09:00:00",
    "10:00:00",
    "11:00:00",
    "12:00:00",
];

/// Semester the generated rows are scoped to. Hardcoded filter, not derived
/// from the input; overridable via the SEMESTER_ID environment variable.
pub const DEFAULT_SEMESTER_ID: i32 = 2;

/// Normalize a slot label's start time: "8:00 - 8:50" -> "08:00:00",
/// "13:05-13:55" -> "13:05:00". Returns None when there is no "-" range
/// separator, no ":" in the start segment, or the components are not
/// numeric.
pub fn parse_start_time(label: &str) -> Option<String> {
    let (start, _) = label.split_once('-')?;
    let (h, m) = start.trim().split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    Some(format!("{:02}:{:02}:00", h, m))
}

/// Escape a value for interpolation into a single-quoted SQL literal.
fn sql_quote(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render the full SQL file for the mapping: a fixed header, then per
/// accepted (subject, slot) pair one conflict-safe insert. Rejected slots
/// leave a `-- WARNING:` (unparseable label) or `-- SKIP:` (outside the
/// whitelist) line in place of a statement, mirrored to the log.
pub fn generate_insert_statements(
    subjects: &BTreeMap<String, Vec<Slot>>,
    semester_id: i32,
) -> String {
    let mut out = String::new();
    out.push_str("-- Auto-generated subject schedule data\n");
    out.push_str(&format!(
        "-- Filters: semester_id = {}, Valid Time Slots (08:00-12:00)\n",
        semester_id
    ));
    out.push_str("-- \n");

    for (subject_key, slots) in subjects {
        for slot in slots {
            let day_name = slot.day.name().to_uppercase();

            let start_time = match parse_start_time(&slot.time) {
                Some(t) => t,
                None => {
                    log::warn!(
                        "invalid time format '{}' for {}",
                        slot.time,
                        subject_key
                    );
                    out.push_str(&format!(
                        "-- WARNING: Invalid time format '{}' for {}\n",
                        slot.time, subject_key
                    ));
                    continue;
                }
            };

            if !VALID_START_TIMES.contains(&start_time.as_str()) {
                log::info!(
                    "skipping {} {} at {}: not in valid slots",
                    subject_key,
                    day_name,
                    start_time
                );
                out.push_str(&format!(
                    "-- SKIP: {} {} at {} (Not in valid slots)\n",
                    subject_key, day_name, start_time
                ));
                continue;
            }

            out.push_str(&format!(
                "INSERT INTO subject_schedule (subject_id, day_id, slot_id)\n\
                 SELECT s.id, w.id, t.id\n\
                 FROM subjects s, week_days w, time_slots t\n\
                 WHERE s.code = '{}' AND s.semester_id = {}\n  \
                 AND w.name = '{}'\n  \
                 AND t.start_time = '{}'\n\
                 ON CONFLICT (subject_id, day_id, slot_id) DO NOTHING;\n",
                sql_quote(subject_key),
                semester_id,
                day_name,
                start_time
            ));
        }
    }

    out
}
