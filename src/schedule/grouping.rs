use crate::models::{LectureRecord, Slot, Weekday};
use crate::schedule::sections::section_suffix;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Group extracted records into the final mapping: subject key → ordered,
/// deduplicated slot list. Batch and faculty only gated validity upstream
/// and are dropped here.
///
/// A code with a single distinct name keeps the bare code as its key; a
/// code carrying several names is a set of parallel sections and each name
/// resolves its own suffixed key (see `section_suffix`).
pub fn group_schedule(records: &[LectureRecord]) -> BTreeMap<String, Vec<Slot>> {
    // Pass 1: code -> name -> set of (day, time, room), deduplicated by
    // exact equality.
    let mut grouped: HashMap<String, HashMap<String, HashSet<(Weekday, String, String)>>> =
        HashMap::new();

    for rec in records {
        grouped
            .entry(rec.subject_code.clone())
            .or_default()
            .entry(rec.subject_name.clone())
            .or_default()
            .insert((rec.day, rec.time.clone(), rec.room.clone()));
    }

    // Pass 2: resolve keys and order each slot list.
    let mut subjects: BTreeMap<String, Vec<Slot>> = BTreeMap::new();

    for (code, name_groups) in grouped {
        if name_groups.len() == 1 {
            let slots = name_groups.into_values().next().unwrap_or_default();
            subjects.insert(code, sorted_slots(slots));
        } else {
            for (name, slots) in name_groups {
                let key = format!("{}{}", code, section_suffix(&name));
                subjects.insert(key, sorted_slots(slots));
            }
        }
    }

    subjects
}

/// Order slots by weekday, then by the raw time label string. The label is
/// deliberately not parsed here; see `sqlgen` for where labels are actually
/// interpreted.
fn sorted_slots(slots: HashSet<(Weekday, String, String)>) -> Vec<Slot> {
    let mut out: Vec<Slot> = slots
        .into_iter()
        .map(|(day, time, room)| Slot { day, time, room })
        .collect();
    out.sort_by(|a, b| {
        a.day
            .index()
            .cmp(&b.day.index())
            .then_with(|| a.time.cmp(&b.time))
            // room as final tiebreaker so equal (day, time) pairs come out
            // in a stable order regardless of set iteration
            .then_with(|| a.room.cmp(&b.room))
    });
    out
}
