use crate::extract::rows::{RowKind, RowState, classify_row};
use crate::models::{DAY_STRIDE, LectureRecord, Weekday};

// Semantic positions inside one weekday block. Position 2 (structure) and
// 6 (extra) are unused.
const BLOCK_CODE: usize = 0;
const BLOCK_NAME: usize = 1;
const BLOCK_TYPE: usize = 3;
const BLOCK_FACULTY: usize = 4;
const BLOCK_ROOM: usize = 5;

/// Extract the lecture records of a single data row. For each weekday the
/// row must reach at least the block's room column (`start + 6` columns);
/// shorter rows skip that weekday only, since the last block of a row may
/// be truncated to 6 columns while earlier blocks are intact. An empty
/// code slot likewise skips only that weekday. Nothing here raises.
pub fn extract_row_records(row: &[String], state: &RowState) -> Vec<LectureRecord> {
    let mut records = Vec::new();

    for day in Weekday::ALL {
        let start = day.start_col();
        if row.len() < start + BLOCK_ROOM + 1 {
            continue;
        }

        let end = (start + DAY_STRIDE).min(row.len());
        let block = &row[start..end];

        let code = block[BLOCK_CODE].trim();
        if code.is_empty() {
            continue;
        }

        let field = |idx: usize| {
            block
                .get(idx)
                .map(|c| c.trim().to_string())
                .unwrap_or_default()
        };

        // Any non-empty token is accepted as a code; no shape validation.
        records.push(LectureRecord {
            subject_code: code.to_string(),
            subject_name: field(BLOCK_NAME),
            day,
            time: state.time.clone(),
            batch: state.batch.clone(),
            room: field(BLOCK_ROOM),
            faculty: field(BLOCK_FACULTY),
            kind: field(BLOCK_TYPE),
        });
    }

    records
}

/// Single pass over the grid: skip row 0 (sheet header), thread the
/// forward-fill state through the remaining rows in order, and collect
/// records from data rows that have a batch context. Time-header rows feed
/// the state but never emit records.
pub fn extract_schedule(grid: &[Vec<String>]) -> Vec<LectureRecord> {
    let mut state = RowState::default();
    let mut records = Vec::new();

    for row in grid.iter().skip(1) {
        state = state.advance(row);

        if classify_row(row) == RowKind::TimeHeader {
            continue;
        }
        // No batch observed yet: no valid subject-batch context to attach.
        if state.batch.is_empty() {
            continue;
        }

        records.extend(extract_row_records(row, &state));
    }

    records
}
