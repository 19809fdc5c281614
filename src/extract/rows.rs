/// Forward-filled scan state, emulating merged cells in the source sheet:
/// the time label (column 0) and batch label (column 1) each persist from
/// the most recent row where their column was non-empty. The two fill
/// independently; a row may update one without touching the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    pub time: String,
    pub batch: String,
}

impl RowState {
    /// Pure transition: fold one row into the state. No other side effects.
    pub fn advance(&self, row: &[String]) -> RowState {
        let mut next = self.clone();
        if let Some(t) = row.first().map(|c| c.trim()) {
            if !t.is_empty() {
                next.time = t.to_string();
            }
        }
        if let Some(b) = row.get(1).map(|c| c.trim()) {
            if !b.is_empty() {
                next.batch = b.to_string();
            }
        }
        next
    }
}

/// Row classification. The grid carries no explicit markers, so the only
/// signal is column 0: a non-empty first cell declares a new time label and
/// the row's weekday blocks hold slot-name placeholders ("Slot-1"), never
/// subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    TimeHeader,
    Data,
}

/// Classify a row from column-0 emptiness alone. Kept as the single
/// decision point so the policy can be swapped or tested in isolation.
pub fn classify_row(row: &[String]) -> RowKind {
    match row.first() {
        Some(c) if !c.trim().is_empty() => RowKind::TimeHeader,
        _ => RowKind::Data,
    }
}
