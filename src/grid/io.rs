use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Convert a calamine `Data` cell to String. Integral floats are printed
/// without the decimal part so codes and room numbers read from a workbook
/// come out as "204", not "204.0".
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Load the timetable grid from `path`, dispatching on the file extension:
/// `.xlsx`/`.xlsm`/`.xls` go through calamine, everything else is read as
/// comma-separated text. Empty cells are preserved as empty strings.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" => load_grid_excel(path),
        _ => load_grid_csv(path),
    }
}

/// Read a comma-separated export into rows of cells. Rows may have unequal
/// lengths (the exporter drops trailing empty columns), so the reader is
/// flexible and row 0 is kept as-is for the caller to skip.
pub fn load_grid_csv<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    Ok(rows)
}

/// Read a workbook and return the timetable sheet as rows of cells.
/// Prefers a sheet whose name contains "time" (the source workbook calls it
/// "Time-Table"); falls back to the first sheet.
pub fn load_grid_excel<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let names = workbook.sheet_names().to_owned();
    if names.is_empty() {
        return Err("no sheets found in the workbook".into());
    }

    let sheet = names
        .iter()
        .find(|n| n.to_lowercase().contains("time"))
        .unwrap_or(&names[0])
        .clone();

    let range = workbook.worksheet_range(&sheet)?;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for r in range.rows() {
        rows.push(r.iter().map(cell_to_string).collect());
    }
    Ok(rows)
}
