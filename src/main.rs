// --- Timetable grid extractor - main binary ---

use std::env;
use std::process;

use timegrid::sqlgen::DEFAULT_SEMESTER_ID;
use timegrid::{extract_schedule, generate_insert_statements, group_schedule, load_grid};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: timegrid <timetable.csv|.xlsx> [out.json] [out.sql]");
        process::exit(2);
    }
    let input = &args[1];
    let json_out = args.get(2).map(String::as_str).unwrap_or("data.json");
    let sql_out = args
        .get(3)
        .map(String::as_str)
        .unwrap_or("subject_schedule_data.sql");

    let semester_id = env::var("SEMESTER_ID")
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(DEFAULT_SEMESTER_ID);

    let grid = load_grid(input)?;
    log::info!("loaded {} rows from {}", grid.len(), input);

    let records = extract_schedule(&grid);
    log::info!("extracted {} lecture records", records.len());

    let subjects = group_schedule(&records);
    std::fs::write(json_out, serde_json::to_string_pretty(&subjects)?)?;
    println!("Wrote {} subjects to {}", subjects.len(), json_out);

    let sql = generate_insert_statements(&subjects, semester_id);
    std::fs::write(sql_out, &sql)?;
    println!("Generated SQL at {}", sql_out);

    Ok(())
}
