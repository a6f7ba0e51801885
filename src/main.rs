use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use jadwalin::calendar;

fn main() -> ExitCode {
    jadwalin::init_tracing();

    match run(env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("jadwalin: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Usage: jadwalin [--day <name>] [FILE]
///
/// Reads recognized timetable text from FILE (or stdin), extracts schedule
/// records, and prints them as a JSON array. `--day` keeps only the entries
/// of one weekday, ordered by time.
fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let mut day_filter: Option<String> = None;
    let mut input_path: Option<String> = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--day" => {
                day_filter = Some(iter.next().ok_or("--day requires a day name")?);
            }
            _ => input_path = Some(arg),
        }
    }

    let text = match input_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut records = jadwalin::extract_schedule(&text);

    if let Some(day) = day_filter {
        let index = calendar::resolve_day_index(&day);
        if index == calendar::UNKNOWN_DAY {
            return Err(format!("unrecognized day name: {day}").into());
        }
        records = calendar::entries_for_day(&records, index);
    }

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
