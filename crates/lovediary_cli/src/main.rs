//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lovediary_core` linkage without the Flutter host.
//! - Optionally summarize the diary stored under a data directory.
//!
//! Usage: `lovediary_cli [DATA_DIR]`

use lovediary_core::{diary_title, note_rows, DiaryPaths, Profile};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("lovediary_core ping={}", lovediary_core::ping());
    println!("lovediary_core version={}", lovediary_core::core_version());

    let Some(data_dir) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };
    match summarize(&data_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(data_dir: &str) -> Result<(), String> {
    let paths = DiaryPaths::new(data_dir).map_err(|err| err.to_string())?;

    let profile = paths.profile_store().load().unwrap_or_else(|err| {
        eprintln!("warning: profile unreadable, showing empty names: {err}");
        Profile::empty()
    });
    if profile.validate_for_entry().is_ok() {
        println!("{}", diary_title(&profile));
    } else {
        println!("profile incomplete");
    }

    let mut ledger = paths.note_ledger().map_err(|err| err.to_string())?;
    let notes = ledger.load().map_err(|err| err.to_string())?;
    println!("notes={}", notes.len());
    for row in note_rows(notes) {
        let image = row.image.as_deref().unwrap_or("-");
        println!(
            "[{}] {} | {} | image={}",
            row.id, row.date_label, row.content_label, image
        );
    }
    Ok(())
}
