use anyhow::Result;

use crate::history;

/// How many of the most recent records the table shows.
const SHOWN_RECORDS: usize = 20;

pub fn show_history() -> Result<()> {
    let Some(path) = history::history_file_path() else {
        println!("Could not determine home directory, history unavailable");
        return Ok(());
    };
    let records = history::load_history(&path);

    if records.is_empty() {
        println!("No history yet");
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", "Generation history");
    println!("{}", "=".repeat(60));
    println!(
        "{:<6}{:<8}{:<18}{:<10}{}",
        "No.", "Length", "Strength", "Entropy", "Created"
    );
    println!("{}", "-".repeat(60));

    for (i, record) in records.iter().rev().take(SHOWN_RECORDS).enumerate() {
        println!(
            "{:<6}{:<8}{:<18}{:<10.2}{}",
            i + 1,
            record.length,
            record.strength,
            record.entropy,
            record.created_at
        );
    }

    println!("{}", "=".repeat(60));
    println!(
        "{} records total (showing up to {})",
        records.len(),
        SHOWN_RECORDS
    );
    println!("Note: history stores password hashes only, never plaintext\n");
    Ok(())
}
