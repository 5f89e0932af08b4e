use anyhow::Result;
use std::io::{self, Write};

use crate::commands::batch::generate_batch;
use crate::commands::{history as history_cmd, print_banner, print_password_card, RULE_WIDTH};
use crate::history::{self, HistoryRecord};
use crate::passgen::{PasswordOptions, MAX_LENGTH, MIN_LENGTH};
use crate::setclip;
use crate::strength::PasswordAnalysis;

/// REPL states. Each loop iteration handles exactly one state, so command
/// dispatch stays flat instead of nesting conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptState {
    Displaying,
    AwaitingSelection,
    AwaitingLengthChange,
    Exiting,
}

pub fn run_interactive(
    mut options: PasswordOptions,
    count: usize,
    record_history: bool,
) -> Result<()> {
    print_banner();
    println!(
        "Current config: length={}, count={}, exclude confusing={}",
        options.length,
        count,
        if options.exclude_confusing { "yes" } else { "no" }
    );
    println!();

    let mut passwords: Vec<PasswordAnalysis> = Vec::new();
    let mut state = PromptState::Displaying;

    loop {
        match state {
            PromptState::Displaying => {
                passwords = generate_batch(&options, count)?;
                println!("{}", "-".repeat(RULE_WIDTH));
                println!("Generated passwords:\n");
                for (i, analysis) in passwords.iter().enumerate() {
                    print_password_card(i + 1, analysis);
                }
                println!("{}", "-".repeat(RULE_WIDTH));
                state = PromptState::AwaitingSelection;
            }
            PromptState::AwaitingSelection => {
                println!(
                    "\nCommands: [1-{}] select | [r] regenerate | [l] change length | [h] history | [q] quit",
                    count
                );
                let input = match read_line("Enter choice: ")? {
                    Some(line) => line.trim().to_lowercase(),
                    None => {
                        state = PromptState::Exiting;
                        continue;
                    }
                };

                if let Ok(n) = input.parse::<usize>() {
                    if n >= 1 && n <= count {
                        state = select_password(&passwords[n - 1], record_history)?;
                        continue;
                    }
                }

                match input.as_str() {
                    "r" => {
                        println!("\nRegenerating...\n");
                        state = PromptState::Displaying;
                    }
                    "l" => state = PromptState::AwaitingLengthChange,
                    "h" => history_cmd::show_history()?,
                    "q" => state = PromptState::Exiting,
                    _ => println!("Invalid input"),
                }
            }
            PromptState::AwaitingLengthChange => {
                let prompt = format!("Enter new password length ({}-{}): ", MIN_LENGTH, MAX_LENGTH);
                let input = match read_line(&prompt)? {
                    Some(line) => line,
                    None => {
                        state = PromptState::Exiting;
                        continue;
                    }
                };
                match input.trim().parse::<usize>() {
                    Ok(n) if (MIN_LENGTH..=MAX_LENGTH).contains(&n) => {
                        options.length = n;
                        println!("\nPassword length updated to {}\n", n);
                        state = PromptState::Displaying;
                    }
                    Ok(_) => {
                        println!("Length must be between {} and {}", MIN_LENGTH, MAX_LENGTH);
                        state = PromptState::AwaitingSelection;
                    }
                    Err(_) => {
                        println!("Please enter a valid number");
                        state = PromptState::AwaitingSelection;
                    }
                }
            }
            PromptState::Exiting => {
                println!("Bye");
                return Ok(());
            }
        }
    }
}

fn select_password(analysis: &PasswordAnalysis, record_history: bool) -> Result<PromptState> {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("Selected password: {}", analysis.password);
    println!("{}", "=".repeat(RULE_WIDTH));

    match setclip::copy_to_clipboard(&analysis.password, setclip::DEFAULT_CLEAR_SECS) {
        Ok(()) => println!(
            "✓ Copied to clipboard (cleared after {}s)",
            setclip::DEFAULT_CLEAR_SECS
        ),
        Err(e) => println!("Could not copy to clipboard: {}", e),
    }

    if record_history {
        if let Some(path) = history::history_file_path() {
            match history::append_record(&path, HistoryRecord::from_analysis(analysis)) {
                Ok(()) => println!("✓ Recorded to history (hash only)"),
                Err(e) => log::warn!("failed to record history: {}", e),
            }
        }
    }

    println!();
    let again = match read_line("Generate more? [y/n]: ")? {
        Some(line) => line.trim().eq_ignore_ascii_case("y"),
        None => false,
    };
    Ok(if again {
        PromptState::Displaying
    } else {
        PromptState::Exiting
    })
}

/// Read one line from stdin. `None` means EOF (treated as quit).
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}
