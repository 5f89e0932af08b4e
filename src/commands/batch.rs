use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::commands::{print_banner, print_password_card, RULE_WIDTH};
use crate::passgen::{self, InvalidConfigError, PasswordOptions};
use crate::strength::{self, PasswordAnalysis};

/// Non-interactive output shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Plain,
    Cards,
}

#[derive(Debug, Serialize)]
struct BatchEntry {
    index: usize,
    password: String,
    length: usize,
    entropy: String,
    strength: String,
}

#[derive(Debug, Serialize)]
struct BatchOutput {
    generated_at: String,
    count: usize,
    passwords: Vec<BatchEntry>,
}

/// Generate `count` passwords up front. Any config error aborts the whole
/// batch so callers never see partial output.
pub fn generate_batch(
    options: &PasswordOptions,
    count: usize,
) -> Result<Vec<PasswordAnalysis>, InvalidConfigError> {
    let mut analyses = Vec::with_capacity(count);
    for _ in 0..count {
        let password = passgen::generate_password(options)?;
        analyses.push(strength::analyze_password(&password));
    }
    Ok(analyses)
}

/// JSON document: `generated_at`, `count`, and one entry per password with
/// a 1-based index and the entropy as a 2-decimal string.
pub fn render_json(analyses: &[PasswordAnalysis]) -> Result<String> {
    let output = BatchOutput {
        generated_at: Local::now().to_rfc3339(),
        count: analyses.len(),
        passwords: analyses
            .iter()
            .enumerate()
            .map(|(i, a)| BatchEntry {
                index: i + 1,
                password: a.password.clone(),
                length: a.length,
                entropy: format!("{:.2}", a.entropy),
                strength: a.strength.clone(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).context("failed to serialize batch output")
}

/// One password per line, nothing else.
pub fn render_plain(analyses: &[PasswordAnalysis]) -> String {
    analyses
        .iter()
        .map(|a| a.password.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run_batch(
    options: &PasswordOptions,
    count: usize,
    format: BatchFormat,
    output: Option<&Path>,
    show_analysis: bool,
) -> Result<()> {
    let analyses = generate_batch(options, count).context("password generation failed")?;

    match format {
        BatchFormat::Json => {
            let rendered = render_json(&analyses)?;
            emit(&rendered, output)?;
        }
        BatchFormat::Plain => {
            let rendered = render_plain(&analyses);
            emit(&rendered, output)?;
        }
        BatchFormat::Cards => {
            print_banner();
            println!("{}", "-".repeat(RULE_WIDTH));
            println!("Generated passwords:\n");
            for (i, analysis) in analyses.iter().enumerate() {
                if show_analysis {
                    print_password_card(i + 1, analysis);
                } else {
                    println!("  [{}] {}", i + 1, analysis.password);
                }
            }
            println!("{}", "-".repeat(RULE_WIDTH));
            if let Some(path) = output {
                write_file(&render_plain(&analyses), path)?;
            }
        }
    }
    Ok(())
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_file(content, path),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn write_file(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("Saved to file: {}", path.display());
    Ok(())
}
