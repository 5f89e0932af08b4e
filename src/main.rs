//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rpawogen::commands::batch::{self, BatchFormat};
use rpawogen::commands::{history, interactive, testpass};
use rpawogen::passgen::{
    clamp_count, clamp_length, PasswordOptions, DEFAULT_COUNT, DEFAULT_LENGTH,
};
use rpawogen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A secure password generator written in Rust", long_about = None)]
struct Cli {
    #[command(flatten)]
    gen_args: GenArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Show generation history (hashes only, never plaintext)
    History,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of each password (8-128, out-of-range values are clamped)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of passwords to generate (1-100, out-of-range values are clamped)
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Exclude visually confusing characters (0O1lI|)
    #[arg(short, long, default_value_t = false)]
    exclude_confusing: bool,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Output as JSON (implies batch mode)
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Output one password per line (implies batch mode)
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Batch mode (non-interactive)
    #[arg(short, long, default_value_t = false)]
    batch: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the per-password strength analysis in batch output
    #[arg(long, default_value_t = false)]
    no_analysis: bool,

    /// Do not record selected passwords to the hashed history file
    #[arg(long, default_value_t = false)]
    no_history: bool,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Check for visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    check_confusion: bool,
}

fn main() -> anyhow::Result<()> {
    // Re-executed as the clipboard clear daemon: no CLI, no banner.
    if setclip::is_daemon_process() {
        return setclip::daemon_main();
    }

    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Testpass(args)) => testpass::test_password(&args.password, args.check_confusion),
        Some(Command::History) => history::show_history(),
        None => run_generate(cli.gen_args),
    }
}

fn run_generate(args: GenArgs) -> anyhow::Result<()> {
    let length = clamp_length(args.length);
    if length != args.length {
        log::warn!("length {} out of range, clamped to {}", args.length, length);
    }
    let count = clamp_count(args.count);
    if count != args.count {
        log::warn!("count {} out of range, clamped to {}", args.count, count);
    }

    let options = PasswordOptions {
        length,
        include_uppercase: !args.no_uppercase,
        include_lowercase: !args.no_lowercase,
        include_numbers: !args.no_numbers,
        include_special: !args.no_special,
        exclude_confusing: args.exclude_confusing,
    };

    if args.json || args.plain || args.batch || args.output.is_some() {
        let format = if args.json {
            BatchFormat::Json
        } else if args.plain {
            BatchFormat::Plain
        } else {
            BatchFormat::Cards
        };
        batch::run_batch(&options, count, format, args.output.as_deref(), !args.no_analysis)
    } else {
        interactive::run_interactive(options, count, !args.no_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_generation_flags() {
        let cli = Cli::try_parse_from(["rpawogen", "-l", "20", "-c", "5", "--json", "-e"]).unwrap();
        assert_eq!(cli.gen_args.length, 20);
        assert_eq!(cli.gen_args.count, 5);
        assert!(cli.gen_args.json);
        assert!(cli.gen_args.exclude_confusing);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_testpass_subcommand() {
        let cli = Cli::try_parse_from(["rpawogen", "testpass", "Passw0rd!", "-c"]).unwrap();
        match cli.command {
            Some(Command::Testpass(args)) => {
                assert_eq!(args.password, "Passw0rd!");
                assert!(args.check_confusion);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
