pub mod batch;
pub mod history;
pub mod interactive;
pub mod testpass;

/// Width of the separator rules around password listings.
pub const RULE_WIDTH: usize = 58;

pub fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════╗
║                rpawogen - password generator             ║
║                                                          ║
║  configurable length | strength rating | hashed history  ║
╚══════════════════════════════════════════════════════════╝
"#
    );
}

pub fn print_password_card(index: usize, analysis: &crate::strength::PasswordAnalysis) {
    println!("  [{}] {}", index, analysis.password);
    println!(
        "      {} Strength: {} | Entropy: {:.2} bits | Crack time: {}",
        crate::strength::StrengthTier::from_entropy(analysis.entropy).icon(),
        analysis.strength,
        analysis.entropy,
        analysis.crack_time
    );
    println!();
}
