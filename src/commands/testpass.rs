use anyhow::Result;

use crate::passgen;
use crate::strength;

pub fn test_password(password: &str, check_confusion: bool) -> Result<()> {
    let analysis = strength::analyze_password(password);

    println!(
        "Password strength: {} ({})",
        analysis.strength, analysis.description
    );
    println!("Entropy: {:.2} bits", analysis.entropy);
    println!("Estimated crack time: {}", analysis.crack_time);
    println!(
        "Categories present: uppercase={} lowercase={} digits={} special={}",
        analysis.has_uppercase, analysis.has_lowercase, analysis.has_digits, analysis.has_special
    );

    if check_confusion {
        let confusing = passgen::check_confusing_chars(password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
