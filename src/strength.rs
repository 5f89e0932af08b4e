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
// Password strength estimation

use serde::{Deserialize, Serialize};

use crate::passgen::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

/// Assumed adversary throughput for crack-time estimates: 10^12 guesses/s.
const ATTEMPTS_PER_SECOND: f64 = 1e12;

const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Ordered strength levels derived from entropy via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    ExtremelyStrong,
}

impl StrengthTier {
    /// Thresholds are half-open intervals in bits: <28, [28,36), [36,60),
    /// [60,80), [80,100), >=100.
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy < 28.0 {
            StrengthTier::VeryWeak
        } else if entropy < 36.0 {
            StrengthTier::Weak
        } else if entropy < 60.0 {
            StrengthTier::Medium
        } else if entropy < 80.0 {
            StrengthTier::Strong
        } else if entropy < 100.0 {
            StrengthTier::VeryStrong
        } else {
            StrengthTier::ExtremelyStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
            StrengthTier::ExtremelyStrong => "Extremely Strong",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "trivially brute-forced",
            StrengthTier::Weak => "may be cracked within hours",
            StrengthTier::Medium => "resists casual attack",
            StrengthTier::Strong => "resists most attacks",
            StrengthTier::VeryStrong => "effectively secure",
            StrengthTier::ExtremelyStrong => "computationally infeasible to crack",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "🔴",
            StrengthTier::Weak => "🟠",
            StrengthTier::Medium => "🟡",
            StrengthTier::Strong => "🟢",
            StrengthTier::VeryStrong => "🔵",
            StrengthTier::ExtremelyStrong => "🟣",
        }
    }
}

/// Read-only result of assessing one password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthAssessment {
    pub entropy_bits: f64,
    pub tier: StrengthTier,
    pub crack_time: String,
}

/// Shell-facing analysis record, serializable for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    pub password: String,
    pub length: usize,
    pub entropy: f64,
    pub strength: String,
    pub description: String,
    pub crack_time: String,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
}

/// Entropy in bits: `length * log2(charset_size)`, where the charset size
/// sums the theoretical size of each category actually present in the
/// password (26/26/10/24). Detection is by scanning the password, not by
/// trusting whatever configuration produced it.
pub fn calculate_entropy(password: &str) -> f64 {
    let has_upper = password.chars().any(|c| UPPERCASE.contains(c));
    let has_lower = password.chars().any(|c| LOWERCASE.contains(c));
    let has_digit = password.chars().any(|c| DIGITS.contains(c));
    let has_special = password.chars().any(|c| SPECIAL.contains(c));

    let mut charset_size = 0usize;
    if has_upper {
        charset_size += UPPERCASE.len();
    }
    if has_lower {
        charset_size += LOWERCASE.len();
    }
    if has_digit {
        charset_size += DIGITS.len();
    }
    if has_special {
        charset_size += SPECIAL.len();
    }

    if charset_size == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (charset_size as f64).log2()
}

/// Illustrative brute-force duration at a fixed guess rate, formatted into
/// the coarsest unit that keeps the number >= 1.
pub fn estimate_crack_time(entropy: f64) -> String {
    let seconds = entropy.exp2() / ATTEMPTS_PER_SECOND;

    if seconds < 1.0 {
        "instant".to_string()
    } else if seconds < 60.0 {
        format!("{:.1} seconds", seconds)
    } else if seconds < 3600.0 {
        format!("{:.1} minutes", seconds / 60.0)
    } else if seconds < 86_400.0 {
        format!("{:.1} hours", seconds / 3600.0)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.1} days", seconds / 86_400.0)
    } else if seconds < SECONDS_PER_YEAR * 1e3 {
        format!("{:.1} years", seconds / SECONDS_PER_YEAR)
    } else if seconds < SECONDS_PER_YEAR * 1e6 {
        format!("{:.1} thousand years", seconds / SECONDS_PER_YEAR / 1e3)
    } else if seconds < SECONDS_PER_YEAR * 1e9 {
        format!("{:.1} million years", seconds / SECONDS_PER_YEAR / 1e6)
    } else {
        "age of the universe".to_string()
    }
}

/// Assess a password. Never fails; an empty or unrecognized password simply
/// scores zero entropy.
pub fn assess(password: &str) -> StrengthAssessment {
    let entropy_bits = calculate_entropy(password);
    StrengthAssessment {
        entropy_bits,
        tier: StrengthTier::from_entropy(entropy_bits),
        crack_time: estimate_crack_time(entropy_bits),
    }
}

pub fn analyze_password(password: &str) -> PasswordAnalysis {
    let assessment = assess(password);
    PasswordAnalysis {
        password: password.to_string(),
        length: password.chars().count(),
        entropy: assessment.entropy_bits,
        strength: assessment.tier.label().to_string(),
        description: assessment.tier.description().to_string(),
        crack_time: assessment.crack_time,
        has_uppercase: password.chars().any(|c| UPPERCASE.contains(c)),
        has_lowercase: password.chars().any(|c| LOWERCASE.contains(c)),
        has_digits: password.chars().any(|c| DIGITS.contains(c)),
        has_special: password.chars().any(|c| SPECIAL.contains(c)),
    }
}
