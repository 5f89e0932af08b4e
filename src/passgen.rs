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
// Password generator core

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*_+-=[]{}|;:,.<>?";

/// Glyphs easily confused when read or transcribed.
pub const CONFUSING_CHARS: &str = "0O1lI|";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_COUNT: usize = 3;
pub const MAX_COUNT: usize = 100;

/// Options for a single generation request.
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub exclude_confusing: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
            exclude_confusing: false,
        }
    }
}

/// The single error kind the generator can produce: the request itself
/// is unsatisfiable, independent of the random source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfigError {
    #[error("at least one character category must be enabled")]
    NoCategoryEnabled,
    #[error("no characters left to sample after removing confusing characters")]
    EmptyAlphabet,
    #[error("password length must be at least {required} to cover all enabled categories")]
    LengthTooShort { required: usize },
}

fn filtered_alphabet(base: &str, exclude_confusing: bool) -> Vec<char> {
    base.chars()
        .filter(|c| !exclude_confusing || !CONFUSING_CHARS.contains(*c))
        .collect()
}

/// Generate one password satisfying `options`.
///
/// Every enabled category contributes at least one character, the rest of
/// the positions are drawn uniformly from the pooled alphabet, and the
/// whole buffer is shuffled so category origin is not tied to position.
/// All draws go through `OsRng`; `rand`'s uniform sampler rejection-samples
/// its range, so non-power-of-two alphabet sizes introduce no modulo bias.
pub fn generate_password(options: &PasswordOptions) -> Result<String, InvalidConfigError> {
    let mut required_sets: Vec<Vec<char>> = Vec::new();
    if options.include_uppercase {
        required_sets.push(filtered_alphabet(UPPERCASE, options.exclude_confusing));
    }
    if options.include_lowercase {
        required_sets.push(filtered_alphabet(LOWERCASE, options.exclude_confusing));
    }
    if options.include_numbers {
        required_sets.push(filtered_alphabet(DIGITS, options.exclude_confusing));
    }
    if options.include_special {
        required_sets.push(filtered_alphabet(SPECIAL, options.exclude_confusing));
    }

    if required_sets.is_empty() {
        return Err(InvalidConfigError::NoCategoryEnabled);
    }

    // Exclusion can only empty a category in pathological combinations,
    // but the check stays: an empty pool must never reach the sampler.
    required_sets.retain(|set| !set.is_empty());
    let all_chars: Vec<char> = required_sets.iter().flatten().copied().collect();
    if all_chars.is_empty() {
        return Err(InvalidConfigError::EmptyAlphabet);
    }

    // Fail fast instead of silently dropping coverage for some category.
    if options.length < required_sets.len() {
        return Err(InvalidConfigError::LengthTooShort {
            required: required_sets.len(),
        });
    }

    let mut rng = OsRng;
    let mut password_chars = Vec::with_capacity(options.length);

    // One guaranteed character per enabled category.
    for set in &required_sets {
        password_chars.push(*set.choose(&mut rng).expect("set is non-empty"));
    }

    for _ in 0..(options.length - required_sets.len()) {
        password_chars.push(*all_chars.choose(&mut rng).expect("pool is non-empty"));
    }

    // Unbiased Fisher-Yates shuffle, same rng.
    password_chars.shuffle(&mut rng);

    Ok(password_chars.into_iter().collect())
}

/// Clamp a user-supplied length into the supported range.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Clamp a user-supplied batch count into the supported range.
pub fn clamp_count(count: usize) -> usize {
    count.clamp(1, MAX_COUNT)
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password
        .chars()
        .filter(|c| CONFUSING_CHARS.contains(*c))
        .collect()
}
