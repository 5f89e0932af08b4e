//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 0.1.0
// License : Mulan PSL v2
//
// Generation history (hashes only, never plaintext)

use chrono::Local;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::strength::PasswordAnalysis;

/// Most recent records kept on disk.
pub const MAX_RECORDS: usize = 100;

const HISTORY_FILE_NAME: &str = ".rpawogen_history.json";

/// One past generation. Only a truncated SHA-256 digest of the password is
/// stored, so the file can never leak a usable secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub hash: String,
    pub length: usize,
    pub entropy: f64,
    pub strength: String,
    pub created_at: String,
}

impl HistoryRecord {
    pub fn from_analysis(analysis: &PasswordAnalysis) -> Self {
        Self {
            hash: hash_password(&analysis.password),
            length: analysis.length,
            entropy: analysis.entropy,
            strength: analysis.strength.clone(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// First 16 hex characters of the SHA-256 digest.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)[..16].to_string()
}

pub fn history_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

/// Load records from `path`. A missing or unreadable file is treated as an
/// empty history; past corruption never blocks new generations.
pub fn load_history(path: &Path) -> Vec<HistoryRecord> {
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("ignoring malformed history file {}: {}", path.display(), e);
            Vec::new()
        }),
        Err(_) => Vec::new(),
    }
}

/// Append one record, keeping at most [`MAX_RECORDS`] entries.
pub fn append_record(path: &Path, record: HistoryRecord) -> anyhow::Result<()> {
    let mut records = load_history(path);
    records.push(record);
    if records.len() > MAX_RECORDS {
        let excess = records.len() - MAX_RECORDS;
        records.drain(..excess);
    }
    fs::write(path, serde_json::to_string_pretty(&records)?)?;
    Ok(())
}
