use rpawogen::history::*;
use rpawogen::strength::analyze_password;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_hash_password_is_short_hex() {
        let hash = hash_password("correct horse battery staple");
        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        // Deterministic, and not the plaintext.
        assert_eq!(hash, hash_password("correct horse battery staple"));
        assert_ne!(hash, "correct horse ba");
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let analysis = analyze_password("Ab3!Ab3!Ab3!");
        append_record(&path, HistoryRecord::from_analysis(&analysis)).unwrap();

        let records = load_history(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hash, hash_password("Ab3!Ab3!Ab3!"));
        assert_eq!(records[0].length, 12);
        assert_eq!(records[0].strength, "Strong");
        assert!(records[0].entropy > 77.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let analysis = analyze_password("Ab3!Ab3!Ab3!");
        for _ in 0..(MAX_RECORDS + 5) {
            append_record(&path, HistoryRecord::from_analysis(&analysis)).unwrap();
        }

        let records = load_history(&path);
        assert_eq!(records.len(), MAX_RECORDS);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_history(&dir.path().join("nope.json"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load_history(&path).is_empty());
    }
}
