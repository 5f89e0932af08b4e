use rpawogen::commands::batch::*;
use rpawogen::passgen::PasswordOptions;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_batch_produces_count_passwords() {
        let options = PasswordOptions::default();
        let analyses = generate_batch(&options, 5).unwrap();
        assert_eq!(analyses.len(), 5);
        for analysis in &analyses {
            assert_eq!(analysis.length, options.length);
        }
    }

    #[test]
    fn test_generate_batch_rejects_invalid_config() {
        let options = PasswordOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_special: false,
            ..Default::default()
        };
        assert!(generate_batch(&options, 3).is_err());
    }

    #[test]
    fn test_render_json_shape() {
        let analyses = generate_batch(&PasswordOptions::default(), 3).unwrap();
        let rendered = render_json(&analyses).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["count"], 3);
        assert!(value["generated_at"].is_string());

        let passwords = value["passwords"].as_array().unwrap();
        assert_eq!(passwords.len(), 3);
        for (i, entry) in passwords.iter().enumerate() {
            assert_eq!(entry["index"], (i + 1) as u64);
            assert_eq!(
                entry["password"].as_str().unwrap(),
                analyses[i].password.as_str()
            );
            assert_eq!(entry["length"], analyses[i].length as u64);
            // Entropy is a 2-decimal string, e.g. "77.15".
            let entropy = entry["entropy"].as_str().unwrap();
            assert_eq!(entropy, format!("{:.2}", analyses[i].entropy));
            assert_eq!(
                entry["strength"].as_str().unwrap(),
                analyses[i].strength.as_str()
            );
        }
    }

    #[test]
    fn test_render_plain_is_one_password_per_line() {
        let analyses = generate_batch(&PasswordOptions::default(), 3).unwrap();
        let rendered = render_plain(&analyses);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, analysis) in lines.iter().zip(&analyses) {
            assert_eq!(*line, analysis.password.as_str());
        }
    }
}
