use rpawogen::setclip::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clear_secs_valid_value() {
        assert_eq!(parse_clear_secs(Some("10".to_string())), 10);
        assert_eq!(parse_clear_secs(Some("0".to_string())), 0);
    }

    #[test]
    fn test_parse_clear_secs_missing_falls_back_to_default() {
        assert_eq!(parse_clear_secs(None), DEFAULT_CLEAR_SECS);
    }

    #[test]
    fn test_parse_clear_secs_garbage_falls_back_to_default() {
        assert_eq!(parse_clear_secs(Some("soon".to_string())), DEFAULT_CLEAR_SECS);
        assert_eq!(parse_clear_secs(Some("-5".to_string())), DEFAULT_CLEAR_SECS);
        assert_eq!(parse_clear_secs(Some("".to_string())), DEFAULT_CLEAR_SECS);
    }
}
