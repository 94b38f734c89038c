use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ValidationError;

fn plate_regex() -> &'static Regex {
    static PLATE: OnceLock<Regex> = OnceLock::new();
    PLATE.get_or_init(|| Regex::new(r"^K[A-Z]{2}\s\d{3}[A-Z]$").expect("plate pattern is valid"))
}

/// Kenyan number plates look like `KDD 123A`.
pub fn is_kenyan_plate(plate: &str) -> bool {
    plate_regex().is_match(plate)
}

pub fn require_plate(plate: &str) -> Result<(), ValidationError> {
    if is_kenyan_plate(plate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPlate(plate.to_string()))
    }
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: u64) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plates() {
        assert!(is_kenyan_plate("KDD 123A"));
        assert!(is_kenyan_plate("KCA 567E"));
    }

    #[test]
    fn test_invalid_plates() {
        assert!(!is_kenyan_plate("ABC123"));
        assert!(!is_kenyan_plate("KDD123A"));
        assert!(!is_kenyan_plate("kdd 123a"));
        assert!(!is_kenyan_plate("KDD 123A "));
        assert!(!is_kenyan_plate("XDD 123A"));
        assert!(!is_kenyan_plate(""));
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(require_text("name", "  "), Err(ValidationError::MissingField("name")));
        assert!(require_text("name", "Serena").is_ok());
        assert_eq!(require_positive("rooms", 0), Err(ValidationError::NotPositive("rooms")));
        assert!(matches!(require_plate("ABC123"), Err(ValidationError::InvalidPlate(_))));
    }
}
