//! Input validation for pet creation and renaming

use crate::error::ValidationError;

/// Trim and check a pet name against the allowed length range
///
/// Length is counted in characters, not bytes.
pub fn validate_name(name: &str, min: usize, max: usize) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(ValidationError::NameLength { len, min, max });
    }
    Ok(trimmed.to_string())
}

/// Check a `#RRGGBB` color, falling back to `default` when none is given
pub fn validate_color(color: Option<&str>, default: &str) -> Result<String, ValidationError> {
    let color = color.map(str::trim).unwrap_or(default);
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ValidationError::InvalidColor(color.to_string()));
    }
    Ok(color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("F", 2, 50).is_err());
        assert_eq!(validate_name("Fi", 2, 50).unwrap(), "Fi");
        assert!(validate_name(&"x".repeat(50), 2, 50).is_ok());
        assert_eq!(
            validate_name(&"x".repeat(51), 2, 50),
            Err(ValidationError::NameLength { len: 51, min: 2, max: 50 })
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  Fido ", 2, 50).unwrap(), "Fido");
        assert!(validate_name("   a   ", 2, 50).is_err());
    }

    #[test]
    fn test_name_counts_chars_not_bytes() {
        // Two characters, six bytes
        assert!(validate_name("🐸🐸", 2, 50).is_ok());
    }

    #[test]
    fn test_color() {
        assert_eq!(validate_color(Some("#FFFFFF"), "#FF6B6B").unwrap(), "#FFFFFF");
        assert_eq!(validate_color(Some("#a1b2c3"), "#FF6B6B").unwrap(), "#a1b2c3");
        assert_eq!(validate_color(None, "#FF6B6B").unwrap(), "#FF6B6B");
        assert!(validate_color(Some("FFFFFF"), "#FF6B6B").is_err());
        assert!(validate_color(Some("#FFF"), "#FF6B6B").is_err());
        assert!(validate_color(Some("#GGGGGG"), "#FF6B6B").is_err());
    }
}
