//! Input sanitisation for the profile endpoints: trim, length check, HTML escape.

use crate::errors::AppError;

pub const MAX_FIELD_CHARS: usize = 100;

/// A request field with its user-facing label for error messages.
#[derive(Debug, Clone, Copy)]
pub enum Field {
    Name,
    Location,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Business name",
            Field::Location => "Location",
        }
    }
}

/// Trims `raw`, requires 1..=100 characters, then HTML-escapes the result.
/// A missing value is treated as empty.
pub fn sanitize_field(field: Field, raw: Option<&str>) -> Result<String, AppError> {
    let trimmed = raw.unwrap_or_default().trim();
    let len = trimmed.chars().count();

    if len == 0 || len > MAX_FIELD_CHARS {
        return Err(AppError::Validation(format!(
            "{} must be between 1 and {} characters",
            field.label(),
            MAX_FIELD_CHARS
        )));
    }

    Ok(escape_html(trimmed))
}

/// Sanitises both fields, name first.
pub fn sanitize_pair(
    name: Option<&str>,
    location: Option<&str>,
) -> Result<(String, String), AppError> {
    let name = sanitize_field(Field::Name, name)?;
    let location = sanitize_field(Field::Location, location)?;
    Ok((name, location))
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let v = sanitize_field(Field::Name, Some("  Blue Door Cafe \n")).unwrap();
        assert_eq!(v, "Blue Door Cafe");
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = sanitize_field(Field::Location, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Location must be between 1 and 100 characters"));
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let err = sanitize_field(Field::Name, Some("   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("Business name")));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let hundred = "é".repeat(100);
        assert!(sanitize_field(Field::Name, Some(&hundred)).is_ok());
        let hundred_one = "a".repeat(101);
        assert!(sanitize_field(Field::Name, Some(&hundred_one)).is_err());
    }

    #[test]
    fn test_length_checked_before_escaping() {
        // 100 ampersands escape to 500 chars but pass the check
        let amps = "&".repeat(100);
        let v = sanitize_field(Field::Name, Some(&amps)).unwrap();
        assert_eq!(v.len(), 500);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Joe's" & Co/`x`\</b>"#),
            "&lt;b&gt;&quot;Joe&#x27;s&quot; &amp; Co&#x2F;&#96;x&#96;&#x5C;&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn test_pair_reports_name_first() {
        let err = sanitize_pair(Some(""), Some("")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("Business name")));
    }
}
