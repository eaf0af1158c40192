//! Validation module
//!
//! Identifier checks for column names registered in a field allow-list.

use std::fmt;

/// Validation errors for database identifiers
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name contains invalid characters (only alphanumeric and underscore allowed)
    InvalidCharacters(String),
    /// Name is too long (PostgreSQL limit is 63 characters)
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// Name is empty
    Empty,
    /// Name starts with invalid character (must start with letter or underscore)
    InvalidStartCharacter(String),
    /// Name is a reserved SQL keyword
    ReservedKeyword(String),
    /// More than one `.` qualifier
    TooManySegments(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacters(name) => {
                write!(f, "Invalid characters in name '{}': only alphanumeric characters and underscores are allowed", name)
            }
            ValidationError::TooLong {
                name,
                length,
                max_length,
            } => {
                write!(
                    f,
                    "Name '{}' is too long: {} characters (max {})",
                    name, length, max_length
                )
            }
            ValidationError::Empty => {
                write!(f, "Name cannot be empty")
            }
            ValidationError::InvalidStartCharacter(name) => {
                write!(f, "Name '{}' must start with a letter or underscore", name)
            }
            ValidationError::ReservedKeyword(name) => {
                write!(f, "Name '{}' is a reserved SQL keyword", name)
            }
            ValidationError::TooManySegments(name) => {
                write!(f, "Name '{}' may be qualified by at most one table name", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A column identifier, optionally `table.column` qualified, that is safe to
/// write into SQL text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedColumnName(String);

impl ValidatedColumnName {
    /// PostgreSQL identifier length limit
    const MAX_LENGTH: usize = 63;

    /// Create a new validated column name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        let segments: Vec<&str> = name.split('.').collect();
        if segments.len() > 2 {
            return Err(ValidationError::TooManySegments(name.to_string()));
        }

        for segment in segments {
            Self::validate_identifier(segment)?;
        }

        Ok(Self(name.to_string()))
    }

    /// Check a name without keeping the validated value
    pub fn is_valid(name: &str) -> bool {
        Self::new(name).is_ok()
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the validated name as a String
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_identifier(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: name.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        let first_char = name.chars().next().ok_or(ValidationError::Empty)?;
        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(name) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    /// Keywords that would change the meaning of a SELECT if used bare
    fn is_reserved_keyword(name: &str) -> bool {
        const RESERVED_KEYWORDS: &[&str] = &[
            "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "INNER", "LEFT",
            "RIGHT", "FULL", "OUTER", "ON", "AS", "AND", "OR", "NOT", "NULL", "TRUE", "FALSE",
            "CASE", "WHEN", "THEN", "ELSE", "END", "EXISTS", "IN", "LIKE", "ILIKE", "BETWEEN",
            "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT",
            "CREATE", "DROP", "ALTER", "TABLE", "ASC", "DESC", "RETURNING",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_column_names() {
        let valid_names = [
            "id",
            "created_at",
            "CreatedAt",
            "_hidden",
            "col123",
            "u.name",
            "user_profiles.phone",
            &"a".repeat(63),
        ];

        for name in valid_names {
            assert!(
                ValidatedColumnName::new(name).is_ok(),
                "Should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_column_names() {
        let test_cases = [
            ("", ValidationError::Empty),
            ("u.", ValidationError::Empty),
            (
                "1name",
                ValidationError::InvalidStartCharacter("1name".to_string()),
            ),
            (
                "name; DROP TABLE user",
                ValidationError::InvalidCharacters("name; DROP TABLE user".to_string()),
            ),
            (
                "name,password",
                ValidationError::InvalidCharacters("name,password".to_string()),
            ),
            (
                "a.b.c",
                ValidationError::TooManySegments("a.b.c".to_string()),
            ),
            ("select", ValidationError::ReservedKeyword("select".to_string())),
            ("u.order", ValidationError::ReservedKeyword("order".to_string())),
        ];

        for (name, expected_error) in test_cases {
            let result = ValidatedColumnName::new(name);
            assert!(result.is_err(), "Should reject invalid name: {}", name);
            assert_eq!(result.unwrap_err(), expected_error);
        }
    }

    #[test]
    fn test_too_long_segment() {
        let long_name = "a".repeat(64);
        match ValidatedColumnName::new(&long_name).unwrap_err() {
            ValidationError::TooLong {
                length, max_length, ..
            } => {
                assert_eq!(length, 64);
                assert_eq!(max_length, 63);
            }
            other => panic!("Expected TooLong error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_and_accessors() {
        let name = ValidatedColumnName::new("u.created_at").unwrap();
        assert_eq!(format!("{}", name), "u.created_at");
        assert_eq!(name.as_str(), "u.created_at");
        assert_eq!(name.into_string(), "u.created_at".to_string());
        assert!(ValidatedColumnName::is_valid("status"));
        assert!(!ValidatedColumnName::is_valid("status--"));
    }
}
