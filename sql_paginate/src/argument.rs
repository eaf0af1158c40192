//! Positional query arguments

use serde::Serialize;
use std::fmt;

/// A scalar bound to exactly one placeholder of a built statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum QueryArgument {
    /// Filter values, passed through exactly as the request supplied them
    Text(String),
    /// LIMIT and OFFSET
    Integer(i64),
}

impl QueryArgument {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QueryArgument::Text(value) => Some(value),
            QueryArgument::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            QueryArgument::Integer(value) => Some(*value),
            QueryArgument::Text(_) => None,
        }
    }
}

impl fmt::Display for QueryArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryArgument::Text(value) => write!(f, "{}", value),
            QueryArgument::Integer(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for QueryArgument {
    fn from(value: &str) -> Self {
        QueryArgument::Text(value.to_string())
    }
}

impl From<String> for QueryArgument {
    fn from(value: String) -> Self {
        QueryArgument::Text(value)
    }
}

impl From<i64> for QueryArgument {
    fn from(value: i64) -> Self {
        QueryArgument::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text = QueryArgument::from("amir");
        let number = QueryArgument::from(15);

        assert_eq!(text.as_text(), Some("amir"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(number.as_integer(), Some(15));
        assert_eq!(number.as_text(), None);
    }

    #[test]
    fn test_display_matches_bound_value() {
        let arguments = vec![
            QueryArgument::from("amir"),
            QueryArgument::from("1"),
            QueryArgument::from(15),
            QueryArgument::from(30),
        ];
        let rendered: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
        assert_eq!(rendered, vec!["amir", "1", "15", "30"]);
    }

    #[test]
    fn test_serializes_untagged() {
        let arguments = vec![QueryArgument::from("admin"), QueryArgument::from(30)];
        let json = serde_json::to_string(&arguments).unwrap();
        assert_eq!(json, r#"["admin",30]"#);
    }
}
