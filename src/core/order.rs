//! Sort specifications
//!
//! A sort specification is the string form used by query engines:
//! `field` sorts ascending, `-field` sorts descending and the empty string
//! means no ordering. Relation traversals use `__` (e.g. `author__name`).

use std::fmt;

/// Separator for paths that cross a relation
pub const RELATION_SEPARATOR: &str = "__";

/// A parsed sort specification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
    /// Field name without the direction prefix (may be empty for a bare `-`)
    pub field: String,

    /// Whether ordering is descending
    pub descending: bool,
}

impl OrderBy {
    /// Ascending order on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending order on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Parse a specification
    ///
    /// Returns `None` for the empty string. A bare `-` parses to an empty
    /// descending field; callers that need a field name reject it.
    pub fn parse(spec: &str) -> Option<Self> {
        if spec.is_empty() {
            return None;
        }

        Some(match spec.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(spec),
        })
    }

    /// Whether the field follows a relation
    pub fn is_relational(&self) -> bool {
        self.field.contains(RELATION_SEPARATOR)
    }

    /// Whether a field name is present
    pub fn has_field(&self) -> bool {
        !self.field.is_empty()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(OrderBy::parse(""), None);
    }

    #[test]
    fn test_parse_directions() {
        assert_eq!(OrderBy::parse("name"), Some(OrderBy::asc("name")));
        assert_eq!(OrderBy::parse("-name"), Some(OrderBy::desc("name")));
    }

    #[test]
    fn test_bare_minus_has_no_field() {
        let order = OrderBy::parse("-").unwrap();
        assert!(order.descending);
        assert!(!order.has_field());
    }

    #[test]
    fn test_only_first_minus_is_direction() {
        let order = OrderBy::parse("--name").unwrap();
        assert!(order.descending);
        assert_eq!(order.field, "-name");
    }

    #[test]
    fn test_relational() {
        assert!(OrderBy::parse("-author__name").unwrap().is_relational());
        assert!(!OrderBy::parse("author_name").unwrap().is_relational());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderBy::desc("score").to_string(), "-score");
        assert_eq!(OrderBy::asc("score").to_string(), "score");
    }
}
