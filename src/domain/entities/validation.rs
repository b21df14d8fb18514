//! Outcomes of slug validation and availability probes.

/// Result of validating a candidate slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        reason: String,
        suggestions: Vec<String>,
    },
}

impl ValidationResult {
    /// Rejection for a slug that contains a prohibited word. Never carries
    /// suggestions.
    pub fn prohibited(slug: &str) -> Self {
        Self::Invalid {
            reason: format!("\"{slug}\" contains prohibited content"),
            suggestions: Vec::new(),
        }
    }

    /// Rejection for a slug already bound to a short link.
    pub fn taken(slug: &str, suggestions: Vec<String>) -> Self {
        Self::Invalid {
            reason: format!("\"{slug}\" is already taken"),
            suggestions,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason, .. } => Some(reason),
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::Valid => &[],
            Self::Invalid { suggestions, .. } => suggestions,
        }
    }
}

/// Answer to "can I have this slug?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAvailability {
    /// The canonicalized slug that was checked.
    pub original: String,
    pub available: bool,
    /// Empty when `available` is true.
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_reason_or_suggestions() {
        let result = ValidationResult::Valid;
        assert!(result.is_valid());
        assert!(result.reason().is_none());
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_prohibited_reason() {
        let result = ValidationResult::prohibited("badword");
        assert!(!result.is_valid());
        assert_eq!(
            result.reason(),
            Some("\"badword\" contains prohibited content")
        );
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_taken_keeps_suggestions() {
        let result = ValidationResult::taken("taken", vec!["my-taken".to_string()]);
        assert_eq!(result.reason(), Some("\"taken\" is already taken"));
        assert_eq!(result.suggestions(), ["my-taken".to_string()]);
    }
}
