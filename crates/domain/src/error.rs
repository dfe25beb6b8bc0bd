//! Validation errors raised by domain parsing.

/// Rejection reasons for user-entered values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An env line has no `=` separator.
    #[error("env line {line}: expected `key=value`")]
    MissingEnvSeparator {
        /// 1-based line number in the editor text.
        line: usize,
    },

    /// An env line has nothing before its `=`.
    #[error("env line {line}: key is empty")]
    EmptyEnvKey {
        /// 1-based line number in the editor text.
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_line_number_for_missing_separator() {
        let err = ValidationError::MissingEnvSeparator { line: 3 };
        assert_eq!(err.to_string(), "env line 3: expected `key=value`");
    }

    #[test]
    fn should_display_line_number_for_empty_key() {
        let err = ValidationError::EmptyEnvKey { line: 1 };
        assert_eq!(err.to_string(), "env line 1: key is empty");
    }
}
