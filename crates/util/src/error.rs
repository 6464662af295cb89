use thiserror::Error;

/// Errors surfaced by the few fallible helpers in this crate.
///
/// Most helpers never fail: out-of-range input is normalised and malformed
/// JSON falls back to a default. Only parsing-style helpers return this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid date")]
    InvalidDate,

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message_is_fixed() {
        assert_eq!(UtilError::InvalidDate.to_string(), "Invalid date");
    }

    #[test]
    fn test_messages_carry_detail() {
        assert_eq!(
            UtilError::InvalidPattern("(".into()).to_string(),
            "Invalid pattern: ("
        );
        assert_eq!(UtilError::InvalidPath("a..b".into()).to_string(), "Invalid path: a..b");
    }
}
