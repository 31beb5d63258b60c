//! Error type for recoverable extraction from an [`Optional`](super::Optional).

/// Represents an attempt to extract a value from an absent optional.
///
/// Returned by [`Optional::try_unwrap`](super::Optional::try_unwrap) for
/// callers that treat absence as a recoverable condition. The panicking
/// [`Optional::unwrap`](super::Optional::unwrap) remains the contract-violation
/// path.
///
/// # Examples
///
/// ```rust
/// use lazyseq::optional::AbsentValueError;
///
/// assert_eq!(
///     format!("{}", AbsentValueError),
///     "attempted to extract a value from an absent optional"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError;

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("attempted to extract a value from an absent optional")
    }
}

impl std::error::Error for AbsentValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_error_display() {
        assert_eq!(
            AbsentValueError.to_string(),
            "attempted to extract a value from an absent optional"
        );
    }

    #[test]
    fn test_absent_value_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(AbsentValueError);
        assert!(error.source().is_none());
    }
}
