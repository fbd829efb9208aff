//! Result type alias for Docket
//!
//! This module provides a convenient Result type alias that uses DocketError
//! as the error type.

use super::errors::DocketError;

/// Result type alias for Docket operations
///
/// This is a convenience type alias that uses `DocketError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use docket::domain::result::Result;
/// use docket::domain::errors::DocketError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DocketError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DocketError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DocketError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(DocketError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
