//! Result type alias
//!
//! A convenient Result type alias that uses [`SlideExportError`] as the error type.

use super::errors::SlideExportError;

/// Result type alias for slide export operations
///
/// # Examples
///
/// ```
/// use slide_export::domain::result::Result;
/// use slide_export::domain::errors::SlideExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SlideExportError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlideExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<u32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
