/*!
 * Tests for error types and conversions
 */

use subfit::errors::{ConfigError, ProjectFixError, ReflowError};

#[test]
fn test_reflowError_emptyInput_shouldDisplayCorrectly() {
    let display = format!("{}", ReflowError::EmptyInput);
    assert!(display.contains("empty"));
}

#[test]
fn test_configError_invalidBounds_shouldDisplayAllValues() {
    let error = ConfigError::InvalidBounds { min: 40, max: 20, limit: 50 };
    let display = format!("{}", error);
    assert!(display.contains("min 40"));
    assert!(display.contains("max 20"));
    assert!(display.contains("50"));
}

#[test]
fn test_projectFixError_invalidUtf8_shouldConvertFromFromUtf8Error() {
    let utf8_error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
    let error: ProjectFixError = utf8_error.into();
    assert!(matches!(error, ProjectFixError::InvalidUtf8(_)));
    assert!(format!("{}", error).contains("not valid UTF-8"));
}
