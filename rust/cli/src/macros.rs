//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or record the failure and continue to the next line.
///
/// Failures are pushed onto `$errors` as a [`crate::BatchValidationError`]
/// keyed by `$context`.
///
/// # Examples
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, skipped, line_no);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $errors:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $errors.push($crate::BatchValidationError {
                    item_context: $context,
                    message: e.to_string(),
                });
                continue;
            }
        }
    };
}
