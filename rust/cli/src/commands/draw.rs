//! Draw command handler: one set of winning numbers.

use crate::error::CliError;
use crate::formatters::format_numbers;
use keno_engine::draw::{Drawer, generate_draw_numbers};
use std::io::Write;

/// Handle the draw command.
///
/// With a seed the draw is reproducible; without one it comes from the
/// thread-local CSPRNG.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when `count` is zero or exceeds `max`.
pub fn handle_draw_command(
    count: u8,
    max: u8,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let drawn = match seed {
        Some(s) => Drawer::new_with_seed(s).draw_numbers(count, max),
        None => generate_draw_numbers(count, max),
    }
    .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    writeln!(out, "Drawn ({} of {}): {}", count, max, format_numbers(&drawn))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_command_deterministic_with_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_draw_command(20, 80, Some(12345), &mut out1).unwrap();
        handle_draw_command(20, 80, Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_draw_command_output_format() {
        let mut out = Vec::new();
        handle_draw_command(5, 10, None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Drawn (5 of 10): "));
        assert_eq!(output.trim_end().split(", ").count(), 5);
    }

    #[test]
    fn test_draw_command_rejects_bad_range() {
        let mut out = Vec::new();
        let result = handle_draw_command(30, 20, None, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
