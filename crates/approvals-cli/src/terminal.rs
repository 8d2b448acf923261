// Rust guideline compliant 2026-10-18

//! Terminal UI utilities for the approval queue CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Prints a message with a colored prefix to stdout.
///
/// # Arguments
/// * `prefix` - The prefix text (e.g. "✓")
/// * `prefix_color` - Color of the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stdout, "{}", prefix);
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {}", message);
}

/// Prints a success message.
pub fn print_success(message: &str, use_color: bool) {
    print_status("✓", Color::Green, message, use_color);
}

/// Prints a warning message.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("!", Color::Yellow, message, use_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_color_respects_no_color() {
        env::set_var("NO_COLOR", "1");
        assert!(!should_use_color());
        env::remove_var("NO_COLOR");
    }
}
