use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Initialize color mode based on CLI choice and environment.
///
/// Status messages go to stderr and reports to stdout, so `auto` colors when
/// either stream is a terminal.
pub fn init(choice: ColorChoice) {
    let terminal = std::io::stdout().is_terminal() || std::io::stderr().is_terminal();
    // Respect NO_COLOR standard (https://no-color.org/)
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    colored::control::set_override(should_color(choice, no_color, terminal));
}

fn should_color(choice: ColorChoice, no_color: bool, terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !no_color && terminal,
    }
}
