//! Command-line parsing for the form prompt
//!
//! Maps a line of user input to either a form event or a frontend command.
//! Command words are case-insensitive; arguments keep their original casing
//! because the name field and topping resolution care about it.

use crate::app::state::FormEvent;
use thiserror::Error;

/// Errors for unusable input lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),
    #[error("'{command}' needs an argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An event for the form controller
    Form(FormEvent),
    /// Redraw the form
    Show,
    /// Print the command reference
    Help,
    /// Leave the application
    Quit,
}

/// Parses a non-empty input line into a command
///
/// - `name <text>` changes the name (a bare `name` clears it)
/// - `size <S|M|L|->` changes the size; `-` selects the blank option
/// - `topping <id-or-name>` toggles a topping
/// - `submit`, `show`, `help`, `quit` are direct commands
///
/// # Example
/// ```rust
/// use pizza_form::app::state::FormEvent;
/// use pizza_form::input::{parse, Command};
///
/// let command = parse("name Alice Smith").unwrap();
/// assert_eq!(command, Command::Form(FormEvent::NameChanged("Alice Smith".into())));
/// ```
pub fn parse(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "name" => Ok(Command::Form(FormEvent::NameChanged(rest.to_string()))),
        "size" => match rest {
            "" => Err(InputError::MissingArgument {
                command: "size",
                expected: "S, M, L, or - for none",
            }),
            "-" => Ok(Command::Form(FormEvent::SizeChanged(String::new()))),
            code => Ok(Command::Form(FormEvent::SizeChanged(code.to_string()))),
        },
        "topping" => {
            if rest.is_empty() {
                Err(InputError::MissingArgument {
                    command: "topping",
                    expected: "a topping id or name",
                })
            } else {
                Ok(Command::Form(FormEvent::ToppingToggled(rest.to_string())))
            }
        }
        "submit" => Ok(Command::Form(FormEvent::SubmitRequested)),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(InputError::UnknownCommand(line.to_string())),
    }
}

/// The command reference printed by `help`
pub fn usage() -> &'static str {
    "commands:\n\
     \u{20} name <text>          set the full name (bare 'name' clears it)\n\
     \u{20} size <S|M|L|->       choose a size, '-' for none\n\
     \u{20} topping <id|name>    toggle a topping\n\
     \u{20} submit               place the order\n\
     \u{20} show                 redraw the form\n\
     \u{20} help                 show this reference\n\
     \u{20} quit                 leave"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_command_keeps_argument_verbatim() {
        assert_eq!(
            parse("name Alice Smith").unwrap(),
            Command::Form(FormEvent::NameChanged("Alice Smith".into()))
        );
        // Casing of the argument is preserved
        assert_eq!(
            parse("NAME alice").unwrap(),
            Command::Form(FormEvent::NameChanged("alice".into()))
        );
    }

    #[test]
    fn bare_name_clears_the_field() {
        assert_eq!(
            parse("name").unwrap(),
            Command::Form(FormEvent::NameChanged(String::new()))
        );
    }

    #[test]
    fn size_command_passes_raw_code() {
        assert_eq!(
            parse("size L").unwrap(),
            Command::Form(FormEvent::SizeChanged("L".into()))
        );
        // Out-of-range codes are delivered as-is; the validator flags them
        assert_eq!(
            parse("size XL").unwrap(),
            Command::Form(FormEvent::SizeChanged("XL".into()))
        );
    }

    #[test]
    fn dash_selects_blank_size() {
        assert_eq!(
            parse("size -").unwrap(),
            Command::Form(FormEvent::SizeChanged(String::new()))
        );
    }

    #[test]
    fn size_without_argument_is_an_error() {
        assert!(matches!(
            parse("size"),
            Err(InputError::MissingArgument { command: "size", .. })
        ));
    }

    #[test]
    fn topping_command_requires_argument() {
        assert_eq!(
            parse("topping Green Peppers").unwrap(),
            Command::Form(FormEvent::ToppingToggled("Green Peppers".into()))
        );
        assert!(matches!(
            parse("topping  "),
            Err(InputError::MissingArgument {
                command: "topping",
                ..
            })
        ));
    }

    #[test]
    fn direct_commands() {
        assert_eq!(parse("submit").unwrap(), Command::Form(FormEvent::SubmitRequested));
        assert_eq!(parse("show").unwrap(), Command::Show);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("EXIT").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_command_reports_the_line() {
        let err = parse("order pizza").unwrap_err();
        assert_eq!(err, InputError::UnknownCommand("order pizza".into()));
        assert_eq!(err.to_string(), "unknown command 'order pizza', try 'help'");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse("  submit  ").unwrap(),
            Command::Form(FormEvent::SubmitRequested)
        );
    }
}
