//! Command-line tokenization
//!
//! The argument grammar is deliberately minimal: tokens are split on single
//! spaces (no quoting or escaping), a `--name` token opens a command, and
//! every bare token belongs to the most recently opened command.

use std::env;

/// Marker name for parameters that appeared before any `--flag`. Not an
/// executable command; the dispatcher rejects it as unknown.
pub const NULL_COMMAND: &str = "null";

/// One named command with its positional parameters, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub params: Vec<String>,
}

impl Command {
    fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            params: Vec::new(),
        }
    }
}

/// Read the arguments this process was launched with, joined back into a
/// single space-separated string.
pub fn read_command_line() -> String {
    env::args().skip(1).collect::<Vec<_>>().join(" ")
}

/// Split a raw argument string into commands.
///
/// Walks tokens left to right: `--`-prefixed tokens open a new command (the
/// prefix is stripped), bare tokens append to the currently open command, and
/// bare tokens seen before any flag collect under [`NULL_COMMAND`].
/// First-seen order is preserved.
pub fn tokenize(raw: &str) -> Vec<Command> {
    let mut commands: Vec<Command> = Vec::new();
    if raw.is_empty() {
        return commands;
    }
    for token in raw.split(' ') {
        if let Some(name) = token.strip_prefix("--") {
            commands.push(Command::new(name));
        } else if let Some(current) = commands.last_mut() {
            current.params.push(token.to_string());
        } else {
            let mut stray = Command::new(NULL_COMMAND);
            stray.params.push(token.to_string());
            commands.push(stray);
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty_input_yields_no_commands() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_flag_without_params() {
        let commands = tokenize("--solo");
        assert_eq!(commands, vec![Command::new("solo")]);
    }

    #[test]
    fn test_tokenize_preserves_order_and_ownership() {
        let commands = tokenize("--test 1 2 3 --game --123 karl");
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].name, "test");
        assert_eq!(commands[0].params, vec!["1", "2", "3"]);
        assert_eq!(commands[1].name, "game");
        assert!(commands[1].params.is_empty());
        assert_eq!(commands[2].name, "123");
        assert_eq!(commands[2].params, vec!["karl"]);
    }

    #[test]
    fn test_tokenize_leading_bare_tokens_become_null_command() {
        let commands = tokenize("stray tokens --cmd a");
        assert_eq!(commands[0].name, NULL_COMMAND);
        assert_eq!(commands[0].params, vec!["stray", "tokens"]);
        assert_eq!(commands[1].name, "cmd");
        assert_eq!(commands[1].params, vec!["a"]);
    }
}
