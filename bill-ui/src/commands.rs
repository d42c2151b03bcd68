//! Parsing of session input lines into commands.

use std::collections::BTreeSet;
use std::num::ParseIntError;
use std::str::FromStr;

use bill_core::{CalculationError, PeopleCount, TipPercentage};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{input}' is not a whole number: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("history positions start at 1")]
    ZeroPosition,

    #[error(transparent)]
    Invalid(#[from] CalculationError),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the bill text; an empty text clears it.
    Bill(String),
    Tip(TipPercentage),
    People(PeopleCount),
    More,
    Fewer,
    Save,
    History,
    /// Zero-based positions in the newest-first view.
    Delete(BTreeSet<usize>),
    Show,
    Log(String),
    Help,
    Quit,
}

fn parse_number<T: FromStr<Err = ParseIntError>>(input: &str) -> Result<T, CommandError> {
    input.parse().map_err(|source| CommandError::InvalidNumber {
        input: input.to_string(),
        source,
    })
}

fn require<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        if keyword.is_empty() {
            return Err(CommandError::Empty);
        }

        match keyword.to_ascii_lowercase().as_str() {
            "bill" => Ok(Self::Bill(rest.to_string())),
            "tip" => {
                let arg = require(rest, "tip", "a percentage (0, 10, 15, 20 or 25)")?;
                let value: u8 = parse_number(arg.strip_suffix('%').unwrap_or(arg))?;
                Ok(Self::Tip(TipPercentage::try_from(value)?))
            }
            "people" => {
                let arg = require(rest, "people", "a count from 2 to 20")?;
                Ok(Self::People(PeopleCount::new(parse_number(arg)?)?))
            }
            "more" | "+" => Ok(Self::More),
            "fewer" | "-" => Ok(Self::Fewer),
            "save" => Ok(Self::Save),
            "history" => Ok(Self::History),
            "delete" => {
                let args = require(rest, "delete", "one or more history positions")?;
                let mut positions = BTreeSet::new();
                for arg in args.split_whitespace() {
                    let shown: usize = parse_number(arg)?;
                    let position = shown.checked_sub(1).ok_or(CommandError::ZeroPosition)?;
                    positions.insert(position);
                }
                Ok(Self::Delete(positions))
            }
            "show" => Ok(Self::Show),
            "log" => Ok(Self::Log(
                require(rest, "log", "a level or filter directive")?.to_string(),
            )),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(keyword.to_string())),
        }
    }
}
