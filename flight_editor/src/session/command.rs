use std::str::FromStr;

use crate::core::fields::{SearchField, SortKey};

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a page of rows, optionally starting at a given position.
    List { offset: Option<usize> },
    Next,
    Prev,
    Search { field: SearchField, query: String },
    Sort(SortKey),
    Insert { position: usize, line: String },
    Append { line: String },
    Delete { position: usize },
    Update { position: usize, line: String },
    Save,
    /// `quit` refuses to drop unsaved changes, `quit!` discards them.
    Quit { force: bool },
    Help,
}

/// Usage text listing every command.
pub const USAGE: &str = "\
Commands:
  list [offset]                     show a page of flights
  next | prev                       page forward / backward
  search <field> <query>            field: flight, origin, destination
  sort <key>                        key: flight, origin, destination, capacity, time, price, stops
  insert <position> <record>        record: AB 12,JFK,LAX,180,1230,199.99,0,
  append <record>
  delete <position>
  update <position> <record>
  save
  quit | quit!
  help";

/// A console line that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (verb, rest) = split_word(input);

        match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => {
                let offset = if rest.is_empty() {
                    None
                } else {
                    Some(parse_position(rest)?)
                };
                Ok(Command::List { offset })
            }
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "search" | "find" => {
                let (field, query) = split_word(rest);
                if field.is_empty() {
                    return Err(ParseCommandError("Usage: search <field> <query>".to_string()));
                }
                let field = field.parse::<SearchField>().map_err(ParseCommandError)?;
                Ok(Command::Search {
                    field,
                    query: query.to_string(),
                })
            }
            "sort" => {
                if rest.is_empty() {
                    return Err(ParseCommandError("Usage: sort <key>".to_string()));
                }
                let key = rest.parse::<SortKey>().map_err(ParseCommandError)?;
                Ok(Command::Sort(key))
            }
            "insert" => {
                let (position, line) = position_and_record(rest, "insert")?;
                Ok(Command::Insert { position, line })
            }
            "append" | "add" => {
                if rest.is_empty() {
                    return Err(ParseCommandError("Usage: append <record>".to_string()));
                }
                Ok(Command::Append {
                    line: rest.to_string(),
                })
            }
            "delete" | "del" | "rm" => Ok(Command::Delete {
                position: parse_position(rest)?,
            }),
            "update" => {
                let (position, line) = position_and_record(rest, "update")?;
                Ok(Command::Update { position, line })
            }
            "save" | "w" => Ok(Command::Save),
            "quit" | "q" | "exit" => Ok(Command::Quit { force: false }),
            "quit!" | "q!" => Ok(Command::Quit { force: true }),
            "help" | "?" => Ok(Command::Help),
            "" => Err(ParseCommandError("Empty command".to_string())),
            other => Err(ParseCommandError(format!(
                "Unknown command: {}. Type `help` for the list",
                other
            ))),
        }
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its
/// inner spacing.
fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_position(token: &str) -> Result<usize, ParseCommandError> {
    token
        .trim()
        .parse()
        .map_err(|_| ParseCommandError(format!("Invalid position: {:?}", token.trim())))
}

fn position_and_record(rest: &str, verb: &str) -> Result<(usize, String), ParseCommandError> {
    let (position, record) = split_word(rest);
    if position.is_empty() || record.is_empty() {
        return Err(ParseCommandError(format!(
            "Usage: {} <position> <record>",
            verb
        )));
    }
    Ok((parse_position(position)?, record.to_string()))
}
