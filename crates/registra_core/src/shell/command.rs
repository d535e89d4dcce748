//! Command-line classification and argument extraction.
//!
//! # Responsibility
//! - Classify one line of input by its first whitespace-delimited token and
//!   extract validated arguments.
//!
//! # Invariants
//! - Verbs match exactly (case-insensitively); `addendum` is an unknown
//!   command, never a malformed `add`.
//! - Name arguments are taken verbatim from the rest of the line and may
//!   contain spaces; they are not trimmed or otherwise normalized.

use crate::model::record::RecordId;

/// One fully classified command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `find-all`: list every record.
    FindAll,
    /// `find <id>`: look up one record.
    Find { id: RecordId },
    /// `add <name>`: create a record; name is the remainder of the line.
    Add { name: String },
    /// `edit <id> <name>`: rename; name is everything after the second space.
    Edit { id: RecordId, name: String },
    /// `delete <id>`: remove one record.
    Delete { id: RecordId },
    /// `lang <code>`: switch the session language.
    Lang { code: String },
    /// `exit`: terminate the session.
    Exit,
}

/// Classification failures, each mapped to its own localized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into the number of parts the verb expects.
    MissingParameter,
    /// The id token is not a valid integer.
    InvalidId,
    /// The first token matches no recognized verb.
    UnknownCommand,
}

impl ParseError {
    pub(crate) fn message_key(self) -> crate::i18n::MessageKey {
        match self {
            Self::MissingParameter => crate::i18n::MessageKey::ErrorMissingParameter,
            Self::InvalidId => crate::i18n::MessageKey::ErrorInvalidId,
            Self::UnknownCommand => crate::i18n::MessageKey::ErrorUnknownCommand,
        }
    }
}

/// Parses one input line into a command.
///
/// The verb is the text before the first space; the remainder, when a verb
/// takes arguments, is passed through verbatim.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (line, None),
    };

    match verb.to_ascii_lowercase().as_str() {
        // Zero-argument verbs: any trailing text means the line is not that
        // command.
        "find-all" => match rest {
            None => Ok(Command::FindAll),
            Some(_) => Err(ParseError::UnknownCommand),
        },
        "find" => Ok(Command::Find {
            id: parse_id(rest)?,
        }),
        "add" => match rest {
            Some(name) => Ok(Command::Add {
                name: name.to_string(),
            }),
            None => Err(ParseError::MissingParameter),
        },
        "edit" => {
            let rest = rest.ok_or(ParseError::MissingParameter)?;
            let (id_token, name) = rest.split_once(' ').ok_or(ParseError::MissingParameter)?;
            Ok(Command::Edit {
                id: parse_id(Some(id_token))?,
                name: name.to_string(),
            })
        }
        "delete" => Ok(Command::Delete {
            id: parse_id(rest)?,
        }),
        "lang" => match rest {
            Some(code) => Ok(Command::Lang {
                code: code.to_string(),
            }),
            None => Err(ParseError::MissingParameter),
        },
        "exit" => match rest {
            None => Ok(Command::Exit),
            Some(_) => Err(ParseError::UnknownCommand),
        },
        _ => Err(ParseError::UnknownCommand),
    }
}

fn parse_id(token: Option<&str>) -> Result<RecordId, ParseError> {
    let token = token.ok_or(ParseError::MissingParameter)?;
    token.parse::<RecordId>().map_err(|_| ParseError::InvalidId)
}
