//! Line-oriented scripts of queue operations.
//!
//! ```text
//! # comment
//! enqueue 5 High
//! enqueue -1 some value with spaces
//! dequeue
//! len
//! drain
//! ```

use crate::queue::Priority;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Enqueue { value: String, priority: Priority },
    Dequeue,
    Drain,
    Len,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: missing priority")]
    MissingPriority { line: usize },
    #[error("line {line}: invalid priority `{priority}`")]
    InvalidPriority { line: usize, priority: String },
    #[error("line {line}: missing value")]
    MissingValue { line: usize },
    #[error("line {line}: `{command}` takes no arguments")]
    UnexpectedArguments { line: usize, command: &'static str },
    #[error("input is not UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], text[index..].trim_start()),
        None => (text, ""),
    }
}

fn no_arguments(
    line: usize,
    command: &'static str,
    rest: &str,
    parsed: Command,
) -> Result<Command, ScriptError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArguments { line, command })
    }
}

fn enqueue(line: usize, rest: &str) -> Result<Command, ScriptError> {
    let (priority, value) = split_word(rest);
    if priority.is_empty() {
        return Err(ScriptError::MissingPriority { line });
    }
    let priority = priority.parse::<Priority>().map_err(|_| {
        let priority = priority.to_string();
        ScriptError::InvalidPriority { line, priority }
    })?;
    if value.is_empty() {
        return Err(ScriptError::MissingValue { line });
    }
    let value = value.to_string();
    Ok(Command::Enqueue { value, priority })
}

fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let (command, rest) = split_word(text);
    let parsed = match command {
        "enqueue" => enqueue(line, rest)?,
        "dequeue" => no_arguments(line, "dequeue", rest, Command::Dequeue)?,
        "drain" => no_arguments(line, "drain", rest, Command::Drain)?,
        "len" => no_arguments(line, "len", rest, Command::Len)?,
        _ => {
            let command = command.to_string();
            return Err(ScriptError::UnknownCommand { line, command });
        }
    };
    Ok(Some(parsed))
}

pub fn parse_str(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = vec![];
    for (index, text) in text.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, text)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

pub fn parse(bytes: &[u8]) -> Result<Vec<Command>, ScriptError> {
    parse_str(std::str::from_utf8(bytes)?)
}
