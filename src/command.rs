//! Task commands and their aliases.

use std::io::Write;

use crate::error::{Error, Result};
use crate::store::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Close,
    Delete,
    List,
    Update,
}

impl Command {
    /// Resolves a command name or alias. `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "new" | "add" | "create" => Some(Command::Create),
            "done" | "close" => Some(Command::Close),
            "delete" | "del" | "rm" => Some(Command::Delete),
            "list" | "ls" => Some(Command::List),
            "update" => Some(Command::Update),
            _ => None,
        }
    }
}

fn operand<'a>(operands: &'a [String], index: usize, name: &'static str) -> Result<&'a str> {
    operands
        .get(index)
        .map(String::as_str)
        .ok_or(Error::MissingArgument(name))
}

fn parse_id(operands: &[String]) -> Result<i64> {
    let raw = operand(operands, 0, "id")?;
    raw.trim()
        .trim_start_matches('#')
        .parse()
        .map_err(|_| Error::InvalidId(raw.to_string()))
}

/// Runs one command against `store`, writing one line per result to `out`.
pub fn execute<W: Write>(
    store: &dyn TaskStore,
    command: Command,
    operands: &[String],
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Create => {
            let task = store.create(operand(operands, 0, "description")?)?;
            writeln!(out, "Task added: {}", task.description)?;
        }
        Command::Close => {
            let id = parse_id(operands)?;
            store.close(id)?;
            writeln!(out, "Task #{id} closed")?;
        }
        Command::Delete => {
            let id = parse_id(operands)?;
            store.delete(id)?;
            writeln!(out, "Task #{id} deleted")?;
        }
        Command::List => {
            for task in store.list()? {
                writeln!(out, "{task}")?;
            }
        }
        Command::Update => {
            let id = parse_id(operands)?;
            let description = operand(operands, 1, "description")?;
            store.update(id, description)?;
            writeln!(out, "Task #{id} updated: {description}")?;
        }
    }

    Ok(())
}
