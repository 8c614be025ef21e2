//! Interactive form shell
//!
//! A line-oriented stand-in for the web form: each line is one user action
//! (type into a field, press edit on a card, press submit). Failed remote
//! calls are reported and the session carries on with its state untouched.

use std::io::Write;

use crate::api::RecipeApi;
use crate::manager::{RecipeManager, Submitted};
use crate::model::{FormField, RecipeId};
use crate::view;

pub const HELP: &str = "\
Commands:
  list                 fetch and show the recipe list
  form                 show the form and its current values
  set <field> <value>  type into a form field
  edit <id>            load a listed recipe into the form
  submit               add the recipe, or update it in edit mode
  delete <id>          delete a recipe
  fields               list field names
  help                 show this help
  quit                 leave the shell
";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Form,
    Set(FormField, String),
    Edit(RecipeId),
    Submit,
    Delete(RecipeId),
    Fields,
    Help,
    Quit,
    Empty,
}

/// Parse one input line
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let id_arg = |rest: &str| -> Result<RecipeId, String> {
        if rest.is_empty() {
            return Err(format!("usage: {} <id>", verb));
        }
        rest.parse::<RecipeId>().map_err(|e| e.to_string())
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Empty),
        "list" | "ls" => Ok(Command::List),
        "form" | "show" => Ok(Command::Form),
        "submit" => Ok(Command::Submit),
        "fields" => Ok(Command::Fields),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "edit" => id_arg(rest).map(Command::Edit),
        "delete" | "rm" => id_arg(rest).map(Command::Delete),
        "set" => {
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (rest, ""),
            };
            if key.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            FormField::from_key(key)
                .map(|field| Command::Set(field, value.to_string()))
                .ok_or_else(|| format!("unknown field '{}' (try 'fields')", key))
        }
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one command against the manager, writing output to `out`
pub async fn execute<A, W>(
    manager: &mut RecipeManager<A>,
    command: Command,
    out: &mut W,
) -> std::io::Result<Flow>
where
    A: RecipeApi,
    W: Write,
{
    match command {
        Command::Empty => {}
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => write!(out, "{}", HELP)?,
        Command::Fields => {
            for field in FormField::all() {
                writeln!(out, "  {:<12} {}", field.key(), field.label())?;
            }
        }
        Command::Form => write!(out, "{}", view::render_form(manager.state()))?,
        Command::List => match manager.list().await {
            Ok(_) => write!(out, "{}", view::render_list(manager.recipes()))?,
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Command::Set(field, value) => manager.set_field(field, value),
        Command::Edit(id) => match manager.select(&id) {
            Some(_) => write!(out, "{}", view::render_form(manager.state()))?,
            None => writeln!(out, "no listed recipe with id {}", id)?,
        },
        Command::Submit => match manager.submit().await {
            Ok(Submitted::Created(recipe)) => {
                writeln!(out, "added recipe {} ({})", recipe.id, recipe.name)?
            }
            Ok(Submitted::Updated(recipe)) => {
                writeln!(out, "updated recipe {} ({})", recipe.id, recipe.name)?
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        },
        Command::Delete(id) => match manager.delete(&id).await {
            Ok(()) => writeln!(out, "deleted recipe {}", id)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        },
    }
    Ok(Flow::Continue)
}
