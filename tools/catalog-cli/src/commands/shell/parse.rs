//! Shell command parsing.

use anyhow::{anyhow, bail, Result};
use catalog_core::catalog::{ProductDraft, ProductField, SortKey};
use catalog_core::navigation::Direction;
use catalog_core::ProductId;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line.
    Empty,
    List,
    Sort(SortKey),
    Open(ProductId),
    Back,
    Go(Direction),
    /// `add` with no arguments prompts for each field.
    Add(Option<ProductDraft>),
    /// `delete` with no id deletes the product on the detail screen.
    Delete { id: Option<ProductId>, yes: bool },
    Edit,
    Set { field: ProductField, value: String },
    Save,
    Cancel,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self> {
        let words = split_words(line)?;
        let Some((head, args)) = words.split_first() else {
            return Ok(ShellCommand::Empty);
        };

        let command = match head.to_lowercase().as_str() {
            "list" | "ls" => {
                expect_args(head, args, 0)?;
                ShellCommand::List
            }
            "sort" => {
                expect_args(head, args, 1)?;
                ShellCommand::Sort(args[0].parse().map_err(|e: String| anyhow!(e))?)
            }
            "open" | "show" => {
                expect_args(head, args, 1)?;
                ShellCommand::Open(parse_id(&args[0])?)
            }
            "back" => {
                expect_args(head, args, 0)?;
                ShellCommand::Back
            }
            "first" | "prev" | "previous" | "next" | "last" => {
                expect_args(head, args, 0)?;
                ShellCommand::Go(head.parse().map_err(|e: String| anyhow!(e))?)
            }
            "add" => ShellCommand::Add(parse_add(args)?),
            "delete" | "rm" => parse_delete(args)?,
            "edit" => {
                expect_args(head, args, 0)?;
                ShellCommand::Edit
            }
            "set" => {
                if args.len() < 2 {
                    bail!("usage: set <field> <value>");
                }
                let field = args[0].parse().map_err(|e: String| anyhow!(e))?;
                ShellCommand::Set {
                    field,
                    value: args[1..].join(" "),
                }
            }
            "save" => {
                expect_args(head, args, 0)?;
                ShellCommand::Save
            }
            "cancel" => {
                expect_args(head, args, 0)?;
                ShellCommand::Cancel
            }
            "help" | "?" => {
                expect_args(head, args, 0)?;
                ShellCommand::Help
            }
            "quit" | "exit" | "q" => {
                expect_args(head, args, 0)?;
                ShellCommand::Quit
            }
            other => bail!("unknown command: {other} (try `help`)"),
        };
        Ok(command)
    }
}

fn expect_args(command: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() != count {
        bail!(
            "{command} takes {count} argument{}, got {}",
            if count == 1 { "" } else { "s" },
            args.len()
        );
    }
    Ok(())
}

fn parse_id(text: &str) -> Result<ProductId> {
    text.parse()
        .map_err(|_| anyhow!("product id must be an integer: {text}"))
}

fn parse_add(args: &[String]) -> Result<Option<ProductDraft>> {
    match args.len() {
        0 => Ok(None),
        4 | 5 => {
            let draft = ProductField::ALL
                .iter()
                .zip(args)
                .fold(ProductDraft::new(), |draft, (field, value)| {
                    draft.with(*field, value.as_str())
                });
            Ok(Some(draft))
        }
        _ => bail!("usage: add [<id> <name> <category> <price> [<description>]]"),
    }
}

fn parse_delete(args: &[String]) -> Result<ShellCommand> {
    let mut id = None;
    let mut yes = false;
    for arg in args {
        match arg.as_str() {
            "-y" | "--yes" => yes = true,
            text if id.is_none() => id = Some(parse_id(text)?),
            _ => bail!("usage: delete [<id>] [-y]"),
        }
    }
    Ok(ShellCommand::Delete { id, yes })
}

/// Split a line into words, honouring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        bail!("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
