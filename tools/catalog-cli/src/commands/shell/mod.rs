//! Interactive list/detail session.

mod parse;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use catalog_core::catalog::{Product, ProductDraft, ProductField};
use catalog_core::session::{CatalogSession, Screen};
use catalog_core::{CatalogError, ProductId};
use console::style;
use dialoguer::{Confirm, Input};
use tracing::debug;

pub use parse::ShellCommand;

use super::ShellArgs;
use crate::context::Context;
use crate::output::Output;

/// What the loop should do after a command.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Redraw the current screen.
    Render,
    /// Print a message, then redraw.
    Done(String),
    Help,
    Quit,
}

/// Run the shell command.
pub fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let mut session = CatalogSession::new(ctx.build_store()?);
    let prompts = Prompts {
        attended: console::user_attended(),
        confirm_delete: ctx.config.shell.confirm_delete && !args.yes,
    };

    render(&session, &ctx.output);
    ctx.output.info("Type `help` for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", style(format!("catalog:{}>", session.screen().name())).cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match ShellCommand::parse(&line?) {
            Ok(command) => command,
            Err(e) => {
                ctx.output.error(&e.to_string());
                continue;
            }
        };

        let command = match prepare(command, &session, prompts) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                ctx.output.error(&format!("{e:#}"));
                continue;
            }
        };

        match apply(&mut session, command) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Help) => print_help(&ctx.output),
            Ok(Outcome::Render) => render(&session, &ctx.output),
            Ok(Outcome::Done(message)) => {
                render(&session, &ctx.output);
                ctx.output.success(&message);
            }
            Err(e) => report(&e, &ctx.output),
        }
    }

    Ok(())
}

fn report(err: &CatalogError, output: &Output) {
    match err {
        CatalogError::NotFound(_) => output.warn(&err.to_string()),
        CatalogError::Validation(errors) => {
            output.error("validation failed");
            for field_error in errors.errors() {
                output.list_item(&field_error.to_string());
            }
        }
        _ => output.error(&err.to_string()),
    }
}

/// Whether the shell may ask the user anything.
#[derive(Debug, Clone, Copy)]
struct Prompts {
    /// A person is at the terminal.
    attended: bool,
    confirm_delete: bool,
}

/// Fill in anything a command needs from the terminal before applying it.
///
/// Returns `None` when the user backs out. Without a terminal, `add` opens
/// the form for `set`/`save` and `delete` goes ahead unasked.
fn prepare(
    command: ShellCommand,
    session: &CatalogSession,
    prompts: Prompts,
) -> Result<Option<ShellCommand>> {
    if !prompts.attended {
        return Ok(Some(command));
    }
    match command {
        ShellCommand::Add(None) if session.screen().is_list() => {
            let mut draft = ProductDraft::new();
            for field in ProductField::ALL {
                let value: String = Input::new()
                    .with_prompt(field.label())
                    .allow_empty(true)
                    .interact_text()?;
                draft.set(field, value);
            }
            Ok(Some(ShellCommand::Add(Some(draft))))
        }
        ShellCommand::Delete { id, yes: false } if prompts.confirm_delete => {
            let Some(target) = id.or(session.screen().detail_id()) else {
                return Ok(Some(ShellCommand::Delete { id, yes: false }));
            };
            let name = session
                .store()
                .get(target)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| target.to_string());
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete {name}?"))
                .default(false)
                .interact()?;
            Ok(confirmed.then_some(ShellCommand::Delete {
                id: Some(target),
                yes: true,
            }))
        }
        other => Ok(Some(other)),
    }
}

/// Apply one command to the session.
pub fn apply(session: &mut CatalogSession, command: ShellCommand) -> Result<Outcome, CatalogError> {
    debug!(?command, screen = session.screen().name(), "shell command");

    let outcome = match command {
        ShellCommand::Empty | ShellCommand::List => Outcome::Render,
        ShellCommand::Sort(key) => {
            session.sort(key);
            Outcome::Render
        }
        ShellCommand::Open(id) => {
            session.open_detail(id)?;
            Outcome::Render
        }
        ShellCommand::Back => {
            match session.screen() {
                Screen::List => {}
                Screen::AddForm(_) => session.cancel_add()?,
                Screen::Detail { edit: Some(_), .. } => session.cancel_edit()?,
                Screen::Detail { edit: None, .. } => session.close_detail()?,
            }
            Outcome::Render
        }
        ShellCommand::Go(direction) => {
            session.navigate(direction)?;
            Outcome::Render
        }
        ShellCommand::Add(None) => {
            session.open_add_form()?;
            Outcome::Render
        }
        ShellCommand::Add(Some(draft)) => {
            if !matches!(session.screen(), Screen::AddForm(_)) {
                session.open_add_form()?;
            }
            for field in ProductField::ALL {
                session.set_add_field(field, draft.get(field))?;
            }
            let id = session.submit_add()?;
            Outcome::Done(format!("Added product {id}"))
        }
        ShellCommand::Delete { id, .. } => {
            let target = id
                .or(session.screen().detail_id())
                .ok_or(CatalogError::InvalidTransition {
                    from: session.screen().name(),
                    action: "delete without an id",
                })?;
            let removed = session.delete(target)?;
            Outcome::Done(format!("Deleted {} ({})", removed.name, removed.id))
        }
        ShellCommand::Edit => {
            session.begin_edit()?;
            Outcome::Render
        }
        ShellCommand::Set { field, value } => {
            match session.screen() {
                Screen::AddForm(_) => session.set_add_field(field, value)?,
                _ => session.set_edit_field(field, value)?,
            }
            Outcome::Render
        }
        ShellCommand::Save => {
            let id: ProductId = match session.screen() {
                Screen::AddForm(_) => session.submit_add()?,
                _ => session.save_edit()?,
            };
            Outcome::Done(format!("Saved product {id}"))
        }
        ShellCommand::Cancel => {
            match session.screen() {
                Screen::AddForm(_) => session.cancel_add()?,
                _ => session.cancel_edit()?,
            }
            Outcome::Render
        }
        ShellCommand::Help => Outcome::Help,
        ShellCommand::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Draw the current screen.
pub fn render(session: &CatalogSession, output: &Output) {
    let store = session.store();
    match session.screen() {
        Screen::List => {
            output.header("Products");
            output.sort_bar(store.active_sort());
            output.product_table(store.products());
        }
        Screen::AddForm(draft) => {
            output.header("Add Product");
            print_draft(draft, output);
            output.info("`set <field> <value>`, then `save` or `cancel`.");
        }
        Screen::Detail { id, edit } => {
            let Some(product) = store.get(*id) else {
                output.warn(&format!("Product {id} is no longer in the catalog."));
                return;
            };
            output.header("Product Details");
            output.product_card(product);
            print_position(product, store.products(), output);
            if let Some(draft) = edit {
                output.header("Edit Product");
                print_draft(draft, output);
                output.info("`set <field> <value>`, then `save` or `cancel`.");
            }
        }
    }
}

fn print_draft(draft: &ProductDraft, output: &Output) {
    for field in ProductField::ALL {
        output.kv(field.label(), draft.get(field));
    }
}

fn print_position(product: &Product, products: &[Product], output: &Output) {
    if let Some(index) = products.iter().position(|p| p.id == product.id) {
        output.kv("Position", &format!("{} of {}", index + 1, products.len()));
    }
}

fn print_help(output: &Output) {
    output.header("Commands");
    for line in [
        "list                      show the product list",
        "sort <id|price>           sort the catalog ascending",
        "open <id>                 show a product",
        "first | prev | next | last  move between products",
        "back                      leave the current screen",
        "add [id name category price [description]]",
        "delete [<id>] [-y]        delete a product",
        "edit                      edit the shown product",
        "set <field> <value>       change a form field",
        "save | cancel             finish the open form",
        "quit                      leave the shell",
    ] {
        output.list_item(line);
    }
}
