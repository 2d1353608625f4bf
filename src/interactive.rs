//! Line-driven portal hosting both views behind the view switcher.
//!
//! DESIGN
//! ======
//! One [`Shell`] owns the mounted screen. Each input line parses into a
//! [`ShellCommand`]; the command is applied to whichever screen is mounted
//! and any effects it returns run to completion before the screen is redrawn.
//! Commands that belong to the other view are refused with a hint instead of
//! switching implicitly.

#[cfg(test)]
#[path = "interactive_test.rs"]
mod interactive_test;

use std::io::{BufRead, Write};

use portal::dashboard::Effect;
use portal::shell::{Screen, Shell, ViewKind};
use portal::{Category, PageLimit, ReviewFilter, SortOrder};

use crate::api::FeedbackApi;
use crate::error::CliError;
use crate::render;
use crate::runner::{run_effects, submit_form};

const HELP: &str = "\
Commands:
  view employee|admin     switch view (state is reset)
  toggle                  switch to the other view
  category <name>|any     form category, or dashboard filter
  text <feedback>         set the feedback text (employee)
  submit                  submit the form (employee)
  reviewed any|true|false filter by status (admin)
  limit 5|10|20|50        page size (admin)
  sort <key>|none         server sort key, e.g. -submissionTime (admin)
  page <n> | next | prev  move between pages (admin)
  search [term]           filter the current page (admin)
  review <id>             mark as reviewed (admin)
  delete <id>             ask to delete; then confirm or cancel (admin)
  refresh | show | dismiss
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Quit,
    Show,
    Dismiss,
    View(ViewKind),
    Toggle,
    Category(Option<Category>),
    Text(String),
    Submit,
    Reviewed(ReviewFilter),
    Limit(PageLimit),
    Sort(Option<SortOrder>),
    Page(u32),
    Next,
    Previous,
    Search(String),
    Refresh,
    Review(String),
    Delete(String),
    Confirm,
    Cancel,
}

/// Parse one input line. The error is the text to show the user.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        "show" => ShellCommand::Show,
        "dismiss" => ShellCommand::Dismiss,
        "view" => ShellCommand::View(rest.parse().map_err(|e| format!("{e}"))?),
        "toggle" => ShellCommand::Toggle,
        "category" => match rest.to_ascii_lowercase().as_str() {
            "" | "any" | "all" | "none" => ShellCommand::Category(None),
            _ => ShellCommand::Category(Some(rest.parse().map_err(|e| format!("{e}"))?)),
        },
        "text" => ShellCommand::Text(rest.to_owned()),
        "submit" => ShellCommand::Submit,
        "reviewed" => ShellCommand::Reviewed(rest.parse().map_err(|e| format!("{e}"))?),
        "limit" => ShellCommand::Limit(rest.parse().map_err(|e| format!("{e}"))?),
        "sort" => match rest {
            "" | "none" | "default" => ShellCommand::Sort(None),
            _ => ShellCommand::Sort(Some(rest.parse().map_err(|e| format!("{e}"))?)),
        },
        "page" => ShellCommand::Page(rest.parse().map_err(|_| format!("invalid page number: {rest}"))?),
        "next" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Previous,
        "search" => ShellCommand::Search(rest.to_owned()),
        "refresh" => ShellCommand::Refresh,
        "review" => ShellCommand::Review(required_id(rest)?),
        "delete" => ShellCommand::Delete(required_id(rest)?),
        "confirm" | "yes" | "y" => ShellCommand::Confirm,
        "cancel" | "no" | "n" => ShellCommand::Cancel,
        other => return Err(format!("unknown command: {other} (try help)")),
    };
    Ok(command)
}

fn required_id(rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err("missing feedback id".to_owned());
    }
    Ok(rest.to_owned())
}

/// Read commands from `input` until it ends or `quit` is entered.
///
/// # Errors
///
/// Only I/O failures on `input` or `out` end the session early.
pub async fn run<A, R, W>(api: &A, input: R, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut shell = Shell::new();
    writeln!(out, "Feedback portal. Type help for commands.")?;
    draw(&shell, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        tracing::debug!(?command, view = %shell.active(), "shell command");
        if let Some(hint) = execute(api, &mut shell, command, out).await? {
            writeln!(out, "{hint}")?;
        }
    }
    Ok(())
}

async fn execute<A, W>(api: &A, shell: &mut Shell, command: ShellCommand, out: &mut W) -> Result<Option<String>, CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    match command {
        ShellCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(None);
        }
        ShellCommand::Quit => return Ok(None),
        ShellCommand::View(view) => switch(api, shell, view).await,
        ShellCommand::Toggle => {
            let next = shell.active().toggled();
            switch(api, shell, next).await;
        }
        ShellCommand::Show => {}
        command => {
            let hint = match shell.active() {
                ViewKind::Employee => employee(api, shell, command).await,
                ViewKind::Admin => admin(api, shell, command).await,
            };
            if hint.is_some() {
                return Ok(hint);
            }
        }
    }
    draw(shell, out)?;
    Ok(None)
}

async fn switch<A>(api: &A, shell: &mut Shell, view: ViewKind)
where
    A: FeedbackApi + ?Sized,
{
    let effects = shell.select(view);
    run_dashboard(api, shell, effects).await;
}

async fn run_dashboard<A>(api: &A, shell: &mut Shell, effects: Vec<Effect>)
where
    A: FeedbackApi + ?Sized,
{
    if let Some(dashboard) = shell.dashboard_mut() {
        run_effects(api, dashboard, effects).await;
    }
}

/// Apply a command to the employee form. Returns a hint when it does not apply.
async fn employee<A>(api: &A, shell: &mut Shell, command: ShellCommand) -> Option<String>
where
    A: FeedbackApi + ?Sized,
{
    let form = shell.form_mut()?;
    match command {
        ShellCommand::Category(category) => form.set_category(category),
        ShellCommand::Text(text) => form.set_text(text),
        ShellCommand::Submit => {
            submit_form(api, form).await;
        }
        ShellCommand::Dismiss => form.dismiss_message(),
        _ => return Some(wrong_view(ViewKind::Admin)),
    }
    None
}

/// Apply a command to the dashboard. Returns a hint when it does not apply.
async fn admin<A>(api: &A, shell: &mut Shell, command: ShellCommand) -> Option<String>
where
    A: FeedbackApi + ?Sized,
{
    let dashboard = shell.dashboard_mut()?;
    let effects = match command {
        ShellCommand::Category(category) => dashboard.set_category(category),
        ShellCommand::Reviewed(reviewed) => dashboard.set_reviewed(reviewed),
        ShellCommand::Limit(limit) => dashboard.set_limit(limit),
        ShellCommand::Sort(sort) => dashboard.set_sort(sort),
        ShellCommand::Page(page) => dashboard.go_to_page(page),
        ShellCommand::Next => dashboard.next_page(),
        ShellCommand::Previous => dashboard.previous_page(),
        ShellCommand::Refresh => dashboard.refresh(),
        ShellCommand::Search(term) => {
            dashboard.set_search(term);
            Vec::new()
        }
        ShellCommand::Review(id) => match dashboard.mark_reviewed(&id) {
            Some(effect) => vec![effect],
            None => return Some(format!("cannot mark {id} as reviewed (not on this page or already reviewed)")),
        },
        ShellCommand::Delete(id) => {
            if !dashboard.request_delete(&id) {
                return Some(format!("{id} is not on this page"));
            }
            Vec::new()
        }
        ShellCommand::Confirm => dashboard.confirm_delete().into_iter().collect(),
        ShellCommand::Cancel => {
            dashboard.cancel_delete();
            Vec::new()
        }
        ShellCommand::Dismiss => {
            dashboard.dismiss_message();
            Vec::new()
        }
        _ => return Some(wrong_view(ViewKind::Employee)),
    };
    run_effects(api, dashboard, effects).await;
    None
}

fn wrong_view(needed: ViewKind) -> String {
    let name = match needed {
        ViewKind::Employee => "employee",
        ViewKind::Admin => "admin",
    };
    format!("that command belongs to the {needed}; use `view {name}`")
}

fn draw<W: Write>(shell: &Shell, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "== {} ==", shell.active())?;
    let body = match shell.screen() {
        Screen::Employee(form) => render::form(form),
        Screen::Admin(dashboard) => render::dashboard(dashboard),
    };
    write!(out, "{body}")?;
    Ok(())
}
