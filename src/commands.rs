//! One-shot subcommand handlers.
//!
//! Each handler drives the same `portal` state machine the interactive portal
//! uses, then prints the result. Output goes to the supplied writer so the
//! handlers can be exercised against a buffer.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::{BufRead, Write};

use portal::dashboard::{DELETE_FAILED, DELETE_PROMPT, DELETED, DashboardState, MARK_FAILED, MARKED_REVIEWED};
use portal::form::FormState;
use portal::types::FeedbackList;
use portal::{Category, ListQuery};
use serde::Serialize;

use crate::api::FeedbackApi;
use crate::error::CliError;
use crate::render;
use crate::runner::{run_effects, submit_form};

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub async fn ping<A, W>(api: &A, base_url: &str, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    if !api.health().await {
        return Err(CliError::Unreachable(portal::api::health_url(base_url)));
    }
    writeln!(out, "ok")?;
    Ok(())
}

/// Run the submission form once with the given values.
pub async fn submit<A, W>(api: &A, category: Category, text: &str, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    let mut form = FormState::new();
    form.set_category(Some(category));
    form.set_text(text);
    submit_form(api, &mut form).await;
    match form.message() {
        Some(message) if message.is_error() => Err(CliError::Rejected(message.text.clone())),
        Some(message) => {
            writeln!(out, "{}", message.text)?;
            Ok(())
        }
        None => Ok(()),
    }
}

/// Fetch one page (plus stats) and print it.
pub async fn list<A, W>(api: &A, query: ListQuery, search: Option<&str>, json: bool, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    let mut dashboard = DashboardState::with_query(query);
    let effects = dashboard.mount();
    run_effects(api, &mut dashboard, effects).await;
    if let Some(term) = search {
        dashboard.set_search(term);
    }

    if let Some(message) = dashboard.message().filter(|m| m.is_error()) {
        return Err(CliError::Rejected(message.text.clone()));
    }

    if json {
        let pagination = dashboard.pagination();
        let page = FeedbackList {
            data: dashboard.visible_rows().into_iter().cloned().collect(),
            page: pagination.map_or(1, |p| p.page),
            pages: pagination.map_or(0, |p| p.pages),
            total: pagination.map_or(0, |p| p.total),
        };
        return print_json(out, &page);
    }

    write!(out, "{}", render::dashboard(&dashboard))?;
    if !dashboard.show_pagination() {
        if let Some(pagination) = dashboard.pagination() {
            writeln!(out, "{}", pagination.label())?;
        }
    }
    Ok(())
}

pub async fn get<A, W>(api: &A, id: &str, json: bool, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    let record = api.get(id).await?;
    if json {
        return print_json(out, &record);
    }
    write!(out, "{}", render::record(&record))?;
    Ok(())
}

/// Mark one record reviewed. Already reviewed records are left alone.
pub async fn review<A, W>(api: &A, id: &str, json: bool, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    let current = api.get(id).await?;
    if current.is_reviewed {
        writeln!(out, "Feedback {id} is already reviewed")?;
        return Ok(());
    }
    let updated = api.mark_reviewed(id).await.map_err(|error| {
        tracing::warn!(%error, %id, "mark reviewed failed");
        CliError::Rejected(format!("{MARK_FAILED}: {error}"))
    })?;
    if json {
        return print_json(out, &updated);
    }
    writeln!(out, "{MARKED_REVIEWED}")?;
    Ok(())
}

/// Delete after an interactive confirmation unless `yes` is set.
pub async fn delete<A, R, W>(api: &A, id: &str, yes: bool, input: &mut R, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    R: BufRead,
    W: Write,
{
    if !yes && !confirm(input, out)? {
        writeln!(out, "Cancelled")?;
        return Ok(());
    }
    api.delete(id).await.map_err(|error| {
        tracing::warn!(%error, %id, "delete failed");
        CliError::Rejected(format!("{DELETE_FAILED}: {error}"))
    })?;
    writeln!(out, "{DELETED}")?;
    Ok(())
}

/// Ask the delete question; only `y` or `yes` accepts.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool, CliError> {
    write!(out, "{DELETE_PROMPT} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub async fn stats<A, W>(api: &A, json: bool, out: &mut W) -> Result<(), CliError>
where
    A: FeedbackApi + ?Sized,
    W: Write,
{
    let stats = api.stats().await?;
    if json {
        return print_json(out, &stats);
    }
    write!(out, "{}", render::stats_cards(&stats))?;
    write!(out, "{}", render::category_breakdown(&stats))?;
    Ok(())
}
