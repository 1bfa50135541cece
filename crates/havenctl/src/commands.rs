//! Command execution.
//!
//! Each command issues its backend call(s) under the caller's token and
//! reduces the outcome to a [`Report`].

use crate::cli::Command;
use crate::errors::{EXIT_CANCELLED, EXIT_REQUEST_FAILED, EXIT_SUCCESS};
use crate::render;
use anyhow::Result;
use haven_client::{ApiClient, ApiError, ApiResponse, CancellationToken, Outcome};
use haven_shared::chat::NewChatMessage;
use serde::Serialize;

/// What a command resolved to, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Rendered(String),
    Failed(ApiError),
    Cancelled,
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Rendered(_) => EXIT_SUCCESS,
            Report::Failed(_) => EXIT_REQUEST_FAILED,
            Report::Cancelled => EXIT_CANCELLED,
        }
    }
}

/// Reduce one call's result; `text` renders the success payload.
fn present<T: Serialize>(
    result: Result<Outcome<T>, ApiError>,
    json: bool,
    text: impl FnOnce(&ApiResponse<T>) -> String,
) -> Result<Report> {
    let response = match result {
        Ok(Outcome::Success(response)) => response,
        Ok(Outcome::Cancelled) => return Ok(Report::Cancelled),
        Err(e) => return Ok(Report::Failed(e)),
    };

    if json {
        Ok(Report::Rendered(serde_json::to_string_pretty(&response)?))
    } else {
        Ok(Report::Rendered(text(&response)))
    }
}

pub async fn run(
    client: &ApiClient,
    command: Command,
    json: bool,
    cancel: &CancellationToken,
) -> Result<Report> {
    match command {
        Command::Categories => present(client.list_categories(cancel).await, json, |r| {
            render::categories(&r.data)
        }),
        Command::Articles { category } => present(
            client.list_articles(category.as_deref(), cancel).await,
            json,
            |r| render::articles(&r.data),
        ),
        Command::Library { category } => present(
            client.load_library(category.as_deref(), cancel).await,
            json,
            |r| render::library(&r.data),
        ),
        Command::Article { id } => present(client.get_article(&id, cancel).await, json, |r| {
            render::article(&r.data)
        }),
        Command::DeleteArticle { id } => {
            present(client.delete_article(&id, cancel).await, json, |r| {
                r.message.clone()
            })
        }
        Command::Groups => present(client.list_groups(cancel).await, json, |r| {
            render::groups(&r.data)
        }),
        Command::Join { group, alias } => {
            present(client.join_group(&group, &alias, cancel).await, json, |r| {
                render::membership(&r.data)
            })
        }
        Command::Leave { group } => present(client.leave_group(&group, cancel).await, json, |r| {
            r.message.clone()
        }),
        Command::Messages { group, since } => present(
            client.list_messages(&group, since, cancel).await,
            json,
            |r| render::messages(&r.data),
        ),
        Command::Send { group, alias, body } => {
            let message = NewChatMessage { alias, body };
            present(
                client.send_message(&group, &message, cancel).await,
                json,
                |r| r.message.clone(),
            )
        }
        Command::Schedule { therapist } => {
            present(client.get_schedule(&therapist, cancel).await, json, |r| {
                render::schedule(&r.data)
            })
        }
    }
}
