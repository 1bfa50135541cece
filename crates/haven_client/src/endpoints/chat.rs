//! Anonymous group chat.

use super::ack;
use crate::client::ApiClient;
use crate::request::{path_segment, RequestSpec};
use chrono::{DateTime, SecondsFormat, Utc};
use haven_shared::chat::{ChatGroup, ChatMessage, Membership, NewChatMessage};
use haven_shared::{ApiError, Outcome};
use serde_json::json;
use tokio_util::sync::CancellationToken;

impl ApiClient {
    pub async fn list_groups(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Vec<ChatGroup>>, ApiError> {
        self.execute(
            RequestSpec::get("chat/groups")
                .cancel_on(cancel)
                .fallback("Groups loaded"),
        )
        .await
    }

    pub async fn join_group(
        &self,
        group_id: &str,
        alias: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Membership>, ApiError> {
        let group = path_segment(group_id)?;
        let spec = RequestSpec::post(format!("chat/groups/{}/join", group))
            .json(&json!({ "alias": alias }))?
            .cancel_on(cancel)
            .fallback("Joined group");
        self.execute(spec).await
    }

    pub async fn leave_group(
        &self,
        group_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Outcome<()>, ApiError> {
        let group = path_segment(group_id)?;
        let spec = RequestSpec::post(format!("chat/groups/{}/leave", group))
            .cancel_on(cancel)
            .fallback("Left group");
        ack(self.execute(spec).await)
    }

    /// Messages in a group, optionally only those after `since`.
    pub async fn list_messages(
        &self,
        group_id: &str,
        since: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Vec<ChatMessage>>, ApiError> {
        let group = path_segment(group_id)?;
        let since = since.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true));
        self.execute(
            RequestSpec::get(format!("chat/groups/{}/messages", group))
                .query_opt("since", since)
                .cancel_on(cancel)
                .fallback("Messages loaded"),
        )
        .await
    }

    pub async fn send_message(
        &self,
        group_id: &str,
        message: &NewChatMessage,
        cancel: &CancellationToken,
    ) -> Result<Outcome<ChatMessage>, ApiError> {
        let group = path_segment(group_id)?;
        let spec = RequestSpec::post(format!("chat/groups/{}/messages", group))
            .json(message)?
            .cancel_on(cancel)
            .fallback("Message sent");
        self.execute(spec).await
    }
}
