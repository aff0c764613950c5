use actorctl_core::client::{CallError, ClientConnectError};
use actorctl_core::proto::{ActorsRunningGetResponseItem, PingResponse};
use colored::*;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

/// The list of running actors, rendered as an aligned table.
pub struct ActorTable(pub Vec<ActorsRunningGetResponseItem>);

/// Any serializable response, rendered as pretty-printed JSON.
pub struct JsonBody<T: serde::Serialize>(pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<PingResponse> for FormattedString {
    fn from(response: PingResponse) -> Self {
        FormattedString(format!("{} id={}", "Pong:".green().bold(), response.id))
    }
}

impl From<CallError> for FormattedString {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Status(status) => FormattedString(format!(
                "{} code={:?} message={:?}",
                "gRPC Failed:".red().bold(),
                status.code(),
                status.message()
            )),
            err => FormattedString(format!("{}\n\n'{}'", "Call Failed:".red().bold(), err)),
        }
    }
}

impl From<ClientConnectError> for FormattedString {
    fn from(err: ClientConnectError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Connection Error:".red().bold(), err))
    }
}

impl<T: serde::Serialize> From<JsonBody<T>> for FormattedString {
    fn from(JsonBody(value): JsonBody<T>) -> Self {
        FormattedString(
            serde_json::to_string_pretty(&value)
                .unwrap_or_else(|e| format!("<failed to render JSON: {e}>")),
        )
    }
}

impl From<ActorTable> for FormattedString {
    fn from(ActorTable(items): ActorTable) -> Self {
        if items.is_empty() {
            return FormattedString("No actors running.".yellow().to_string());
        }

        const HEADERS: [&str; 3] = ["ACTOR ID", "NAME", "TYPE"];

        let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
        for item in &items {
            widths[0] = widths[0].max(item.actor_id.len());
            widths[1] = widths[1].max(item.actor_name.len());
            widths[2] = widths[2].max(item.actor_type.len());
        }

        // Pad before coloring, ANSI escape codes would throw the widths off.
        // The last column stays unpadded to avoid trailing whitespace.
        let header = format!(
            "{:<w0$}  {:<w1$}  {}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            w0 = widths[0],
            w1 = widths[1],
        );

        let mut out = String::new();
        out.push_str(&format!("{}\n", header.bold()));
        for item in &items {
            out.push_str(&format!(
                "{:<w0$}  {:<w1$}  {}\n",
                item.actor_id,
                item.actor_name,
                item.actor_type,
                w0 = widths[0],
                w1 = widths[1],
            ));
        }
        FormattedString(out.trim_end().to_string())
    }
}
