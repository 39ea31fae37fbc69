//! Command implementations, kept out of `main` so they can run against any
//! writer.

use crate::config::RosterConfig;
use crate::error::Result;
use crate::terminal::TerminalContainer;
use roster_client::{DirectoryClient, UserListLoader};
use roster_core::{MemoryContainer, TodoRecord};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

/// How the `users` command renders its list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One bullet line per user
    #[default]
    List,
    /// A JSON document with the container id and its entries
    Json,
}

/// JSON shape of a rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedList {
    pub container: String,
    pub items: Vec<String>,
}

/// Fetch the user list and render it to `out`.
///
/// Returns the number of rendered entries. On failure nothing has been
/// written, in either format.
pub async fn users<W: Write + Send>(
    config: &RosterConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let client = DirectoryClient::new(config.client_config())?;
    let container_id = config.container.id.clone();

    info!(url = %client.users_url(), container = %container_id, "Loading users");

    match format {
        OutputFormat::List => {
            let loader =
                UserListLoader::new(client, TerminalContainer::new(container_id, &mut *out));
            let count = loader.try_load().await?;

            // An empty list still gets its heading
            loader.container().write_heading()?;

            Ok(count)
        }
        OutputFormat::Json => {
            let loader = UserListLoader::new(client, MemoryContainer::new(container_id.clone()));
            let count = loader.try_load().await?;

            let list = RenderedList {
                container: container_id,
                items: loader.container().items(),
            };
            serde_json::to_writer_pretty(&mut *out, &list)?;
            writeln!(out)?;

            Ok(count)
        }
    }
}

/// Fetch one todo and write it to `out` as pretty-printed JSON.
pub async fn todo<W: Write>(config: &RosterConfig, id: u64, out: &mut W) -> Result<TodoRecord> {
    let client = DirectoryClient::new(config.client_config())?;
    let todo = client.fetch_todo(id).await?;

    serde_json::to_writer_pretty(&mut *out, &todo)?;
    writeln!(out)?;

    Ok(todo)
}
