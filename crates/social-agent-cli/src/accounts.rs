//! Connected account command handlers.

use clap::Subcommand;
use social_agent_client::ContentService;
use social_agent_core::Platform;

use crate::print_json;

/// Sub-commands available under `accounts`.
#[derive(Debug, Subcommand)]
pub enum AccountsCommands {
    /// List connected accounts
    List,
    /// Connect a platform and print its authorization URL
    Connect { platform: Platform },
    /// Disconnect an account by id
    Disconnect { id: i64 },
}

pub(crate) async fn run_accounts(
    service: &ContentService,
    command: AccountsCommands,
) -> anyhow::Result<()> {
    match command {
        AccountsCommands::List => print_json(&service.load_accounts().await),
        AccountsCommands::Connect { platform } => {
            let connection = service.connect(platform).await;
            if let Some(url) = &connection.authorization_url {
                tracing::info!(%platform, %url, "open the authorization URL to finish connecting");
            }
            print_json(&connection)
        }
        AccountsCommands::Disconnect { id } => {
            // Each invocation starts with an empty book.
            service.load_accounts().await;
            print_json(&service.disconnect(id).await?)
        }
    }
}
