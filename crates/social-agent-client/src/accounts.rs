//! Connected-account bookkeeping.
//!
//! At most one entry per platform: recording a connection replaces whatever
//! was held for that platform before.

use social_agent_core::{AccountStatus, ConnectedAccount, Platform};

use crate::error::ContentError;

#[derive(Debug, Clone)]
pub struct AccountBook {
    accounts: Vec<ConnectedAccount>,
    next_id: i64,
}

impl Default for AccountBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn list(&self) -> &[ConnectedAccount] {
        &self.accounts
    }

    /// Replaces the held accounts wholesale, e.g. after loading from the API.
    ///
    /// Later entries win when the list names a platform more than once.
    pub fn replace_all(&mut self, accounts: Vec<ConnectedAccount>) {
        self.accounts.clear();
        for account in accounts {
            self.next_id = self.next_id.max(account.id + 1);
            self.accounts.retain(|a| a.platform != account.platform);
            self.accounts.push(account);
        }
    }

    /// Records `platform` as connected, replacing any prior entry for it.
    pub fn record_connected(&mut self, platform: Platform, username: &str) -> ConnectedAccount {
        self.accounts.retain(|a| a.platform != platform);
        let account = ConnectedAccount {
            id: self.next_id,
            platform,
            username: username.to_string(),
            status: AccountStatus::Connected,
        };
        self.next_id += 1;
        self.accounts.push(account.clone());
        tracing::info!(%platform, id = account.id, "account connected");
        account
    }

    /// Removes the account with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no account has that id.
    pub fn remove(&mut self, id: i64) -> Result<ConnectedAccount, ContentError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(ContentError::NotFound { kind: "account", id })?;
        Ok(self.accounts.remove(index))
    }

    #[must_use]
    pub fn find(&self, platform: Platform) -> Option<&ConnectedAccount> {
        self.accounts.iter().find(|a| a.platform == platform)
    }

    /// Connection status for `platform`; an absent platform is disconnected.
    #[must_use]
    pub fn status(&self, platform: Platform) -> AccountStatus {
        self.find(platform)
            .map_or(AccountStatus::Disconnected, |a| a.status)
    }
}
