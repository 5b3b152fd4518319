//! The content service: the one entry point the presentation layer calls.
//!
//! Read-style operations never fail on network trouble. A [`NetworkError`]
//! from the gateway is logged and swapped for the matching canned payload
//! from the origin's [`FallbackTable`]. Mutations (`approve`, `disconnect`,
//! brand updates) notify the backend best-effort and apply the local change
//! whatever the backend said.

mod decode;
mod generation;
mod listing;

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use social_agent_core::{
    load_brand_config, AccountStatus, AppConfig, BrandConfig, ConnectedAccount, GenerateRequest,
    Idea, IdeaStatus, Platform, Trend,
};
use tokio::sync::Mutex;

use crate::accounts::AccountBook;
use crate::engagement;
use crate::error::{ContentError, NetworkError};
use crate::fallback::FallbackTable;
use crate::gateway::{HttpGateway, Origin};
use crate::store::IdeaStore;

use self::generation::GeneratedBatch;
use self::listing::ListedIdea;

/// Username recorded for connections completed through the mock flow.
const DEMO_USERNAME: &str = "demo_user";

/// Result of [`ContentService::connect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    /// Where the user should authorize, when the platform has a login endpoint
    /// and the backend answered with one.
    pub authorization_url: Option<String>,
    pub account: ConnectedAccount,
}

pub struct ContentService {
    gateway: HttpGateway,
    core_fallback: FallbackTable,
    agent_fallback: FallbackTable,
    ideas: Mutex<IdeaStore>,
    accounts: Mutex<AccountBook>,
    trends: Mutex<Vec<Trend>>,
    brand: Mutex<Option<BrandConfig>>,
}

impl ContentService {
    #[must_use]
    pub fn new(gateway: HttpGateway, store: IdeaStore) -> Self {
        Self {
            gateway,
            core_fallback: FallbackTable::core(),
            agent_fallback: FallbackTable::agent(),
            ideas: Mutex::new(store),
            accounts: Mutex::new(AccountBook::new()),
            trends: Mutex::new(Vec::new()),
            brand: Mutex::new(None),
        }
    }

    /// Builds the service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidOrigin`] or [`ContentError::Http`] if the
    /// gateway cannot be built, or [`ContentError::Config`] if a configured
    /// brand file cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        let gateway = HttpGateway::from_config(config)?;
        let mut store = IdeaStore::with_generator(engagement::from_seed(config.engagement_seed));
        if config.seed_demo_ideas {
            store = store.with_demo_ideas();
        }

        let brand = config
            .brand_path
            .as_deref()
            .map(load_brand_config)
            .transpose()?;

        tracing::info!(
            env = %config.env,
            core = %config.api_url,
            agent = %config.agent_url,
            seeded = config.seed_demo_ideas,
            "content service ready"
        );

        let service = Self::new(gateway, store);
        Ok(match brand {
            Some(brand) => service.with_brand_config(brand),
            None => service,
        })
    }

    /// Sets the initially held brand config.
    #[must_use]
    pub fn with_brand_config(mut self, brand: BrandConfig) -> Self {
        self.brand = Mutex::new(Some(brand));
        self
    }

    fn fallback(&self, origin: Origin) -> &FallbackTable {
        match origin {
            Origin::Core => &self.core_fallback,
            Origin::Agent => &self.agent_fallback,
        }
    }

    fn log_failure(origin: Origin, err: &NetworkError, serving: &str) {
        tracing::warn!(
            %origin,
            method = %err.method,
            path = %err.path,
            status = ?err.status,
            error = %err,
            "remote call failed; {serving}"
        );
    }

    /// Calls the origin and degrades to the canned payload on failure.
    async fn request(&self, origin: Origin, method: Method, path: &str, body: Option<&Value>) -> Value {
        match self.gateway.call(origin, method.clone(), path, body).await {
            Ok(value) => value,
            Err(err) => {
                Self::log_failure(origin, &err, "serving fallback payload");
                self.fallback(origin).resolve(path, &method)
            }
        }
    }

    /// Calls the origin and only logs a failure. For notifications whose
    /// outcome does not change local state.
    async fn notify(&self, origin: Origin, method: Method, path: &str) {
        if let Err(err) = self.gateway.call(origin, method, path, None).await {
            Self::log_failure(origin, &err, "continuing with local state");
        }
    }

    /// Decodes `value`, falling back to the canned payload for the same route
    /// when the live response has drifted out of shape.
    fn decode_or_canned<T: serde::de::DeserializeOwned>(
        &self,
        origin: Origin,
        method: &Method,
        path: &str,
        value: Value,
    ) -> Result<T, ContentError> {
        match serde_json::from_value(value) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::warn!(%origin, path, error = %e, "unexpected response shape; using canned payload");
                serde_json::from_value(self.fallback(origin).resolve(path, method)).map_err(
                    |source| ContentError::Deserialize {
                        context: format!("canned {method} {path}"),
                        source,
                    },
                )
            }
        }
    }

    // ── Health ──────────────────────────────────────────────────────────────

    pub async fn health_check(&self) -> Value {
        self.request(Origin::Core, Method::GET, "/health", None).await
    }

    // ── Brand config ────────────────────────────────────────────────────────

    /// Reads the brand config and holds it as the current one.
    ///
    /// # Errors
    ///
    /// Only [`ContentError::Deserialize`], if neither the live nor the canned
    /// payload is a valid brand config.
    pub async fn brand_config(&self) -> Result<BrandConfig, ContentError> {
        let path = "/config/brand";
        let value = self.request(Origin::Core, Method::GET, path, None).await;
        let brand: BrandConfig = self.decode_or_canned(Origin::Core, &Method::GET, path, value)?;
        *self.brand.lock().await = Some(brand.clone());
        Ok(brand)
    }

    /// Replaces the brand config wholesale and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Serialize`] if the config cannot be encoded as
    /// a request body; nothing is sent and the held config is unchanged.
    pub async fn update_brand_config(&self, brand: BrandConfig) -> Result<Value, ContentError> {
        let body = serde_json::to_value(&brand).map_err(|source| ContentError::Serialize {
            context: "brand config".to_string(),
            source,
        })?;
        let ack = self
            .request(Origin::Core, Method::PUT, "/config/brand", Some(&body))
            .await;
        *self.brand.lock().await = Some(brand);
        Ok(ack)
    }

    /// Brand config currently held, if one was read, loaded, or written.
    pub async fn held_brand_config(&self) -> Option<BrandConfig> {
        self.brand.lock().await.clone()
    }

    // ── Trends ──────────────────────────────────────────────────────────────

    /// Fetches fresh trends from the agent and replaces the held set.
    pub async fn refresh_trends(&self) -> Vec<Trend> {
        let value = self
            .request(Origin::Agent, Method::POST, "/refresh_trends", None)
            .await;
        let trends: Vec<Trend> = decode::items(&value, "trends", "/refresh_trends");
        *self.trends.lock().await = trends.clone();
        tracing::info!(count = trends.len(), "trends refreshed");
        trends
    }

    /// Lists stored trends from the core API without touching the held set.
    pub async fn list_trends(&self) -> Vec<Trend> {
        let value = self
            .request(Origin::Core, Method::GET, "/trends/list", None)
            .await;
        decode::items(&value, "trends", "/trends/list")
    }

    pub async fn trends(&self) -> Vec<Trend> {
        self.trends.lock().await.clone()
    }

    pub async fn trends_for(&self, platform: Platform) -> Vec<Trend> {
        self.trends
            .lock()
            .await
            .iter()
            .filter(|t| t.source == platform)
            .cloned()
            .collect()
    }

    // ── Ideas ───────────────────────────────────────────────────────────────

    /// Generates ideas through the agent and appends them to the store as drafts.
    ///
    /// When the agent is unreachable or returns nothing usable, the three
    /// canned templates are appended instead, still under fresh ids.
    pub async fn generate(&self, request: &GenerateRequest) -> Vec<Idea> {
        let path = "/generate_ideas";
        let live = match serde_json::to_value(request) {
            Ok(body) => match self
                .gateway
                .call(Origin::Agent, Method::POST, path, Some(&body))
                .await
            {
                Ok(value) => GeneratedBatch::parse(&value),
                Err(err) => {
                    Self::log_failure(Origin::Agent, &err, "using canned idea templates");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "cannot encode generate request; using canned idea templates");
                None
            }
        };

        let batch = live
            .or_else(|| GeneratedBatch::parse(&self.agent_fallback.resolve(path, &Method::POST)))
            .unwrap_or_default();

        let mut store = self.ideas.lock().await;
        let ideas: Vec<Idea> = batch
            .into_ideas()
            .into_iter()
            .map(|idea| store.append_draft(idea))
            .collect();
        tracing::info!(count = ideas.len(), "ideas generated");
        ideas
    }

    /// Local ideas followed by whatever the core API lists.
    ///
    /// A failed listing yields only the local ideas.
    pub async fn list_ideas(&self) -> Vec<Idea> {
        let path = "/ideas/list";
        let remote: Vec<Idea> = match self.gateway.call(Origin::Core, Method::GET, path, None).await
        {
            Ok(value) => {
                let now = Utc::now();
                decode::items::<ListedIdea>(&value, "ideas", path)
                    .into_iter()
                    .filter_map(|row| row.into_idea(now))
                    .collect()
            }
            Err(err) => {
                Self::log_failure(Origin::Core, &err, "listing local ideas only");
                Vec::new()
            }
        };

        let mut all = self.ideas.lock().await.list().to_vec();
        all.extend(remote);
        all
    }

    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if the store has no idea with `id`.
    pub async fn idea(&self, id: i64) -> Result<Idea, ContentError> {
        self.ideas
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or(ContentError::NotFound { kind: "idea", id })
    }

    pub async fn ideas_by_status(&self, status: IdeaStatus) -> Vec<Idea> {
        self.ideas
            .lock()
            .await
            .by_status(status)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn filter_ideas<P>(&self, predicate: P) -> Vec<Idea>
    where
        P: Fn(&Idea) -> bool,
    {
        self.ideas
            .lock()
            .await
            .filter(predicate)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Approves a local idea, notifying the core API first.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] for an unknown id (no remote call is made),
    /// [`ContentError::InvalidTransition`] if the idea is past `approved`.
    pub async fn approve(&self, id: i64) -> Result<Idea, ContentError> {
        self.idea(id).await?;
        self.notify(Origin::Core, Method::POST, &format!("/agent/approve_idea/{id}"))
            .await;
        let idea = self.ideas.lock().await.approve(id)?.clone();
        tracing::info!(id, "idea approved");
        Ok(idea)
    }

    /// Schedules an approved idea; `at` defaults to 24 hours from now.
    ///
    /// # Errors
    ///
    /// [`ContentError::ScheduleNotInFuture`] if `at` is not after now, else
    /// [`ContentError::NotFound`] or [`ContentError::InvalidTransition`].
    pub async fn schedule(&self, id: i64, at: Option<DateTime<Utc>>) -> Result<Idea, ContentError> {
        let now = Utc::now();
        let at = at.unwrap_or_else(|| now + Duration::hours(24));
        if at <= now {
            return Err(ContentError::ScheduleNotInFuture { id, at });
        }
        let idea = self.ideas.lock().await.schedule(id, at)?.clone();
        tracing::info!(id, scheduled_for = %at, "idea scheduled");
        Ok(idea)
    }

    /// Marks a scheduled idea as posted now with placeholder engagement.
    ///
    /// # Errors
    ///
    /// [`ContentError::NotFound`] or [`ContentError::InvalidTransition`].
    pub async fn publish(&self, id: i64) -> Result<Idea, ContentError> {
        let idea = self.ideas.lock().await.publish(id, Utc::now())?.clone();
        tracing::info!(id, "idea published");
        Ok(idea)
    }

    // ── Accounts ────────────────────────────────────────────────────────────

    /// Requests an OAuth authorization URL for `platform`.
    ///
    /// `None` for platforms without a login endpoint, or when the response
    /// carries no `auth_url`.
    pub async fn authorization_url(&self, platform: Platform) -> Option<String> {
        if !platform.has_oauth_login() {
            return None;
        }
        let value = self
            .request(
                Origin::Core,
                Method::GET,
                &format!("/auth/{platform}/login"),
                None,
            )
            .await;
        value
            .get("auth_url")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// Records `platform` as connected, replacing any prior entry for it.
    pub async fn record_connected(&self, platform: Platform, username: &str) -> ConnectedAccount {
        self.accounts
            .lock()
            .await
            .record_connected(platform, username)
    }

    /// Requests the authorization URL and records the platform as connected.
    ///
    /// Waiting for the user to finish the OAuth popup belongs to the caller.
    pub async fn connect(&self, platform: Platform) -> Connection {
        let authorization_url = self.authorization_url(platform).await;
        let account = self.record_connected(platform, DEMO_USERNAME).await;
        Connection {
            authorization_url,
            account,
        }
    }

    /// Loads accounts from the core API and replaces the held collection.
    pub async fn load_accounts(&self) -> Vec<ConnectedAccount> {
        let value = self
            .request(Origin::Core, Method::GET, "/auth/accounts", None)
            .await;
        let loaded: Vec<ConnectedAccount> = decode::items(&value, "accounts", "/auth/accounts");
        let mut book = self.accounts.lock().await;
        book.replace_all(loaded);
        book.list().to_vec()
    }

    pub async fn connected_accounts(&self) -> Vec<ConnectedAccount> {
        self.accounts.lock().await.list().to_vec()
    }

    pub async fn account_status(&self, platform: Platform) -> AccountStatus {
        self.accounts.lock().await.status(platform)
    }

    /// Notifies the core API, then drops the account locally.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if no held account has `id`.
    pub async fn disconnect(&self, account_id: i64) -> Result<ConnectedAccount, ContentError> {
        self.notify(
            Origin::Core,
            Method::DELETE,
            &format!("/auth/accounts/{account_id}"),
        )
        .await;
        let removed = self.accounts.lock().await.remove(account_id)?;
        tracing::info!(id = account_id, platform = %removed.platform, "account disconnected");
        Ok(removed)
    }

    // ── Pass-through ────────────────────────────────────────────────────────

    pub async fn refresh_analytics(&self) -> Value {
        self.request(Origin::Core, Method::POST, "/analytics/refresh", None)
            .await
    }

    pub async fn run_publisher(&self) -> Value {
        self.request(Origin::Core, Method::POST, "/publish/run", None)
            .await
    }

    pub async fn create_schedule(&self, data: &Value) -> Value {
        self.request(Origin::Core, Method::POST, "/schedule/create", Some(data))
            .await
    }
}
