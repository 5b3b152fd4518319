//! Canned responses served when a remote origin cannot be reached.
//!
//! Each origin has its own [`FallbackTable`]: an ordered list of
//! [`FallbackRoute`]s matched first-wins by substring containment on the
//! request path and by HTTP method. Resolution never fails; paths that match
//! no route get the table's default payload.

mod payloads;

use reqwest::Method;
use serde_json::Value;

use crate::gateway::Origin;

/// Which request methods a route answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodMatch {
    Any,
    Exactly(Method),
}

impl MethodMatch {
    fn accepts(&self, method: &Method) -> bool {
        match self {
            MethodMatch::Any => true,
            MethodMatch::Exactly(m) => m == method,
        }
    }
}

/// A canned payload, rendered to JSON on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canned {
    BrandConfig,
    BrandConfigUpdated,
    TrendList,
    IdeaList,
    AccountList,
    GeneratedIdeas,
    Message(&'static str),
}

impl Canned {
    #[must_use]
    pub fn render(&self) -> Value {
        match self {
            Canned::BrandConfig => payloads::brand_config(),
            Canned::BrandConfigUpdated => payloads::brand_config_updated(),
            Canned::TrendList => payloads::trend_list(),
            Canned::IdeaList => payloads::idea_list(),
            Canned::AccountList => payloads::account_list(),
            Canned::GeneratedIdeas => payloads::generated_ideas(),
            Canned::Message(message) => payloads::message(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRoute {
    /// Matched by substring containment on the request path.
    pub pattern: &'static str,
    pub method: MethodMatch,
    pub payload: Canned,
}

impl FallbackRoute {
    fn any(pattern: &'static str, payload: Canned) -> Self {
        Self {
            pattern,
            method: MethodMatch::Any,
            payload,
        }
    }

    fn only(pattern: &'static str, method: Method, payload: Canned) -> Self {
        Self {
            pattern,
            method: MethodMatch::Exactly(method),
            payload,
        }
    }

    fn matches(&self, path: &str, method: &Method) -> bool {
        path.contains(self.pattern) && self.method.accepts(method)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    routes: Vec<FallbackRoute>,
    default: Canned,
}

impl FallbackTable {
    /// Routes for the core API.
    #[must_use]
    pub fn core() -> Self {
        Self {
            routes: vec![
                FallbackRoute::only("/config/brand", Method::PUT, Canned::BrandConfigUpdated),
                FallbackRoute::any("/config/brand", Canned::BrandConfig),
                FallbackRoute::any("/trends/list", Canned::TrendList),
                FallbackRoute::any("/ideas/list", Canned::IdeaList),
                FallbackRoute::any("/auth/accounts", Canned::AccountList),
            ],
            default: Canned::Message("Mock response"),
        }
    }

    /// Routes for the agent API.
    #[must_use]
    pub fn agent() -> Self {
        Self {
            routes: vec![
                FallbackRoute::any("/generate_ideas", Canned::GeneratedIdeas),
                FallbackRoute::any("/refresh_trends", Canned::TrendList),
            ],
            default: Canned::Message("Mock agent response"),
        }
    }

    #[must_use]
    pub fn for_origin(origin: Origin) -> Self {
        match origin {
            Origin::Core => Self::core(),
            Origin::Agent => Self::agent(),
        }
    }

    #[must_use]
    pub fn routes(&self) -> &[FallbackRoute] {
        &self.routes
    }

    /// First route matching `path` and `method`, if any.
    #[must_use]
    pub fn route(&self, path: &str, method: &Method) -> Option<&FallbackRoute> {
        self.routes.iter().find(|r| r.matches(path, method))
    }

    /// Canned JSON for `path` and `method`. Never fails.
    #[must_use]
    pub fn resolve(&self, path: &str, method: &Method) -> Value {
        self.route(path, method)
            .map_or(&self.default, |r| &r.payload)
            .render()
    }
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
