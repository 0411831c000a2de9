//! Scripted mock backend for deterministic gateway tests.
//!
//! Canned outcomes are keyed by the exact search expression (with a default
//! for unmatched expressions) plus one outcome for the listing API. Every
//! invocation is appended to a shared call log so tests can assert on
//! cascade order and short-circuit behavior.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aperture_core::{Error, Group, ListingBackend, RawAsset, Result, SearchBackend};

/// A canned call outcome.
#[derive(Debug, Clone)]
pub enum Canned {
    /// Succeed with these raw records.
    Records(Vec<RawAsset>),
    /// Succeed with an empty list.
    Empty,
    /// Fail with a provider error.
    Fail(String),
    /// Fail with a timeout.
    Timeout(String),
}

impl Canned {
    fn resolve(&self) -> Result<Vec<RawAsset>> {
        match self {
            Self::Records(records) => Ok(records.clone()),
            Self::Empty => Ok(Vec::new()),
            Self::Fail(msg) => Err(Error::Provider(msg.clone())),
            Self::Timeout(msg) => Err(Error::Timeout(msg.clone())),
        }
    }
}

/// Mock provider backend with scripted outcomes and a call log.
#[derive(Clone)]
pub struct MockBackend {
    search_outcomes: Arc<HashMap<String, Canned>>,
    default_search: Arc<Canned>,
    listing: Arc<Canned>,
    groups: Arc<Vec<Group>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    /// Mock where every call succeeds with an empty result.
    pub fn new() -> Self {
        Self {
            search_outcomes: Arc::new(HashMap::new()),
            default_search: Arc::new(Canned::Empty),
            listing: Arc::new(Canned::Empty),
            groups: Arc::new(Vec::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script an outcome for one exact search expression.
    pub fn with_search(mut self, expression: impl Into<String>, outcome: Canned) -> Self {
        let mut outcomes = (*self.search_outcomes).clone();
        outcomes.insert(expression.into(), outcome);
        self.search_outcomes = Arc::new(outcomes);
        self
    }

    /// Script the outcome for any search expression without its own script.
    pub fn with_default_search(mut self, outcome: Canned) -> Self {
        self.default_search = Arc::new(outcome);
        self
    }

    /// Script the listing outcome.
    pub fn with_listing(mut self, outcome: Canned) -> Self {
        self.listing = Arc::new(outcome);
        self
    }

    /// Script the root groups.
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = Arc::new(groups);
        self
    }

    /// Every call made so far, in order: `search:<expression>`,
    /// `list:<prefix>` (or `list:(recent)`), `root_groups`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("call log poisoned").push(call);
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    async fn search(&self, expression: &str, _limit: u32) -> Result<Vec<RawAsset>> {
        self.record(format!("search:{}", expression));
        self.search_outcomes
            .get(expression)
            .unwrap_or(&*self.default_search)
            .resolve()
    }
}

#[async_trait]
impl ListingBackend for MockBackend {
    async fn list(&self, prefix: Option<&str>, _limit: u32) -> Result<Vec<RawAsset>> {
        self.record(format!("list:{}", prefix.unwrap_or("(recent)")));
        self.listing.resolve()
    }

    async fn root_groups(&self) -> Result<Vec<Group>> {
        self.record("root_groups".to_string());
        Ok((*self.groups).clone())
    }
}

/// Build a minimal well-formed raw asset for tests.
pub fn raw_asset(public_id: &str, created_at: &str) -> RawAsset {
    RawAsset {
        public_id: Some(public_id.to_string()),
        secure_url: Some(format!("https://res.example.com/{}.jpg", public_id)),
        width: Some(4000),
        height: Some(2667),
        folder: None,
        created_at: Some(created_at.to_string()),
        context: None,
    }
}
