//! Query-keyed place enrichment for recommendation cards.
//!
//! [`PlaceEnrichment`] owns the observable state for one card. Each call to
//! [`PlaceEnrichment::resolve`] starts a new attempt: the previous task is
//! aborted and its generation retired, so a late response for an old query
//! can never overwrite the state of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tabi_core::PlaceResult;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::PlaceLookup;
use crate::error::PlacesError;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load place data";
pub const MALFORMED_MESSAGE: &str = "Received malformed place data";

/// Why a lookup ended in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport error, non-2xx status, or rate limiting.
    Request,
    /// The API answered but the body did not match the schema.
    Malformed,
}

impl FailureKind {
    #[must_use]
    pub const fn from_error(error: &PlacesError) -> Self {
        match error {
            PlacesError::Parse(_) => Self::Malformed,
            _ => Self::Request,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Request => LOAD_FAILED_MESSAGE,
            Self::Malformed => MALFORMED_MESSAGE,
        }
    }
}

/// What the card layer observes for the latest query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentState {
    /// Query this state belongs to; `None` when idle.
    pub query: Option<String>,
    pub result: Option<PlaceResult>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub failure: Option<FailureKind>,
    pub credential_present: bool,
}

impl EnrichmentState {
    #[must_use]
    pub const fn idle(credential_present: bool) -> Self {
        Self {
            query: None,
            result: None,
            is_loading: false,
            error: None,
            failure: None,
            credential_present,
        }
    }

    fn loading(query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            is_loading: true,
            ..Self::idle(true)
        }
    }

    fn finished(query: String, outcome: Result<Option<PlaceResult>, PlacesError>) -> Self {
        match outcome {
            Ok(result) => Self {
                query: Some(query),
                result,
                ..Self::idle(true)
            },
            Err(error) => {
                let failure = FailureKind::from_error(&error);
                tracing::warn!(%error, query = %query, "place lookup failed");
                Self {
                    query: Some(query),
                    error: Some(failure.message().to_string()),
                    failure: Some(failure),
                    ..Self::idle(true)
                }
            }
        }
    }

    /// Classify the state so the presentation layer can pick its fallback.
    #[must_use]
    pub fn view(&self) -> PlaceView<'_> {
        if !self.credential_present {
            return PlaceView::NoCredential;
        }
        if self.is_loading {
            return PlaceView::Loading;
        }
        if let Some(failure) = self.failure {
            return PlaceView::Failed(failure);
        }
        if self.query.is_none() {
            return PlaceView::Idle;
        }
        match &self.result {
            None => PlaceView::NotFound,
            Some(result) if result.has_photo() => PlaceView::Photo(result),
            Some(result) => PlaceView::NoPhoto(result),
        }
    }
}

/// Mutually exclusive display situations for a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceView<'a> {
    NoCredential,
    Idle,
    Loading,
    Failed(FailureKind),
    NotFound,
    NoPhoto(&'a PlaceResult),
    Photo(&'a PlaceResult),
}

impl PlaceView<'_> {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoCredential => "no_credential",
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Failed(_) => "failed",
            Self::NotFound => "not_found",
            Self::NoPhoto(_) => "no_photo",
            Self::Photo(_) => "photo",
        }
    }
}

/// Resolves place details for the most recently requested query.
///
/// Must be driven from inside a Tokio runtime: [`Self::resolve`] spawns the lookup.
pub struct PlaceEnrichment<L: PlaceLookup> {
    lookup: Option<Arc<L>>,
    state: Arc<watch::Sender<EnrichmentState>>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<L: PlaceLookup> PlaceEnrichment<L> {
    /// `None` means no credential is configured; every resolve stays idle.
    pub fn new(lookup: Option<L>) -> Self {
        let credential_present = lookup.is_some();
        let (state, _) = watch::channel(EnrichmentState::idle(credential_present));
        Self {
            lookup: lookup.map(Arc::new),
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Enrichment without a credential.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub const fn credential_present(&self) -> bool {
        self.lookup.is_some()
    }

    /// Start resolving `query`, superseding any earlier request.
    ///
    /// Empty or missing queries, and a missing credential, leave the state
    /// idle without issuing a request.
    pub fn resolve(&self, query: Option<&str>) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let (Some(lookup), Some(query)) = (self.lookup.as_ref(), query) else {
            tracing::debug!(
                credential_present = self.credential_present(),
                "place resolution skipped"
            );
            self.state
                .send_replace(EnrichmentState::idle(self.credential_present()));
            return;
        };

        self.state.send_replace(EnrichmentState::loading(query));

        let lookup = Arc::clone(lookup);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let query = query.to_string();
        *task = Some(tokio::spawn(async move {
            let outcome = lookup.lookup(&query).await;
            state.send_if_modified(|s| {
                if current.load(Ordering::SeqCst) != generation {
                    tracing::debug!(query = %query, "discarding superseded place lookup");
                    return false;
                }
                *s = EnrichmentState::finished(query, outcome);
                true
            });
        }));
    }

    /// Current state.
    pub fn snapshot(&self) -> EnrichmentState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<EnrichmentState> {
        self.state.subscribe()
    }

    /// Wait until the latest request has reached a terminal state.
    pub async fn settled(&self) -> EnrichmentState {
        let mut rx = self.subscribe();
        let settled = rx.wait_for(|s| !s.is_loading).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| self.snapshot())
    }
}

impl<L: PlaceLookup> Drop for PlaceEnrichment<L> {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = task.take() {
            handle.abort();
        }
    }
}
