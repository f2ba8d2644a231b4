//! Per-user cooking session storage.
//!
//! `SessionStore` is the seam between the orchestrator and wherever sessions
//! live. The in-memory implementation keeps one slot per user behind its own
//! mutex, so commands for different users never contend and commands for the
//! same user are applied one after another.

use async_trait::async_trait;
use fridgechef_core::cooking::{CookingResponse, CookingSession};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// What a transition does to the stored session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    Keep,
    Replace(CookingSession),
    Remove,
}

/// A pure state transition, evaluated while the user's session is locked.
///
/// Receives the current session (if any) and returns the change to apply
/// together with the response for the user.
pub type SessionMutation =
    Box<dyn FnOnce(Option<&CookingSession>) -> (SessionChange, CookingResponse) + Send>;

/// Concurrency-safe mapping from user ID to at most one cooking session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the user's session.
    async fn get(&self, user_id: &str) -> Option<CookingSession>;

    /// Stores `session` under its `user_id`, replacing any previous session.
    async fn put(&self, session: CookingSession);

    /// Removes the user's session, returning it if there was one.
    async fn remove(&self, user_id: &str) -> Option<CookingSession>;

    /// Runs `mutation` atomically against the user's session.
    ///
    /// No other `get`/`put`/`remove`/`apply` for the same user can interleave
    /// between reading the session and writing the result.
    async fn apply(&self, user_id: &str, mutation: SessionMutation) -> CookingResponse;
}

struct SessionSlot {
    session: Option<CookingSession>,
    touched_at: Instant,
}

impl SessionSlot {
    fn empty() -> Self {
        Self {
            session: None,
            touched_at: Instant::now(),
        }
    }

    /// Drops the session if it has been idle longer than `idle_timeout`.
    fn expire(&mut self, idle_timeout: Option<Duration>) -> bool {
        let expired = match (idle_timeout, &self.session) {
            (Some(limit), Some(_)) => self.touched_at.elapsed() >= limit,
            _ => false,
        };
        if expired {
            self.session = None;
        }
        expired
    }

    fn touch(&mut self) {
        self.touched_at = Instant::now();
    }
}

/// Process-local session store.
///
/// Sessions exist only in this process: a second instance (or a second
/// server) sees none of them.
pub struct InMemorySessionStore {
    slots: RwLock<HashMap<String, Arc<Mutex<SessionSlot>>>>,
    idle_timeout: Option<Duration>,
}

impl InMemorySessionStore {
    /// Creates a store whose sessions never expire.
    pub fn new() -> Self {
        Self::with_idle_timeout(None)
    }

    /// Creates a store that discards sessions idle for longer than `idle_timeout`.
    pub fn with_idle_timeout(idle_timeout: Option<Duration>) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    async fn existing_slot(&self, user_id: &str) -> Option<Arc<Mutex<SessionSlot>>> {
        let slots = self.slots.read().await;
        slots.get(user_id).cloned()
    }

    async fn slot(&self, user_id: &str) -> Arc<Mutex<SessionSlot>> {
        if let Some(slot) = self.existing_slot(user_id).await {
            return slot;
        }
        let mut slots = self.slots.write().await;
        slots
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionSlot::empty())))
            .clone()
    }

    /// Drops the user's slot once it holds no session and nobody else uses it.
    async fn forget_if_empty(&self, user_id: &str) {
        let mut slots = self.slots.write().await;
        // The write lock keeps new clones out, so a count of one means idle.
        let idle = slots.get(user_id).is_some_and(|slot| {
            Arc::strong_count(slot) == 1
                && slot.try_lock().is_ok_and(|guard| guard.session.is_none())
        });
        if idle {
            slots.remove(user_id);
        }
    }

    /// Number of live (non-expired) sessions.
    pub async fn active_count(&self) -> usize {
        let slots = self.slots.read().await;
        let mut count = 0;
        for slot in slots.values() {
            let mut slot = slot.lock().await;
            slot.expire(self.idle_timeout);
            if slot.session.is_some() {
                count += 1;
            }
        }
        count
    }

    /// Discards idle sessions and forgets slots nobody is using.
    ///
    /// Returns the number of sessions that expired.
    pub async fn evict_expired(&self) -> usize {
        let mut slots = self.slots.write().await;
        let mut expired = 0;
        slots.retain(|user_id, slot| {
            let Ok(mut guard) = slot.try_lock() else {
                // A command is running for this user right now.
                return true;
            };
            if guard.expire(self.idle_timeout) {
                tracing::debug!(user_id = %user_id, "[SessionStore] Session expired");
                expired += 1;
            }
            let empty = guard.session.is_none();
            drop(guard);
            // The write lock keeps new clones out, so a count of one means idle.
            !(empty && Arc::strong_count(slot) == 1)
        });
        expired
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<CookingSession> {
        let slot = self.existing_slot(user_id).await?;
        let mut slot = slot.lock().await;
        slot.expire(self.idle_timeout);
        let session = slot.session.clone();
        if session.is_some() {
            slot.touch();
        }
        session
    }

    async fn put(&self, session: CookingSession) {
        let slot = self.slot(&session.user_id).await;
        let mut slot = slot.lock().await;
        slot.session = Some(session);
        slot.touch();
    }

    async fn remove(&self, user_id: &str) -> Option<CookingSession> {
        let removed = {
            let slot = self.existing_slot(user_id).await?;
            let mut slot = slot.lock().await;
            slot.expire(self.idle_timeout);
            slot.session.take()
        };
        self.forget_if_empty(user_id).await;
        removed
    }

    async fn apply(&self, user_id: &str, mutation: SessionMutation) -> CookingResponse {
        let (response, empty) = {
            let slot = self.slot(user_id).await;
            let mut slot = slot.lock().await;
            slot.expire(self.idle_timeout);

            let (change, response) = mutation(slot.session.as_ref());
            match change {
                SessionChange::Keep => {}
                SessionChange::Replace(session) => slot.session = Some(session),
                SessionChange::Remove => slot.session = None,
            }
            slot.touch();
            (response, slot.session.is_none())
        };
        if empty {
            self.forget_if_empty(user_id).await;
        }
        response
    }
}

/// Periodically evicts idle sessions from `store`.
///
/// The task runs until aborted through the returned handle.
pub fn spawn_session_sweeper(store: Arc<InMemorySessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let expired = store.evict_expired().await;
            if expired > 0 {
                tracing::info!("[SessionStore] Evicted {} idle cooking session(s)", expired);
            }
        }
    })
}
