//! The toast queue.
//!
//! One `ToastStore` is built by the root provider and cloned into whoever needs to
//! raise a toast. Display order is insertion order. Each toast with a positive
//! duration gets a one-shot timer in a [`TimerQueue`]; [`ToastStore::tick`] fires the
//! ones that are due. Dismissal is idempotent and cancels the toast's timer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use super::types::{ToastId, ToastRecord, ToastRequest};
use crate::clock::Clock;
use crate::config::{ToastConfig, DEFAULT_TOAST_DURATION_MS};
use crate::logging;
use crate::timers::{TimerId, TimerQueue};

/// Receives the full ordered toast list whenever it changes.
pub trait ToastObserver: Send + Sync {
    fn on_toasts_changed(&self, toasts: &[ToastRecord]);
}

impl<F> ToastObserver for F
where
    F: Fn(&[ToastRecord]) + Send + Sync,
{
    fn on_toasts_changed(&self, toasts: &[ToastRecord]) {
        self(toasts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ObserverList = Vec<(SubscriptionId, Arc<dyn ToastObserver>)>;

#[derive(Default)]
struct StoreState {
    toasts: Vec<ToastRecord>,
    timers: TimerQueue<ToastId>,
    timer_by_toast: HashMap<ToastId, TimerId>,
    next_seq: u64,
    observers: ObserverList,
    next_subscription: u64,
}

impl StoreState {
    /// Data needed to notify observers once the lock is gone.
    fn change_set(&self) -> (Vec<ToastRecord>, ObserverList) {
        (self.toasts.clone(), self.observers.clone())
    }

    fn remove(&mut self, id: &ToastId) -> bool {
        match self.toasts.iter().position(|t| &t.id == id) {
            Some(pos) => {
                self.toasts.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Cloneable handle to the shared toast list.
#[derive(Clone)]
pub struct ToastStore {
    inner: Arc<Mutex<StoreState>>,
    clock: Arc<dyn Clock>,
    default_duration_ms: i64,
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("ToastStore")
            .field("toasts", &state.toasts.len())
            .field("pending_timers", &state.timer_by_toast.len())
            .field("observers", &state.observers.len())
            .field("default_duration_ms", &self.default_duration_ms)
            .finish()
    }
}

impl ToastStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_default_duration(clock, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn from_config(clock: Arc<dyn Clock>, config: &ToastConfig) -> Self {
        Self::with_default_duration(clock, config.default_duration_ms)
    }

    pub fn with_default_duration(clock: Arc<dyn Clock>, default_duration_ms: i64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreState::default())),
            clock,
            default_duration_ms,
        }
    }

    /// Append a toast and schedule its auto-dismiss. Returns its id.
    pub fn enqueue(&self, request: ToastRequest) -> ToastId {
        let now = self.clock.now();
        let duration_ms = request.duration_ms.unwrap_or(self.default_duration_ms);

        let (id, remaining, (snapshot, observers)) = {
            let mut state = self.inner.lock();
            state.next_seq += 1;
            let id = ToastId::from_seq(state.next_seq);

            if duration_ms > 0 {
                let deadline = now + Duration::from_millis(duration_ms.unsigned_abs());
                let timer = state.timers.schedule(deadline, id.clone());
                state.timer_by_toast.insert(id.clone(), timer);
            }

            state.toasts.push(ToastRecord {
                id: id.clone(),
                variant: request.variant,
                title: request.title,
                description: request.description,
                duration_ms,
                created_at: now,
            });
            (id, state.toasts.len(), state.change_set())
        };

        logging::log_toast_event(id.as_str(), "enqueued", remaining);
        notify(&observers, &snapshot);
        id
    }

    /// Remove a toast. Unknown or already-removed ids are a no-op.
    ///
    /// Returns whether a toast was removed.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        let changed = {
            let mut state = self.inner.lock();
            if !state.remove(id) {
                None
            } else {
                if let Some(timer) = state.timer_by_toast.remove(id) {
                    state.timers.cancel(timer);
                }
                Some(state.change_set())
            }
        };

        match changed {
            Some((snapshot, observers)) => {
                logging::log_toast_event(id.as_str(), "dismissed", snapshot.len());
                notify(&observers, &snapshot);
                true
            }
            None => {
                debug!(toast_id = %id, "Dismiss of absent toast ignored");
                false
            }
        }
    }

    /// Remove every toast and cancel all pending timers.
    pub fn dismiss_all(&self) {
        let changed = {
            let mut state = self.inner.lock();
            if state.toasts.is_empty() {
                None
            } else {
                state.toasts.clear();
                state.timers.clear();
                state.timer_by_toast.clear();
                Some(state.change_set())
            }
        };
        if let Some((snapshot, observers)) = changed {
            logging::log_toast_event("*", "dismissed_all", 0);
            notify(&observers, &snapshot);
        }
    }

    /// Fire every auto-dismiss timer that is due. Returns how many toasts expired.
    pub fn tick(&self) -> usize {
        let now = self.clock.now();
        let (expired, changed) = {
            let mut state = self.inner.lock();
            let due = state.timers.due(now);
            let mut expired = Vec::new();
            for id in due {
                state.timer_by_toast.remove(&id);
                if state.remove(&id) {
                    expired.push(id);
                }
            }
            let changed = (!expired.is_empty()).then(|| state.change_set());
            (expired, changed)
        };

        if let Some((snapshot, observers)) = changed {
            for id in &expired {
                logging::log_toast_event(id.as_str(), "expired", snapshot.len());
            }
            notify(&observers, &snapshot);
        }
        expired.len()
    }

    /// Earliest pending auto-dismiss deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.lock().timers.next_deadline()
    }

    /// Snapshot of the current list in display order.
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.inner.lock().toasts.clone()
    }

    pub fn get(&self, id: &ToastId) -> Option<ToastRecord> {
        self.inner.lock().toasts.iter().find(|t| &t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().toasts.is_empty()
    }

    /// Number of auto-dismiss timers still scheduled.
    pub fn pending_timers(&self) -> usize {
        self.inner.lock().timer_by_toast.len()
    }

    /// Register an observer. It is called right away with the current list.
    pub fn subscribe(&self, observer: impl ToastObserver + 'static) -> SubscriptionId {
        let observer: Arc<dyn ToastObserver> = Arc::new(observer);
        let (id, snapshot) = {
            let mut state = self.inner.lock();
            let id = SubscriptionId(state.next_subscription);
            state.next_subscription += 1;
            state.observers.push((id, Arc::clone(&observer)));
            (id, state.toasts.clone())
        };
        observer.on_toasts_changed(&snapshot);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.inner.lock();
        let before = state.observers.len();
        state.observers.retain(|(sid, _)| *sid != id);
        state.observers.len() != before
    }
}

fn notify(observers: &ObserverList, snapshot: &[ToastRecord]) {
    for (_, observer) in observers {
        observer.on_toasts_changed(snapshot);
    }
}
