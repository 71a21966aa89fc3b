//! Request ordering for views fed by overlapping fetches.
//!
//! The transforms are pure; these types let a caller discard a response
//! that was overtaken by a newer request for the same view, and skip a
//! periodic refresh while the previous one is still running. Both are
//! `Send + Sync`.

use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Handle for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    key: String,
    generation: u64,
}

impl RequestTicket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// "Last request wins" bookkeeping, keyed by view (e.g. `chart`, `compare`).
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: DashMap<String, u64>,
    next: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier ticket for `key`.
    pub fn begin(&self, key: &str) -> RequestTicket {
        // The generation is drawn under the entry lock so that concurrent
        // callers on one key publish in draw order.
        let mut slot = self.latest.entry(key.to_string()).or_insert(0);
        let generation = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        *slot = generation;
        drop(slot);
        RequestTicket {
            key: key.to_string(),
            generation,
        }
    }

    /// True while no newer ticket has been issued for the same key.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest
            .get(&ticket.key)
            .map(|latest| *latest == ticket.generation)
            .unwrap_or(false)
    }

    /// Passes `value` through when `ticket` is current and drops it otherwise.
    pub fn accept<T>(&self, ticket: &RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::warn!(
                "Dropping stale {} response (generation {})",
                ticket.key,
                ticket.generation
            );
            None
        }
    }

    /// Forgets `key`; outstanding tickets for it become stale.
    pub fn reset(&self, key: &str) {
        self.latest.remove(key);
    }
}

/// Single-flight guard for the periodic market refresh.
#[derive(Debug, Default)]
pub struct RefreshGate {
    in_flight: AtomicBool,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a permit when no refresh is running. A tick that gets `None`
    /// should be skipped.
    pub fn try_begin(&self) -> Option<RefreshPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshPermit { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one refresh; dropping it reopens the gate.
#[derive(Debug)]
pub struct RefreshPermit<'a> {
    gate: &'a RefreshGate,
}

impl Drop for RefreshPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
