use std::collections::HashMap;
use std::time::{Duration, Instant};

use werkwoord_core::page::page;
use werkwoord_core::types::{NavDirection, SessionId};

/// Pagination state for one session's ambiguous match list.
pub struct PageState {
    pub matches: Vec<String>,
    pub page: usize,
    last_active: Instant,
}

/// Session-keyed page state. A new query supersedes the previous list,
/// navigation moves the cursor, idle sessions are evicted on a sweep.
pub struct SessionStore {
    sessions: HashMap<SessionId, PageState>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout,
        }
    }

    pub fn begin(&mut self, id: SessionId, matches: Vec<String>) {
        self.sessions.insert(
            id,
            PageState {
                matches,
                page: 0,
                last_active: Instant::now(),
            },
        );
    }

    pub fn get(&self, id: SessionId) -> Option<&PageState> {
        self.sessions.get(&id)
    }

    /// Refresh the session's activity timestamp.
    pub fn touch(&mut self, id: SessionId) -> Option<&PageState> {
        let state = self.sessions.get_mut(&id)?;
        state.last_active = Instant::now();
        Some(state)
    }

    /// Move the cursor one page, clamped at both ends. Returns the page
    /// index now current, or None when the session has no match list.
    pub fn step(
        &mut self,
        id: SessionId,
        direction: NavDirection,
        page_size: usize,
    ) -> Option<usize> {
        let state = self.sessions.get_mut(&id)?;
        let view = page(&state.matches, state.page, page_size);

        match direction {
            NavDirection::Next if view.has_next => state.page += 1,
            NavDirection::Previous if view.has_previous => state.page -= 1,
            _ => {}
        }

        state.last_active = Instant::now();
        Some(state.page)
    }

    pub fn clear(&mut self, id: SessionId) {
        self.sessions.remove(&id);
    }

    /// Drop sessions idle past the timeout; returns how many went.
    pub fn evict_idle(&mut self) -> usize {
        let before = self.sessions.len();
        let timeout = self.idle_timeout;
        self.sessions
            .retain(|_, state| state.last_active.elapsed() < timeout);
        before - self.sessions.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
