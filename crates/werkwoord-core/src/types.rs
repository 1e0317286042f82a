/// Identifies one conversation. The collaborator layer keys its page
/// state by this; the core never stores it.
pub type SessionId = u64;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Free-text verb query from a session.
    Query { session: SessionId, text: String },
    /// Page navigation within the session's current match list.
    Navigate {
        session: SessionId,
        direction: NavDirection,
    },
    /// 1-based pick from the currently displayed page.
    Pick { session: SessionId, choice: usize },
    /// Rendered text going back to the session.
    Reply { session: SessionId, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}
