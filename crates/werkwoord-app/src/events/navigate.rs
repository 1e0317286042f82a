use kanal::AsyncSender;
use werkwoord_core::types::{AppEvent, NavDirection, SessionId};

use crate::session::SessionStore;
use crate::ui::render_choices;

pub const NO_ACTIVE_SEARCH_REPLY: &str = "Geen actieve zoekopdracht. Stuur eerst een werkwoord.";

pub async fn handle_navigate(
    sessions: &mut SessionStore,
    page_size: usize,
    session: SessionId,
    direction: NavDirection,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let reply = sessions
        .step(session, direction, page_size)
        .and_then(|page_index| {
            sessions
                .get(session)
                .map(|state| render_choices(&state.matches, page_index, page_size))
        })
        .unwrap_or_else(|| NO_ACTIVE_SEARCH_REPLY.to_string());

    app_to_ui_tx
        .send(AppEvent::Reply {
            session,
            text: reply,
        })
        .await?;

    Ok(())
}
