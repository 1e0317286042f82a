use kanal::AsyncSender;
use werkwoord_core::dictionary::VerbIndex;
use werkwoord_core::format::format_entry;
use werkwoord_core::resolve::{SearchResult, resolve};
use werkwoord_core::types::{AppEvent, SessionId};

use crate::session::SessionStore;
use crate::ui::render_choices;

pub const NOT_FOUND_REPLY: &str = "Geen werkwoord gevonden. Probeer een andere vorm.";

pub async fn handle_query(
    index: &VerbIndex,
    sessions: &mut SessionStore,
    page_size: usize,
    session: SessionId,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("session {}: query '{}'", session, text);

    let reply = match resolve(index, text) {
        SearchResult::NotFound => {
            sessions.clear(session);
            NOT_FOUND_REPLY.to_string()
        }
        SearchResult::Unique(verb) => {
            sessions.clear(session);
            format_entry(verb)
        }
        SearchResult::Ambiguous(matches) => {
            tracing::debug!("session {}: {} candidates", session, matches.len());
            let reply = render_choices(&matches, 0, page_size);
            sessions.begin(session, matches);
            reply
        }
    };

    app_to_ui_tx
        .send(AppEvent::Reply {
            session,
            text: reply,
        })
        .await?;

    Ok(())
}
