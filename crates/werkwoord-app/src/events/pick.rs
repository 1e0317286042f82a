use kanal::AsyncSender;
use werkwoord_core::dictionary::VerbIndex;
use werkwoord_core::format::format_entry;
use werkwoord_core::page::page;
use werkwoord_core::types::{AppEvent, SessionId};

use crate::session::SessionStore;

use super::query::NOT_FOUND_REPLY;

pub const INVALID_CHOICE_REPLY: &str = "Ongeldige keuze. Kies een nummer uit de lijst.";

pub async fn handle_pick(
    index: &VerbIndex,
    sessions: &mut SessionStore,
    page_size: usize,
    session: SessionId,
    choice: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // 1-based pick within the currently displayed page.
    let picked = sessions.touch(session).and_then(|state| {
        let view = page(&state.matches, state.page, page_size);
        choice
            .checked_sub(1)
            .and_then(|i| view.items.get(i))
            .cloned()
    });

    let reply = match picked {
        Some(infinitive) => match index.lookup(&infinitive) {
            Some(verb) => format_entry(verb),
            None => NOT_FOUND_REPLY.to_string(),
        },
        None => INVALID_CHOICE_REPLY.to_string(),
    };

    app_to_ui_tx
        .send(AppEvent::Reply {
            session,
            text: reply,
        })
        .await?;

    Ok(())
}
