use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use werkwoord_core::dictionary::VerbIndex;
use werkwoord_core::types::AppEvent;
use werkwoord_dictionary::VerbsLoader;

use crate::session::SessionStore;
use crate::state::AppState;

pub mod navigate;
pub mod pick;
pub mod query;

use navigate::handle_navigate;
use pick::handle_pick;
use query::handle_query;

const EVICTION_SWEEP: Duration = Duration::from_secs(60);

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    io_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (index, page_size, idle_timeout) = {
        let config = state.config.read().await;
        let index = if config.dictionary.enabled {
            load_index(&config.dictionary.additional_paths)
        } else {
            tracing::warn!("Dictionary disabled, starting with an empty index");
            VerbIndex::new()
        };
        (
            index,
            config.page_size,
            Duration::from_secs(config.session.idle_timeout_seconds),
        )
    };

    let mut sessions = SessionStore::new(idle_timeout);
    let mut sweep = tokio::time::interval(EVICTION_SWEEP);
    sweep.tick().await; // the first tick completes immediately

    tracing::info!("event loop ready, {} verbs indexed", index.entry_count());
    loop {
        tokio::select! {
            event = io_to_app_rx.recv() => {
                let event = event?;
                handle_event(&index, &mut sessions, page_size, &app_to_ui_tx, event).await?;
            }
            _ = sweep.tick() => {
                let evicted = sessions.evict_idle();
                if evicted > 0 {
                    tracing::debug!("evicted {} idle sessions", evicted);
                }
            }
        }
    }
}

/// Embedded dictionary first, extra files merged over it.
fn load_index(additional_paths: &[String]) -> VerbIndex {
    let mut index = VerbsLoader::load_embedded().unwrap_or_else(|e| {
        tracing::error!("Failed to load embedded dictionary: {}", e);
        tracing::warn!("Starting with empty dictionary");
        VerbIndex::new()
    });

    for path in additional_paths {
        match VerbsLoader::load_from_file(Path::new(path)) {
            Ok(additional) => {
                tracing::info!("Merging additional dictionary from: {}", path);
                index = index.merge(additional);
            }
            Err(e) => {
                tracing::warn!("Failed to load dictionary from {}: {}", path, e);
            }
        }
    }

    index
}

async fn handle_event(
    index: &VerbIndex,
    sessions: &mut SessionStore,
    page_size: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Query { session, text } => {
            handle_query(index, sessions, page_size, session, &text, app_to_ui_tx).await?;
        }
        AppEvent::Navigate { session, direction } => {
            handle_navigate(sessions, page_size, session, direction, app_to_ui_tx).await?;
        }
        AppEvent::Pick { session, choice } => {
            handle_pick(index, sessions, page_size, session, choice, app_to_ui_tx).await?;
        }
        AppEvent::Reply { .. } => {
            // Outbound only, nothing to handle here.
        }
    }

    Ok(())
}
