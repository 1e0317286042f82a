use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use werkwoord_core::types::{AppEvent, NavDirection, SessionId};

/// The interactive terminal is a single conversation.
pub const REPL_SESSION: SessionId = 0;

enum Input {
    Event(AppEvent),
    Quit,
    Ignored,
}

/// Read stdin lines and translate them into app events. Lines starting
/// with ':' are commands; everything else is a verb query.
pub async fn input_loop(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Input::Event(event) => event_tx.send(event).await?,
                    Input::Quit => break,
                    Input::Ignored => {}
                }
            }
        }
    }

    tracing::info!("input closed, shutting down");
    Ok(())
}

fn parse_line(line: &str) -> Input {
    let line = line.trim();

    match line {
        "" => Input::Ignored,
        ":q" | ":quit" => Input::Quit,
        ":n" | ":next" => Input::Event(AppEvent::Navigate {
            session: REPL_SESSION,
            direction: NavDirection::Next,
        }),
        ":p" | ":prev" => Input::Event(AppEvent::Navigate {
            session: REPL_SESSION,
            direction: NavDirection::Previous,
        }),
        _ => {
            if let Some(rest) = line.strip_prefix(':') {
                if let Ok(choice) = rest.parse::<usize>() {
                    return Input::Event(AppEvent::Pick {
                        session: REPL_SESSION,
                        choice,
                    });
                }
            }
            Input::Event(AppEvent::Query {
                session: REPL_SESSION,
                text: line.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_query() {
        match parse_line("  gewerkt ") {
            Input::Event(AppEvent::Query { text, .. }) => assert_eq!(text, "gewerkt"),
            _ => panic!("expected a query"),
        }
    }

    #[test]
    fn navigation_commands() {
        assert!(matches!(
            parse_line(":next"),
            Input::Event(AppEvent::Navigate {
                direction: NavDirection::Next,
                ..
            })
        ));
        assert!(matches!(
            parse_line(":p"),
            Input::Event(AppEvent::Navigate {
                direction: NavDirection::Previous,
                ..
            })
        ));
    }

    #[test]
    fn numbered_command_picks_from_the_page() {
        assert!(matches!(
            parse_line(":3"),
            Input::Event(AppEvent::Pick { choice: 3, .. })
        ));
    }

    #[test]
    fn blank_lines_are_ignored_and_quit_quits() {
        assert!(matches!(parse_line("   "), Input::Ignored));
        assert!(matches!(parse_line(":q"), Input::Quit));
    }
}
