use kanal::AsyncReceiver;
use werkwoord_core::page::page;
use werkwoord_core::types::AppEvent;

const GREETING: &str =
    "Stuur me een Nederlands werkwoord of een vervoegde vorm — ik geef je alle vormen en Engelse vertaling.";

/// Print replies to the terminal as they come in.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    println!("{GREETING}\n");

    while let Ok(event) = app_to_ui_rx.recv().await {
        if let AppEvent::Reply { text, .. } = event {
            println!("{text}\n");
        }
    }

    Ok(())
}

/// Render one page of an ambiguous match list as a numbered menu with
/// navigation hints matching the page's actual neighbors.
pub fn render_choices(matches: &[String], page_index: usize, page_size: usize) -> String {
    let view = page(matches, page_index, page_size);

    let mut out = String::from("Meerdere werkwoorden gevonden. Kies:\n");
    for (i, infinitive) in view.items.iter().enumerate() {
        out.push_str(&format!("  :{} {}\n", i + 1, infinitive));
    }

    let mut nav = Vec::new();
    if view.has_previous {
        nav.push(":prev ⬅️");
    }
    if view.has_next {
        nav.push(":next ➡️");
    }
    if !nav.is_empty() {
        out.push_str(&format!("  {}\n", nav.join("  ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("werkwoord{i:02}")).collect()
    }

    #[test]
    fn numbers_restart_on_every_page() {
        let list = matches(25);

        let first = render_choices(&list, 0, 10);
        assert!(first.contains(":1 werkwoord00"));
        assert!(first.contains(":10 werkwoord09"));
        assert!(!first.contains(":prev"));
        assert!(first.contains(":next"));

        let last = render_choices(&list, 2, 10);
        assert!(last.contains(":1 werkwoord20"));
        assert!(last.contains(":5 werkwoord24"));
        assert!(last.contains(":prev"));
        assert!(!last.contains(":next"));
    }
}
