use crate::dictionary::VerbEntry;

const NO_TRANSLATION: &str = "no translation";
const MISSING_FORM: &str = "-";

/// Render a verb entry as the fixed conjugation card.
///
/// Line order: header (infinitive and translation), infinitive, present
/// tense across all six persons, simple past, past participle with its
/// auxiliary verb. Missing data renders as a placeholder so the card
/// shape never changes.
pub fn format_entry(verb: &VerbEntry) -> String {
    let translation = if verb.translation.is_empty() {
        NO_TRANSLATION
    } else {
        &verb.translation
    };

    let mut out = format!("{} — {}\n", verb.infinitive, translation);
    out.push_str(&format!("\nInfinitief: {}", verb.infinitive));

    let present = &verb.present;
    out.push_str(&format!(
        "\nTegenwoordige tijd: ik {}, jij {}, hij {}\n  wij {}, jullie {}, zij {}",
        form(&present.ik),
        form(&present.jij),
        form(&present.hij),
        form(&present.wij),
        form(&present.jullie),
        form(&present.zij),
    ));

    out.push_str(&format!(
        "\nVerleden tijd: ik {}, wij {}",
        form(&verb.past.ik),
        form(&verb.past.wij),
    ));

    out.push_str(&format!("\nVoltooid deelwoord: {}", participle_line(verb)));
    out
}

fn form(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_FORM)
}

fn participle_line(verb: &VerbEntry) -> String {
    if verb.past_participle.is_empty() {
        return MISSING_FORM.to_string();
    }

    let auxiliaries = verb.auxiliaries();
    if auxiliaries.is_empty() {
        return verb.past_participle.clone();
    }

    format!("{} {}", auxiliaries.join(" / "), verb.past_participle)
}
