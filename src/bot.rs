//! Scripted chat responder.
//!
//! Keyword lookup in a fixed table: the first keyword found as a
//! substring of the lowercased input wins, in table order. No match
//! falls through to an echo reply. This is a linear scan on purpose;
//! the table is small and order is the precedence rule.

/// Keyword table, checked top to bottom. Earlier entries shadow later
/// ones when both match.
const RESPONSES: &[(&str, &str)] = &[
    (
        "hello",
        "Hey there! I'm a scripted demo bot living inside a terminal dashboard. Ask me about streamlit, rust, charts, or just say hi.",
    ),
    (
        "streamlit",
        "Streamlit is a Python framework that turns scripts into web apps by re-running them top to bottom on every interaction. This dashboard borrows that idea: every frame is redrawn from current state.",
    ),
    (
        "rust",
        "This whole dashboard is written in Rust with ratatui. No garbage collector was harmed in the making of this reply.",
    ),
    (
        "chart",
        "Head over to the Analytics page: sparklines, bar charts and a filtered table, all drawn from a synthetic dataset generated at startup.",
    ),
    (
        "theme",
        "Try the Widgets Gallery page; the theme picker there restyles every page on the next frame.",
    ),
    (
        "help",
        "Press Tab to move focus between the sidebar and the page, digits 1-8 to jump to a page, and ? for the key reference.",
    ),
    (
        "bye",
        "See you! Press q from the sidebar to quit.",
    ),
];

/// Pick a reply for free-text input.
pub fn reply(input: &str) -> String {
    let lowered = input.to_lowercase();
    for (keyword, response) in RESPONSES {
        if lowered.contains(keyword) {
            return (*response).to_string();
        }
    }
    format!(
        "I don't have a canned answer for \"{}\" - I'm only a keyword table. Try asking about streamlit, rust, charts or themes.",
        input
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streamlit_keyword_matches_any_case() {
        let r = reply("tell me about STREAMLIT please");
        assert!(r.contains("re-running"));
        assert_eq!(r, reply("streamlit?"));
    }

    #[test]
    fn fallback_echoes_input_verbatim() {
        let input = "what is the airspeed velocity of an unladen swallow";
        let r = reply(input);
        assert!(r.contains(input));
    }

    #[test]
    fn first_table_entry_wins_on_multiple_matches() {
        // "hello" precedes "rust" in the table.
        let r = reply("hello, rust friend");
        assert!(r.contains("scripted demo bot"));
    }

    #[test]
    fn substring_match_inside_longer_words() {
        assert!(reply("is rustacean a word?").contains("ratatui"));
    }
}
