//! Readability pass applied to generated bodies.

use deepads_core::VoiceStyle;

use crate::text::capitalize;

/// Jargon replaced with plain words for the simpler voice styles.
const PLAIN_WORDS: &[(&str, &str)] = &[
    ("optimize", "improve"),
    ("conversion", "results"),
    ("experience", "use"),
    ("leverage", "use"),
];

const TECH_NOTE: &str = "\n\nTech note: Built with data-driven optimization in mind.";

/// Adjust body copy to the requested voice style.
///
/// - `VerySimple` / `Simple`: swap jargon for plain words, in lowercase and
///   capitalized form.
/// - `Technical`: append a short technical note.
/// - `Balanced`: unchanged.
#[must_use]
pub fn apply_voice_style(text: &str, style: VoiceStyle) -> String {
    match style {
        VoiceStyle::VerySimple | VoiceStyle::Simple => {
            PLAIN_WORDS.iter().fold(text.to_string(), |acc, (jargon, plain)| {
                acc.replace(jargon, plain)
                    .replace(&capitalize(jargon), &capitalize(plain))
            })
        }
        VoiceStyle::Technical => format!("{text}{TECH_NOTE}"),
        VoiceStyle::Balanced => text.to_string(),
    }
}
